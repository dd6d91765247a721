//! Sort policy: maps a sort token to an ordering instruction.
//!
//! | token        | field             | direction |
//! |--------------|-------------------|-----------|
//! | `priceAsc`   | `price`           | asc       |
//! | `priceDesc`  | `price`           | desc      |
//! | anything else, or none | `nextSessionDate` | asc |
//!
//! Unrecognized tokens are not an error; they select the default ordering.

use serde::Serialize;

use crate::document::field_value::CourseField;
use crate::search::criteria::SearchCriteria;

/// Fields results can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    NextSessionDate,
    Price,
}

impl SortField {
    /// The record field this sort field reads.
    pub fn course_field(self) -> CourseField {
        match self {
            SortField::NextSessionDate => CourseField::NextSessionDate,
            SortField::Price => CourseField::Price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort options a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl SortOption {
    /// Parse a sort token. Matching is exact; anything unknown is `Default`.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("priceAsc") => SortOption::PriceAsc,
            Some("priceDesc") => SortOption::PriceDesc,
            _ => SortOption::Default,
        }
    }

    /// The field and direction this option sorts by.
    pub fn sort_spec(self) -> SortSpec {
        match self {
            SortOption::Default => SortSpec::new(SortField::NextSessionDate, SortDirection::Asc),
            SortOption::PriceAsc => SortSpec::new(SortField::Price, SortDirection::Asc),
            SortOption::PriceDesc => SortSpec::new(SortField::Price, SortDirection::Desc),
        }
    }
}

/// A sort field together with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        SortSpec { field, direction }
    }
}

/// Resolve a sort token into a field and direction.
pub fn resolve(sort_token: Option<&str>) -> SortSpec {
    SortOption::from_token(sort_token).sort_spec()
}

/// Resolved ordering and pagination bounds for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderingSpec {
    pub field: SortField,
    pub direction: SortDirection,
    pub page: usize,
    pub size: usize,
}

impl OrderingSpec {
    /// Build an ordering from a sort spec and paging bounds.
    pub fn new(sort: SortSpec, page: usize, size: usize) -> Self {
        OrderingSpec {
            field: sort.field,
            direction: sort.direction,
            page,
            size,
        }
    }

    /// Derive the ordering for a request.
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        Self::new(resolve(criteria.sort()), criteria.page(), criteria.size())
    }

    /// The field and direction, without paging.
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.field, self.direction)
    }

    /// Number of records to skip.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}
