//! Search criteria captured from an incoming request.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{CourseSearchError, Result};

/// Page size used when a request does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Immutable search criteria for one request.
///
/// An absent field means "unconstrained". Text fields holding only
/// whitespace count as absent, so `category = ""` never filters anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    query: Option<String>,
    category: Option<String>,
    #[serde(rename = "type")]
    course_type: Option<String>,
    min_age: Option<i32>,
    max_age: Option<i32>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    from_date: Option<DateTime<Utc>>,
    sort: Option<String>,
    page: usize,
    size: usize,
}

impl SearchCriteria {
    /// Create a builder for search criteria.
    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::new()
    }

    /// Free-text query, if it has any non-whitespace text.
    pub fn query(&self) -> Option<&str> {
        text(&self.query)
    }

    pub fn category(&self) -> Option<&str> {
        text(&self.category)
    }

    pub fn course_type(&self) -> Option<&str> {
        text(&self.course_type)
    }

    pub fn min_age(&self) -> Option<i32> {
        self.min_age
    }

    pub fn max_age(&self) -> Option<i32> {
        self.max_age
    }

    pub fn min_price(&self) -> Option<f64> {
        self.min_price
    }

    pub fn max_price(&self) -> Option<f64> {
        self.max_price
    }

    pub fn from_date(&self) -> Option<DateTime<Utc>> {
        self.from_date
    }

    /// The raw sort token as supplied by the caller.
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Zero-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Page size, at least 1 when built through [`SearchCriteriaBuilder`].
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a free-text query is present.
    pub fn has_query(&self) -> bool {
        self.query().is_some()
    }

    /// Whether any structured filter is present.
    pub fn has_additional_filters(&self) -> bool {
        self.category().is_some()
            || self.course_type().is_some()
            || self.min_age.is_some()
            || self.max_age.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.from_date.is_some()
    }

    /// A copy of these criteria with the free-text query removed.
    pub fn without_query(&self) -> SearchCriteria {
        SearchCriteria {
            query: None,
            ..self.clone()
        }
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        SearchCriteria {
            query: None,
            category: None,
            course_type: None,
            min_age: None,
            max_age: None,
            min_price: None,
            max_price: None,
            from_date: None,
            sort: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// A builder for [`SearchCriteria`].
///
/// This is the request boundary: [`SearchCriteriaBuilder::build`] rejects
/// values the core does not re-validate.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteriaBuilder {
    criteria: SearchCriteria,
}

impl SearchCriteriaBuilder {
    /// Create a new builder with default paging.
    pub fn new() -> Self {
        SearchCriteriaBuilder {
            criteria: SearchCriteria::default(),
        }
    }

    pub fn query<S: Into<String>>(mut self, query: S) -> Self {
        self.criteria.query = Some(query.into());
        self
    }

    pub fn category<S: Into<String>>(mut self, category: S) -> Self {
        self.criteria.category = Some(category.into());
        self
    }

    pub fn course_type<S: Into<String>>(mut self, course_type: S) -> Self {
        self.criteria.course_type = Some(course_type.into());
        self
    }

    pub fn min_age(mut self, min_age: i32) -> Self {
        self.criteria.min_age = Some(min_age);
        self
    }

    pub fn max_age(mut self, max_age: i32) -> Self {
        self.criteria.max_age = Some(max_age);
        self
    }

    pub fn min_price(mut self, min_price: f64) -> Self {
        self.criteria.min_price = Some(min_price);
        self
    }

    pub fn max_price(mut self, max_price: f64) -> Self {
        self.criteria.max_price = Some(max_price);
        self
    }

    pub fn from_date(mut self, from_date: DateTime<Utc>) -> Self {
        self.criteria.from_date = Some(from_date);
        self
    }

    pub fn sort<S: Into<String>>(mut self, sort: S) -> Self {
        self.criteria.sort = Some(sort.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.criteria.page = page;
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.criteria.size = size;
        self
    }

    /// Build the criteria, rejecting a zero page size and NaN prices.
    pub fn build(self) -> Result<SearchCriteria> {
        let criteria = self.criteria;
        if criteria.size == 0 {
            return Err(CourseSearchError::invalid_criteria(
                "size must be at least 1",
            ));
        }
        for (name, price) in [("minPrice", criteria.min_price), ("maxPrice", criteria.max_price)] {
            if price.is_some_and(f64::is_nan) {
                return Err(CourseSearchError::invalid_criteria(format!(
                    "{name} must be a number"
                )));
            }
        }
        Ok(criteria)
    }
}
