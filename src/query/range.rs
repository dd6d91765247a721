//! Range query implementation for querying within value ranges.

use serde::Serialize;

use crate::document::course::CourseRecord;
use crate::document::field_value::{CourseField, FieldValue};
use crate::query::matcher::Matcher;

/// Bound type for range queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound<T> {
    /// Inclusive bound.
    Included(T),
    /// Exclusive bound.
    Excluded(T),
    /// Unbounded (no limit).
    Unbounded,
}

impl<T: PartialOrd> Bound<T> {
    /// Check if a value satisfies this bound as a lower bound.
    pub fn contains_lower(&self, value: &T) -> bool {
        match self {
            Bound::Included(bound) => value >= bound,
            Bound::Excluded(bound) => value > bound,
            Bound::Unbounded => true,
        }
    }

    /// Check if a value satisfies this bound as an upper bound.
    pub fn contains_upper(&self, value: &T) -> bool {
        match self {
            Bound::Included(bound) => value <= bound,
            Bound::Excluded(bound) => value < bound,
            Bound::Unbounded => true,
        }
    }
}

/// A query that matches records with field values within a range.
///
/// Records without a value for the field never match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeQuery {
    /// The field to search in.
    field: CourseField,
    /// Lower bound of the range.
    lower_bound: Bound<FieldValue>,
    /// Upper bound of the range.
    upper_bound: Bound<FieldValue>,
}

impl RangeQuery {
    /// Create a new range query with both bounds inclusive.
    pub fn new(field: CourseField, lower: Option<FieldValue>, upper: Option<FieldValue>) -> Self {
        let lower_bound = match lower {
            Some(val) => Bound::Included(val),
            None => Bound::Unbounded,
        };
        let upper_bound = match upper {
            Some(val) => Bound::Included(val),
            None => Bound::Unbounded,
        };
        Self::with_bounds(field, lower_bound, upper_bound)
    }

    /// Create a range query with custom bound types.
    pub fn with_bounds(
        field: CourseField,
        lower_bound: Bound<FieldValue>,
        upper_bound: Bound<FieldValue>,
    ) -> Self {
        RangeQuery {
            field,
            lower_bound,
            upper_bound,
        }
    }

    /// Create a range query for values greater than or equal to the given value.
    pub fn greater_than_or_equal<V: Into<FieldValue>>(field: CourseField, value: V) -> Self {
        Self::with_bounds(field, Bound::Included(value.into()), Bound::Unbounded)
    }

    /// Create a range query for values less than or equal to the given value.
    pub fn less_than_or_equal<V: Into<FieldValue>>(field: CourseField, value: V) -> Self {
        Self::with_bounds(field, Bound::Unbounded, Bound::Included(value.into()))
    }

    /// Create an inclusive range query between two values.
    pub fn between<V: Into<FieldValue>>(field: CourseField, lower: V, upper: V) -> Self {
        Self::new(field, Some(lower.into()), Some(upper.into()))
    }

    /// Get the field.
    pub fn field(&self) -> CourseField {
        self.field
    }

    /// Get the lower bound.
    pub fn lower_bound(&self) -> &Bound<FieldValue> {
        &self.lower_bound
    }

    /// Get the upper bound.
    pub fn upper_bound(&self) -> &Bound<FieldValue> {
        &self.upper_bound
    }

    /// Check if a value falls within the range.
    pub fn contains(&self, value: &FieldValue) -> bool {
        self.lower_bound.contains_lower(value) && self.upper_bound.contains_upper(value)
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        let lower = match &self.lower_bound {
            Bound::Included(v) => format!("[{v}"),
            Bound::Excluded(v) => format!("{{{v}"),
            Bound::Unbounded => "[*".to_string(),
        };
        let upper = match &self.upper_bound {
            Bound::Included(v) => format!("{v}]"),
            Bound::Excluded(v) => format!("{v}}}"),
            Bound::Unbounded => "*]".to_string(),
        };
        format!("{}:{} TO {}", self.field, lower, upper)
    }
}

impl Matcher for RangeQuery {
    fn matches(&self, record: &CourseRecord) -> bool {
        record
            .field_value(self.field)
            .is_some_and(|value| self.contains(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_inclusive_bounds() {
        let query = RangeQuery::between(CourseField::Price, 10.0, 50.0);

        assert!(query.contains(&FieldValue::Float(10.0)));
        assert!(query.contains(&FieldValue::Float(50.0)));
        assert!(query.contains(&FieldValue::Integer(25)));
        assert!(!query.contains(&FieldValue::Float(50.01)));
    }

    #[test]
    fn test_exclusive_bounds() {
        let query = RangeQuery::with_bounds(
            CourseField::MinAge,
            Bound::Excluded(FieldValue::Integer(5)),
            Bound::Unbounded,
        );
        assert!(!query.contains(&FieldValue::Integer(5)));
        assert!(query.contains(&FieldValue::Integer(6)));
    }

    #[test]
    fn test_missing_value_never_matches() {
        let query = RangeQuery::less_than_or_equal(CourseField::Price, 100.0);
        let record = CourseRecord::builder("1", "Free trial").build();
        assert!(!query.matches(&record));
    }

    #[test]
    fn test_date_lower_bound() {
        let from = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let query = RangeQuery::greater_than_or_equal(CourseField::NextSessionDate, from);

        let on_time = CourseRecord::builder("1", "A").next_session_date(from).build();
        let too_early = CourseRecord::builder("2", "B")
            .next_session_date(Utc.with_ymd_and_hms(2025, 5, 31, 23, 59, 59).unwrap())
            .build();

        assert!(query.matches(&on_time));
        assert!(!query.matches(&too_early));
    }

    #[test]
    fn test_description() {
        let query = RangeQuery::greater_than_or_equal(CourseField::MinAge, 18);
        assert_eq!(query.description(), "minAge:[18 TO *]");
    }
}
