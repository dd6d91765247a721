//! Field value types for course records.
//!
//! This module defines the [`FieldValue`] enum, the typed view of a single
//! record field that predicates compare against, and [`CourseField`], the
//! closed set of fields a course record exposes to the query layer.
//!
//! # Comparison
//!
//! Integers and floats compare numerically with each other, text compares
//! lexicographically, and timestamps compare chronologically. Values of
//! unrelated kinds are unordered.
//!
//! ```
//! use std::cmp::Ordering;
//! use course_search::document::field_value::FieldValue;
//!
//! let age = FieldValue::Integer(18);
//! let bound = FieldValue::Float(17.5);
//! assert_eq!(age.compare(&bound), Some(Ordering::Greater));
//!
//! let text = FieldValue::Text("Math".to_string());
//! assert_eq!(text.compare(&age), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A field of a course record that predicates and orderings can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CourseField {
    Id,
    Title,
    Description,
    Category,
    Type,
    GradeRange,
    MinAge,
    MaxAge,
    Price,
    NextSessionDate,
    /// Suggestion tokens used for autocomplete.
    Suggest,
}

impl CourseField {
    /// The field name as stored in the index.
    pub const fn as_str(self) -> &'static str {
        match self {
            CourseField::Id => "id",
            CourseField::Title => "title",
            CourseField::Description => "description",
            CourseField::Category => "category",
            CourseField::Type => "type",
            CourseField::GradeRange => "gradeRange",
            CourseField::MinAge => "minAge",
            CourseField::MaxAge => "maxAge",
            CourseField::Price => "price",
            CourseField::NextSessionDate => "nextSessionDate",
            CourseField::Suggest => "suggest.input",
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a value for a field in a course record.
///
/// Equality and ordering follow [`FieldValue::compare`], so `Integer(10)`
/// equals `Float(10.0)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// DateTime value
    DateTime(DateTime<Utc>),
}

impl FieldValue {
    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to f64 if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the timestamp if this is a datetime value.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Compare two values of compatible kinds.
    ///
    /// Returns `None` when the kinds are unrelated or a float is NaN.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => Some(a.cmp(b)),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y),
                _ => None,
            },
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTime(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_numeric_cross_comparison() {
        assert_eq!(
            FieldValue::Integer(10).compare(&FieldValue::Float(10.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            FieldValue::Float(99.99).compare(&FieldValue::Integer(100)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_datetime_comparison() {
        let early = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();
        assert_eq!(
            FieldValue::from(early).compare(&FieldValue::from(late)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_unrelated_kinds_are_unordered() {
        let date = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        assert_eq!(FieldValue::from("a").compare(&FieldValue::Integer(1)), None);
        assert_eq!(FieldValue::from(date).compare(&FieldValue::Float(1.0)), None);
        assert_eq!(FieldValue::Float(f64::NAN).compare(&FieldValue::Float(1.0)), None);
    }

    #[test]
    fn test_equality_follows_comparison() {
        assert_eq!(FieldValue::Integer(10), FieldValue::Float(10.0));
        assert_ne!(FieldValue::from("10"), FieldValue::Integer(10));
        assert!(FieldValue::Integer(3) < FieldValue::Float(3.5));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(CourseField::NextSessionDate.as_str(), "nextSessionDate");
        assert_eq!(CourseField::Suggest.to_string(), "suggest.input");
    }
}
