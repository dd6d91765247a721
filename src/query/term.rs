//! Term query implementation for exact value matching.

use serde::Serialize;

use crate::document::course::CourseRecord;
use crate::document::field_value::CourseField;
use crate::query::matcher::Matcher;

/// A query that matches records whose field equals a value.
///
/// Comparison is case-insensitive, mirroring how the catalog's keyword-like
/// text fields (`category`, `type`) are analyzed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermQuery {
    /// The field to search in.
    field: CourseField,
    /// The value to search for.
    value: String,
}

impl TermQuery {
    /// Create a new term query.
    pub fn new<T: Into<String>>(field: CourseField, value: T) -> Self {
        TermQuery {
            field,
            value: value.into(),
        }
    }

    /// Get the field.
    pub fn field(&self) -> CourseField {
        self.field
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        format!("{}:{}", self.field, self.value)
    }
}

impl Matcher for TermQuery {
    fn matches(&self, record: &CourseRecord) -> bool {
        let expected = self.value.to_lowercase();
        record
            .field_values(self.field)
            .iter()
            .filter_map(|v| v.as_text())
            .any(|text| text.to_lowercase() == expected)
    }
}
