//! Substring query implementation.

use serde::Serialize;

use crate::document::course::CourseRecord;
use crate::document::field_value::CourseField;
use crate::query::matcher::Matcher;

/// A query that matches records whose field contains the given text,
/// ignoring case. Equivalent to a `*text*` wildcard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainsQuery {
    /// The field to search in.
    field: CourseField,
    /// The text to look for, stored lower-cased.
    text: String,
}

impl ContainsQuery {
    /// Create a new contains query.
    pub fn new<T: AsRef<str>>(field: CourseField, text: T) -> Self {
        ContainsQuery {
            field,
            text: text.as_ref().to_lowercase(),
        }
    }

    /// Get the field.
    pub fn field(&self) -> CourseField {
        self.field
    }

    /// Get the lower-cased text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check whether a field text contains this query's text.
    pub fn matches_text(&self, candidate: &str) -> bool {
        candidate.to_lowercase().contains(&self.text)
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        format!("{}:*{}*", self.field, self.text)
    }
}

impl Matcher for ContainsQuery {
    fn matches(&self, record: &CourseRecord) -> bool {
        record
            .field_values(self.field)
            .iter()
            .filter_map(|v| v.as_text())
            .any(|text| self.matches_text(text))
    }
}
