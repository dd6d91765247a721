//! Course record stored in the search engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::field_value::{CourseField, FieldValue};

/// Completion input attached to a course for autocomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggest {
    /// Raw completion inputs.
    #[serde(default)]
    pub input: Vec<String>,
}

/// A course as indexed by the search engine.
///
/// The query layer only ever reads records. Optional numeric and date fields
/// stay `None` when the catalog omits them, so range predicates never match
/// a missing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub course_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_session_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest: Option<Suggest>,
}

impl CourseRecord {
    /// Create a builder for a record with the given id and title.
    pub fn builder<I: Into<String>, T: Into<String>>(id: I, title: T) -> CourseRecordBuilder {
        CourseRecordBuilder::new(id, title)
    }

    /// Lower-cased suggestion tokens.
    ///
    /// Falls back to the title when the record carries no completion input.
    pub fn suggest_tokens(&self) -> Vec<String> {
        match &self.suggest {
            Some(suggest) if !suggest.input.is_empty() => {
                suggest.input.iter().map(|s| s.to_lowercase()).collect()
            }
            _ => vec![self.title.to_lowercase()],
        }
    }

    /// All values of a field. Single-valued fields yield at most one value.
    pub fn field_values(&self, field: CourseField) -> Vec<FieldValue> {
        match field {
            CourseField::Suggest => self
                .suggest_tokens()
                .into_iter()
                .map(FieldValue::Text)
                .collect(),
            other => self.field_value(other).into_iter().collect(),
        }
    }

    /// The value of a single-valued field.
    pub fn field_value(&self, field: CourseField) -> Option<FieldValue> {
        match field {
            CourseField::Id => Some(FieldValue::from(self.id.as_str())),
            CourseField::Title => Some(FieldValue::from(self.title.as_str())),
            CourseField::Description => Some(FieldValue::from(self.description.as_str())),
            CourseField::Category => Some(FieldValue::from(self.category.as_str())),
            CourseField::Type => Some(FieldValue::from(self.course_type.as_str())),
            CourseField::GradeRange => self.grade_range.as_deref().map(FieldValue::from),
            CourseField::MinAge => self.min_age.map(FieldValue::from),
            CourseField::MaxAge => self.max_age.map(FieldValue::from),
            CourseField::Price => self.price.map(FieldValue::from),
            CourseField::NextSessionDate => self.next_session_date.map(FieldValue::from),
            CourseField::Suggest => self.suggest_tokens().into_iter().next().map(FieldValue::Text),
        }
    }
}

/// A builder for constructing course records in a fluent manner.
#[derive(Debug)]
pub struct CourseRecordBuilder {
    record: CourseRecord,
}

impl CourseRecordBuilder {
    /// Create a new builder.
    pub fn new<I: Into<String>, T: Into<String>>(id: I, title: T) -> Self {
        CourseRecordBuilder {
            record: CourseRecord {
                id: id.into(),
                title: title.into(),
                description: String::new(),
                category: String::new(),
                course_type: String::new(),
                grade_range: None,
                min_age: None,
                max_age: None,
                price: None,
                next_session_date: None,
                suggest: None,
            },
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.record.description = description.into();
        self
    }

    pub fn category<S: Into<String>>(mut self, category: S) -> Self {
        self.record.category = category.into();
        self
    }

    pub fn course_type<S: Into<String>>(mut self, course_type: S) -> Self {
        self.record.course_type = course_type.into();
        self
    }

    pub fn grade_range<S: Into<String>>(mut self, grade_range: S) -> Self {
        self.record.grade_range = Some(grade_range.into());
        self
    }

    /// Set the minimum and maximum participant age.
    pub fn ages(mut self, min_age: i32, max_age: i32) -> Self {
        self.record.min_age = Some(min_age);
        self.record.max_age = Some(max_age);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.record.price = Some(price);
        self
    }

    pub fn next_session_date(mut self, date: DateTime<Utc>) -> Self {
        self.record.next_session_date = Some(date);
        self
    }

    /// Set the completion inputs used for autocomplete.
    pub fn suggest<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.suggest = Some(Suggest {
            input: inputs.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Build the record.
    pub fn build(self) -> CourseRecord {
        self.record
    }
}
