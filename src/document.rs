//! Course documents.
//!
//! - [`course::CourseRecord`] - a course as stored by the search engine
//! - [`field_value::CourseField`] and [`field_value::FieldValue`] - typed field access used by predicates
//! - [`loader`] - reads catalog files and bulk-loads them into an engine

pub mod course;
pub mod field_value;
pub mod loader;

pub use course::{CourseRecord, CourseRecordBuilder, Suggest};
pub use field_value::{CourseField, FieldValue};
