//! Record matching for predicate evaluation.

use crate::document::course::CourseRecord;

/// Trait for predicates that can be evaluated against a single record.
///
/// Engines backed by an external index translate predicates instead of
/// calling this; the in-memory engine scans records with it.
pub trait Matcher {
    /// Check whether the record satisfies this predicate.
    fn matches(&self, record: &CourseRecord) -> bool;
}
