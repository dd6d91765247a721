//! Search engine collaborator interface.
//!
//! The query layer never talks to a concrete engine. It hands a
//! [`CourseEngine`] composite predicates (or named filter operations) plus
//! ordering and paging, and gets back one page of hits and a total count.

use std::fmt::Debug;

use crate::document::course::CourseRecord;
use crate::error::Result;
use crate::query::Predicate;
use crate::search::filter::FilterOperation;
use crate::search::sort::{OrderingSpec, SortSpec};

/// One query sent to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineQuery {
    /// The predicate to execute.
    pub predicate: Predicate,
    /// Ordering of the hits; `None` keeps the engine's own order.
    pub sort: Option<SortSpec>,
    /// Zero-based page index.
    pub page: usize,
    /// Maximum number of hits to return.
    pub size: usize,
}

impl EngineQuery {
    /// Create a new query returning the first ten hits in engine order.
    pub fn new(predicate: Predicate) -> Self {
        EngineQuery {
            predicate,
            sort: None,
            page: 0,
            size: 10,
        }
    }

    /// Apply an ordering, including its paging bounds.
    pub fn with_ordering(mut self, ordering: &OrderingSpec) -> Self {
        self.sort = Some(ordering.sort_spec());
        self.page = ordering.page;
        self.size = ordering.size;
        self
    }

    /// Set the page and page size.
    pub fn with_page(mut self, page: usize, size: usize) -> Self {
        self.page = page;
        self.size = size;
        self
    }

    /// Number of hits to skip.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

/// The hits of one engine query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineHits {
    /// Hits of the requested page, in engine order.
    pub hits: Vec<CourseRecord>,
    /// Total number of records matching the predicate.
    pub total_matches: u64,
}

impl EngineHits {
    pub fn new(hits: Vec<CourseRecord>, total_matches: u64) -> Self {
        EngineHits {
            hits,
            total_matches,
        }
    }
}

/// Trait for the document store backing course search.
///
/// Failures to reach the store must be reported as
/// [`CourseSearchError::EngineUnavailable`](crate::error::CourseSearchError::EngineUnavailable).
pub trait CourseEngine: Send + Sync + Debug {
    /// Execute a composite predicate.
    fn execute(&self, query: &EngineQuery) -> Result<EngineHits>;

    /// Execute a named filter operation.
    ///
    /// Engines with native query-by-field operations can override this; the
    /// default lowers the operation to its composite predicate.
    fn find(&self, operation: &FilterOperation, ordering: &OrderingSpec) -> Result<EngineHits> {
        self.execute(&EngineQuery::new(operation.to_predicate()).with_ordering(ordering))
    }

    /// Number of records stored.
    fn count(&self) -> Result<u64>;

    /// Store records, replacing any with the same id. Returns how many were saved.
    fn save_all(&self, records: Vec<CourseRecord>) -> Result<usize>;
}
