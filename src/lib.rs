//! # Course Search
//!
//! Query-strategy layer for a course catalog search service.
//!
//! ## Features
//!
//! - Sort tokens resolved to field and direction
//! - Prioritized structured filters lowered into composite predicates
//! - Fuzzy text search with fallback to filtered search
//! - Deduplicated title suggestions
//! - Pluggable search engine with an in-memory implementation
//!
//! ```
//! use std::sync::Arc;
//!
//! use course_search::document::CourseRecord;
//! use course_search::search::{CourseSearchService, InMemoryEngine, SearchCriteria};
//!
//! let engine = InMemoryEngine::with_records(vec![
//!     CourseRecord::builder("1", "Chess Club").category("Games").build(),
//! ]);
//! let service = CourseSearchService::new(Arc::new(engine));
//!
//! let criteria = SearchCriteria::builder().query("chess").build().unwrap();
//! let page = service.search(&criteria).unwrap();
//! assert_eq!(page.total_matches(), 1);
//! ```

pub mod cli;
pub mod document;
pub mod error;
pub mod query;
pub mod search;
pub mod util;

pub mod prelude {
    pub use crate::document::{CourseField, CourseRecord, FieldValue};
    pub use crate::error::{CourseSearchError, Result};
    pub use crate::query::{Matcher, Predicate};
    pub use crate::search::{
        CourseEngine, CourseSearchService, InMemoryEngine, ResultPage, SearchCriteria,
        ServiceConfig, SuggestionList,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
