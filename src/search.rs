//! Course search: criteria, ordering, filtering, strategy selection and
//! suggestions.

pub mod criteria;
pub mod engine;
pub mod filter;
pub mod memory;
pub mod result;
pub mod sort;
pub mod strategy;
pub mod suggest;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CourseSearchError, Result};
use crate::query::Fuzziness;

pub use self::criteria::{DEFAULT_PAGE_SIZE, SearchCriteria, SearchCriteriaBuilder};
pub use self::engine::{CourseEngine, EngineHits, EngineQuery};
pub use self::filter::FilterOperation;
pub use self::memory::InMemoryEngine;
pub use self::result::{ResultPage, assemble};
pub use self::sort::{OrderingSpec, SortDirection, SortField, SortOption, SortSpec};
pub use self::strategy::{CourseSearchService, SearchPlan, SearchStrategy};
pub use self::suggest::{SuggestionFinder, SuggestionList};

/// Configuration for the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Allowed edit distance for fuzzy title matching.
    pub fuzziness: Fuzziness,
    /// Number of leading characters that must match exactly in fuzzy matching.
    pub fuzzy_prefix_length: u32,
    /// Count adjacent transpositions as one edit.
    pub fuzzy_transpositions: bool,
    /// Page size used when a request leaves it unset.
    pub default_page_size: usize,
    /// Suggestion limit used when a request leaves it unset.
    pub default_suggestion_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            fuzziness: Fuzziness::Auto,
            fuzzy_prefix_length: 0,
            fuzzy_transpositions: true,
            default_page_size: DEFAULT_PAGE_SIZE,
            default_suggestion_limit: 10,
        }
    }
}

impl ServiceConfig {
    pub fn with_fuzziness(mut self, fuzziness: Fuzziness) -> Self {
        self.fuzziness = fuzziness;
        self
    }

    pub fn with_fuzzy_prefix_length(mut self, prefix_length: u32) -> Self {
        self.fuzzy_prefix_length = prefix_length;
        self
    }

    pub fn with_fuzzy_transpositions(mut self, transpositions: bool) -> Self {
        self.fuzzy_transpositions = transpositions;
        self
    }

    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn with_default_suggestion_limit(mut self, limit: usize) -> Self {
        self.default_suggestion_limit = limit;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(CourseSearchError::invalid_config(
                "default_page_size must be at least 1",
            ));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ServiceConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}
