//! Title suggestions for partial input.

use std::collections::HashSet;
use std::sync::Arc;

use crate::document::field_value::CourseField;
use crate::error::Result;
use crate::query::ContainsQuery;
use crate::search::engine::{CourseEngine, EngineQuery};

/// Distinct course titles, in engine order.
pub type SuggestionList = Vec<String>;

/// Resolves partial titles to candidate titles.
///
/// Matching is a lower-cased substring test against each record's suggestion
/// tokens. Filters and sorting do not apply.
#[derive(Debug, Clone)]
pub struct SuggestionFinder {
    engine: Arc<dyn CourseEngine>,
}

impl SuggestionFinder {
    pub fn new(engine: Arc<dyn CourseEngine>) -> Self {
        SuggestionFinder { engine }
    }

    /// Up to `limit` distinct titles whose suggestion tokens contain the input.
    ///
    /// Blank input or a zero limit yields an empty list without querying the
    /// engine. Duplicate titles are dropped before the limit is applied, so
    /// further pages are fetched while fewer than `limit` distinct titles
    /// have been seen.
    pub fn suggest(&self, partial_title: &str, limit: usize) -> Result<SuggestionList> {
        let partial = partial_title.trim();
        if partial.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let predicate = ContainsQuery::new(CourseField::Suggest, partial).into();
        let mut query = EngineQuery::new(predicate).with_page(0, limit);

        let mut seen = HashSet::new();
        let mut titles = Vec::new();

        loop {
            let result = self.engine.execute(&query)?;
            let fetched = result.hits.len();

            for record in result.hits {
                if titles.len() == limit {
                    break;
                }
                if seen.insert(record.title.clone()) {
                    titles.push(record.title);
                }
            }

            let exhausted = fetched < limit
                || (query.offset() + fetched) as u64 >= result.total_matches;
            if titles.len() == limit || exhausted {
                break;
            }
            query.page += 1;
        }

        log::debug!("Found {} suggestions for '{}'", titles.len(), partial);
        Ok(titles)
    }
}
