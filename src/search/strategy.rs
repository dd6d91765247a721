//! Query strategy selection.
//!
//! A request with free text starts as a [`SearchStrategy::TextSearch`]: the
//! text is matched fuzzily against titles or as a substring of descriptions.
//! That attempt is discarded in favour of a [`SearchStrategy::FilteredSearch`]
//! when it finds nothing, or when the request also carries any structured
//! filter. Requests without text go straight to the filtered search.
//!
//! Note that filters always win over text: `query="Java"` together with
//! `category="Programming"` returns the Programming courses, Java or not.
//! Text and filters are never combined into one search. This policy is
//! surprising to callers and worth revisiting.

use std::sync::Arc;

use serde::Serialize;

use crate::document::course::CourseRecord;
use crate::document::field_value::CourseField;
use crate::error::Result;
use crate::query::{ContainsQuery, FuzzyQuery, Predicate};
use crate::search::ServiceConfig;
use crate::search::criteria::SearchCriteria;
use crate::search::engine::{CourseEngine, EngineQuery};
use crate::search::filter::{self, FilterOperation};
use crate::search::result::{ResultPage, assemble};
use crate::search::sort::OrderingSpec;
use crate::search::suggest::{SuggestionFinder, SuggestionList};

/// The two ways a search request can be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    TextSearch,
    FilteredSearch,
}

impl SearchStrategy {
    /// The strategy a request starts with.
    pub fn select(criteria: &SearchCriteria) -> Self {
        if criteria.has_query() {
            SearchStrategy::TextSearch
        } else {
            SearchStrategy::FilteredSearch
        }
    }
}

/// What a search would do, without running it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPlan {
    /// Strategy tried first.
    pub strategy: SearchStrategy,
    /// Text predicate, present for text searches.
    pub text_predicate: Option<Predicate>,
    /// Whether a non-empty text search is still replaced by the filtered search.
    pub filters_override_text: bool,
    /// Filter operation used by the filtered search.
    pub filter_operation: FilterOperation,
    /// The filter operation lowered into a predicate.
    pub filter_predicate: Predicate,
    /// Ordering and paging shared by both attempts.
    pub ordering: OrderingSpec,
}

/// Entry point for course search and suggestions.
#[derive(Debug, Clone)]
pub struct CourseSearchService {
    engine: Arc<dyn CourseEngine>,
    config: ServiceConfig,
}

impl CourseSearchService {
    /// Create a service over the given engine with default configuration.
    pub fn new(engine: Arc<dyn CourseEngine>) -> Self {
        Self::with_config(engine, ServiceConfig::default())
    }

    pub fn with_config(engine: Arc<dyn CourseEngine>, config: ServiceConfig) -> Self {
        CourseSearchService { engine, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn engine(&self) -> &Arc<dyn CourseEngine> {
        &self.engine
    }

    /// Text predicate: fuzzy match on the title, or substring of the description.
    pub fn text_predicate(&self, text: &str) -> Predicate {
        Predicate::or(vec![
            FuzzyQuery::new(CourseField::Title, text)
                .fuzziness(self.config.fuzziness)
                .prefix_length(self.config.fuzzy_prefix_length)
                .transpositions(self.config.fuzzy_transpositions)
                .into(),
            ContainsQuery::new(CourseField::Description, text).into(),
        ])
    }

    /// Describe how a request would be answered.
    pub fn plan(&self, criteria: &SearchCriteria) -> SearchPlan {
        let strategy = SearchStrategy::select(criteria);
        let filter_operation = filter::select_operation(criteria);

        SearchPlan {
            strategy,
            text_predicate: criteria.query().map(|text| self.text_predicate(text)),
            filters_override_text: strategy == SearchStrategy::TextSearch
                && criteria.has_additional_filters(),
            filter_predicate: filter_operation.to_predicate(),
            filter_operation,
            ordering: OrderingSpec::from_criteria(criteria),
        }
    }

    /// Search for courses.
    ///
    /// Runs at most two engine calls. Engine failures are returned as is; a
    /// failed text search does not fall back to the filtered search.
    pub fn search(&self, criteria: &SearchCriteria) -> Result<ResultPage<CourseRecord>> {
        let ordering = OrderingSpec::from_criteria(criteria);

        if let Some(text) = criteria.query() {
            log::debug!("Text search for '{text}'");
            let query = EngineQuery::new(self.text_predicate(text)).with_ordering(&ordering);
            let result = self.engine.execute(&query)?;

            if !result.hits.is_empty() && !criteria.has_additional_filters() {
                return Ok(assemble(
                    result.hits,
                    result.total_matches,
                    ordering.page,
                    ordering.size,
                ));
            }

            if result.hits.is_empty() {
                log::debug!("Text search found nothing, falling back to filtered search");
            } else {
                log::debug!("Filters present, discarding {} text hits", result.hits.len());
            }
        }

        self.filtered_search(criteria, &ordering)
    }

    fn filtered_search(
        &self,
        criteria: &SearchCriteria,
        ordering: &OrderingSpec,
    ) -> Result<ResultPage<CourseRecord>> {
        let operation = filter::select_operation(criteria);
        log::debug!("Filtered search using '{}'", operation.name());

        let result = self.engine.find(&operation, ordering)?;
        Ok(assemble(
            result.hits,
            result.total_matches,
            ordering.page,
            ordering.size,
        ))
    }

    /// Suggest distinct course titles for a partial title.
    pub fn suggest(&self, partial_title: &str, limit: usize) -> Result<SuggestionList> {
        SuggestionFinder::new(Arc::clone(&self.engine)).suggest(partial_title, limit)
    }
}
