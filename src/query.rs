//! Composite predicates executed by the search engine.
//!
//! A [`Predicate`] is a boolean tree of field comparisons: exact terms,
//! ranges, fuzzy terms and substring matches, combined with [`BooleanQuery`].
//! The query layer only builds these trees; engines decide how to run them.
//! Every node implements [`Matcher`], which is what the in-memory engine uses.

pub mod boolean;
pub mod contains;
pub mod fuzzy;
pub mod matcher;
pub mod range;
pub mod term;

use serde::Serialize;

pub use self::boolean::{BooleanClause, BooleanQuery, Occur};
pub use self::contains::ContainsQuery;
pub use self::fuzzy::{Fuzziness, FuzzyQuery};
pub use self::matcher::Matcher;
pub use self::range::{Bound, RangeQuery};
pub use self::term::TermQuery;

use crate::document::course::CourseRecord;

/// A node of a composite predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predicate {
    /// Matches every record.
    All,
    Term(TermQuery),
    Range(RangeQuery),
    Fuzzy(FuzzyQuery),
    Contains(ContainsQuery),
    Boolean(BooleanQuery),
}

impl Predicate {
    /// Conjunction of the given predicates.
    pub fn and(predicates: Vec<Predicate>) -> Self {
        let mut query = BooleanQuery::new();
        for predicate in predicates {
            query.add_must(predicate);
        }
        Predicate::Boolean(query)
    }

    /// Disjunction of the given predicates; at least one must match.
    pub fn or(predicates: Vec<Predicate>) -> Self {
        let mut query = BooleanQuery::new();
        for predicate in predicates {
            query.add_should(predicate);
        }
        Predicate::Boolean(query.with_minimum_should_match(1))
    }

    /// Whether this predicate is the identity filter.
    pub fn is_match_all(&self) -> bool {
        matches!(self, Predicate::All)
    }

    /// Get a human-readable description of this predicate.
    pub fn description(&self) -> String {
        match self {
            Predicate::All => "All".to_string(),
            Predicate::Term(q) => q.description(),
            Predicate::Range(q) => q.description(),
            Predicate::Fuzzy(q) => q.description(),
            Predicate::Contains(q) => q.description(),
            Predicate::Boolean(q) => q.description(),
        }
    }
}

impl Matcher for Predicate {
    fn matches(&self, record: &CourseRecord) -> bool {
        match self {
            Predicate::All => true,
            Predicate::Term(q) => q.matches(record),
            Predicate::Range(q) => q.matches(record),
            Predicate::Fuzzy(q) => q.matches(record),
            Predicate::Contains(q) => q.matches(record),
            Predicate::Boolean(q) => q.matches(record),
        }
    }
}

impl From<TermQuery> for Predicate {
    fn from(query: TermQuery) -> Self {
        Predicate::Term(query)
    }
}

impl From<RangeQuery> for Predicate {
    fn from(query: RangeQuery) -> Self {
        Predicate::Range(query)
    }
}

impl From<FuzzyQuery> for Predicate {
    fn from(query: FuzzyQuery) -> Self {
        Predicate::Fuzzy(query)
    }
}

impl From<ContainsQuery> for Predicate {
    fn from(query: ContainsQuery) -> Self {
        Predicate::Contains(query)
    }
}

impl From<BooleanQuery> for Predicate {
    fn from(query: BooleanQuery) -> Self {
        Predicate::Boolean(query)
    }
}
