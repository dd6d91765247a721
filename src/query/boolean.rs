//! Boolean query implementation for combining multiple predicates.

use serde::Serialize;

use crate::document::course::CourseRecord;
use crate::query::Predicate;
use crate::query::matcher::Matcher;

/// Occurrence requirements for boolean clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Occur {
    /// The clause must match (equivalent to AND).
    Must,
    /// The clause should match (equivalent to OR).
    Should,
    /// The clause must not match (equivalent to NOT).
    MustNot,
}

/// A clause in a boolean query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BooleanClause {
    /// The predicate for this clause.
    pub predicate: Predicate,
    /// The occurrence requirement.
    pub occur: Occur,
}

impl BooleanClause {
    /// Create a new boolean clause.
    pub fn new(predicate: Predicate, occur: Occur) -> Self {
        BooleanClause { predicate, occur }
    }

    /// Create a MUST clause.
    pub fn must(predicate: Predicate) -> Self {
        BooleanClause::new(predicate, Occur::Must)
    }

    /// Create a SHOULD clause.
    pub fn should(predicate: Predicate) -> Self {
        BooleanClause::new(predicate, Occur::Should)
    }

    /// Create a MUST_NOT clause.
    pub fn must_not(predicate: Predicate) -> Self {
        BooleanClause::new(predicate, Occur::MustNot)
    }
}

/// A boolean query that combines multiple predicates with boolean logic.
///
/// A record matches when every MUST clause matches, no MUST_NOT clause
/// matches, and at least `minimum_should_match` SHOULD clauses match. With no
/// MUST clauses and a zero minimum, SHOULD clauses are still required to
/// match once, as in Lucene.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BooleanQuery {
    /// The clauses in this boolean query.
    clauses: Vec<BooleanClause>,
    /// Minimum number of should clauses that must match.
    minimum_should_match: usize,
}

impl BooleanQuery {
    /// Create a new empty boolean query.
    pub fn new() -> Self {
        BooleanQuery {
            clauses: Vec::new(),
            minimum_should_match: 0,
        }
    }

    /// Add a clause to this boolean query.
    pub fn add_clause(&mut self, clause: BooleanClause) {
        self.clauses.push(clause);
    }

    /// Add a MUST clause.
    pub fn add_must(&mut self, predicate: Predicate) {
        self.add_clause(BooleanClause::must(predicate));
    }

    /// Add a SHOULD clause.
    pub fn add_should(&mut self, predicate: Predicate) {
        self.add_clause(BooleanClause::should(predicate));
    }

    /// Add a MUST_NOT clause.
    pub fn add_must_not(&mut self, predicate: Predicate) {
        self.add_clause(BooleanClause::must_not(predicate));
    }

    /// Set the minimum number of should clauses that must match.
    pub fn with_minimum_should_match(mut self, minimum: usize) -> Self {
        self.minimum_should_match = minimum;
        self
    }

    /// Get the clauses.
    pub fn clauses(&self) -> &[BooleanClause] {
        &self.clauses
    }

    /// Get the minimum should match value.
    pub fn minimum_should_match(&self) -> usize {
        self.minimum_should_match
    }

    /// Check if this query is empty.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Get clauses by occurrence type.
    pub fn clauses_by_occur(&self, occur: Occur) -> Vec<&BooleanClause> {
        self.clauses.iter().filter(|c| c.occur == occur).collect()
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        let parts: Vec<String> = self
            .clauses
            .iter()
            .map(|c| {
                let prefix = match c.occur {
                    Occur::Must => "+",
                    Occur::Should => "",
                    Occur::MustNot => "-",
                };
                format!("{prefix}{}", c.predicate.description())
            })
            .collect();
        format!("({})", parts.join(" "))
    }
}

impl Matcher for BooleanQuery {
    fn matches(&self, record: &CourseRecord) -> bool {
        if self.clauses.is_empty() {
            return false;
        }

        let mut has_must = false;
        let mut should_total = 0;
        let mut should_matched = 0;

        for clause in &self.clauses {
            match clause.occur {
                Occur::Must => {
                    has_must = true;
                    if !clause.predicate.matches(record) {
                        return false;
                    }
                }
                Occur::MustNot => {
                    if clause.predicate.matches(record) {
                        return false;
                    }
                }
                Occur::Should => {
                    should_total += 1;
                    if clause.predicate.matches(record) {
                        should_matched += 1;
                    }
                }
            }
        }

        let required = if self.minimum_should_match > 0 {
            self.minimum_should_match
        } else if has_must || should_total == 0 {
            0
        } else {
            1
        };
        should_matched >= required
    }
}
