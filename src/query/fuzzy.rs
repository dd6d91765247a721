//! Fuzzy query implementation for approximate string matching.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::document::course::CourseRecord;
use crate::document::field_value::CourseField;
use crate::query::matcher::Matcher;
use crate::util::levenshtein::edit_distance;

/// How many edits a fuzzy term may differ by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fuzziness {
    /// Scale with term length: 0 edits up to 2 chars, 1 up to 5, 2 beyond.
    #[default]
    Auto,
    /// A fixed maximum number of edits.
    Fixed(u32),
}

impl Fuzziness {
    /// Maximum edits allowed for a term of the given length in characters.
    pub fn max_edits(self, term_len: usize) -> usize {
        match self {
            Fuzziness::Auto => match term_len {
                0..=2 => 0,
                3..=5 => 1,
                _ => 2,
            },
            Fuzziness::Fixed(edits) => edits as usize,
        }
    }
}

/// A fuzzy query for approximate string matching.
///
/// Both the query text and the field value are split into lower-cased words.
/// A record matches when every query word is within the allowed edit distance
/// of some word of the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyQuery {
    /// Field to search in
    field: CourseField,
    /// Text to search for
    term: String,
    /// Maximum edit distance
    fuzziness: Fuzziness,
    /// Minimum prefix length that must match exactly
    prefix_length: u32,
    /// Whether transpositions count as single edits (Damerau-Levenshtein)
    transpositions: bool,
}

impl FuzzyQuery {
    /// Create a new fuzzy query with default settings.
    pub fn new<T: Into<String>>(field: CourseField, term: T) -> Self {
        FuzzyQuery {
            field,
            term: term.into(),
            fuzziness: Fuzziness::Auto,
            prefix_length: 0,
            transpositions: true,
        }
    }

    /// Set the maximum edit distance.
    pub fn fuzziness(mut self, fuzziness: Fuzziness) -> Self {
        self.fuzziness = fuzziness;
        self
    }

    /// Set the minimum prefix length that must match exactly.
    pub fn prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = prefix_length;
        self
    }

    /// Set whether transpositions should be considered single edits.
    pub fn transpositions(mut self, transpositions: bool) -> Self {
        self.transpositions = transpositions;
        self
    }

    /// Get the field.
    pub fn field(&self) -> CourseField {
        self.field
    }

    /// Get the search text.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Get the configured fuzziness.
    pub fn get_fuzziness(&self) -> Fuzziness {
        self.fuzziness
    }

    /// Check whether a single candidate word is close enough to a query word.
    pub fn word_matches(&self, query_word: &str, candidate: &str) -> bool {
        let prefix = self.prefix_length as usize;
        if prefix > 0 {
            let q: String = query_word.chars().take(prefix).collect();
            let c: String = candidate.chars().take(prefix).collect();
            if q != c {
                return false;
            }
        }

        let max_edits = self.fuzziness.max_edits(query_word.chars().count());
        edit_distance(query_word, candidate, self.transpositions, max_edits).is_some()
    }

    /// Check whether a field text matches this query.
    pub fn matches_text(&self, text: &str) -> bool {
        let query_words = words(&self.term);
        if query_words.is_empty() {
            return false;
        }
        let field_words = words(text);

        query_words
            .iter()
            .all(|q| field_words.iter().any(|c| self.word_matches(q, c)))
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        let fuzziness = match self.fuzziness {
            Fuzziness::Auto => "AUTO".to_string(),
            Fuzziness::Fixed(n) => n.to_string(),
        };
        format!("{}:{}~{}", self.field, self.term, fuzziness)
    }
}

impl Matcher for FuzzyQuery {
    fn matches(&self, record: &CourseRecord) -> bool {
        record
            .field_values(self.field)
            .iter()
            .filter_map(|v| v.as_text())
            .any(|text| self.matches_text(text))
    }
}

fn words(text: &str) -> Vec<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}
