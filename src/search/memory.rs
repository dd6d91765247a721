//! In-memory engine implementation for testing and small catalogs.

use std::cmp::Ordering;

use parking_lot::RwLock;

use crate::document::course::CourseRecord;
use crate::error::Result;
use crate::query::Matcher;
use crate::search::engine::{CourseEngine, EngineHits, EngineQuery};
use crate::search::sort::{SortDirection, SortSpec};

/// An engine that keeps every record in memory and scans it per query.
///
/// Without a sort, hits come back in insertion order. With a sort, ties keep
/// insertion order and records lacking the sort field go last in either
/// direction.
#[derive(Debug, Default)]
pub struct InMemoryEngine {
    records: RwLock<Vec<CourseRecord>>,
}

impl InMemoryEngine {
    /// Create an empty engine.
    pub fn new() -> Self {
        InMemoryEngine {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create an engine holding the given records.
    pub fn with_records(records: Vec<CourseRecord>) -> Self {
        InMemoryEngine {
            records: RwLock::new(records),
        }
    }

    /// Get the number of records stored.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if the engine holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Remove every record.
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

fn compare_records(a: &CourseRecord, b: &CourseRecord, sort: SortSpec) -> Ordering {
    let field = sort.field.course_field();
    match (a.field_value(field), b.field_value(field)) {
        (Some(x), Some(y)) => {
            let ordering = x.compare(&y).unwrap_or(Ordering::Equal);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl CourseEngine for InMemoryEngine {
    fn execute(&self, query: &EngineQuery) -> Result<EngineHits> {
        let records = self.records.read();

        let mut matched: Vec<&CourseRecord> = records
            .iter()
            .filter(|record| query.predicate.matches(record))
            .collect();

        if let Some(sort) = query.sort {
            // Stable sort keeps insertion order among ties.
            matched.sort_by(|a, b| compare_records(a, b, sort));
        }

        let total_matches = matched.len() as u64;
        let hits = matched
            .into_iter()
            .skip(query.offset())
            .take(query.size)
            .cloned()
            .collect();

        Ok(EngineHits::new(hits, total_matches))
    }

    fn count(&self) -> Result<u64> {
        Ok(self.records.read().len() as u64)
    }

    fn save_all(&self, records: Vec<CourseRecord>) -> Result<usize> {
        let mut stored = self.records.write();
        let saved = records.len();

        for record in records {
            match stored.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => *existing = record,
                None => stored.push(record),
            }
        }

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::field_value::CourseField;
    use crate::query::{Predicate, RangeQuery};
    use crate::search::sort::SortField;

    fn engine() -> InMemoryEngine {
        InMemoryEngine::with_records(vec![
            CourseRecord::builder("1", "Painting").price(30.0).build(),
            CourseRecord::builder("2", "Chess").build(),
            CourseRecord::builder("3", "Robotics").price(80.0).build(),
            CourseRecord::builder("4", "Drama").price(30.0).build(),
        ])
    }

    fn ids(hits: &EngineHits) -> Vec<&str> {
        hits.hits.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_insertion_order_without_sort() {
        let hits = engine().execute(&EngineQuery::new(Predicate::All)).unwrap();
        assert_eq!(ids(&hits), ["1", "2", "3", "4"]);
        assert_eq!(hits.total_matches, 4);
    }

    #[test]
    fn test_sort_is_stable_and_missing_values_last() {
        let engine = engine();

        let mut query = EngineQuery::new(Predicate::All);
        query.sort = Some(SortSpec::new(SortField::Price, SortDirection::Asc));
        assert_eq!(ids(&engine.execute(&query).unwrap()), ["1", "4", "3", "2"]);

        query.sort = Some(SortSpec::new(SortField::Price, SortDirection::Desc));
        assert_eq!(ids(&engine.execute(&query).unwrap()), ["3", "1", "4", "2"]);
    }

    #[test]
    fn test_paging_reports_full_total() {
        let query = EngineQuery::new(RangeQuery::less_than_or_equal(CourseField::Price, 100.0).into())
            .with_page(1, 2);
        let hits = engine().execute(&query).unwrap();

        assert_eq!(ids(&hits), ["4"]);
        assert_eq!(hits.total_matches, 3);
    }

    #[test]
    fn test_save_all_replaces_same_id() {
        let engine = engine();
        engine
            .save_all(vec![CourseRecord::builder("2", "Chess Club").build()])
            .unwrap();

        assert_eq!(engine.count().unwrap(), 4);
        let hits = engine.execute(&EngineQuery::new(Predicate::All)).unwrap();
        assert_eq!(hits.hits[1].title, "Chess Club");
    }
}
