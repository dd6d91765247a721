//! Integration tests for query strategy selection, filtering and paging.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use parking_lot::Mutex;

use course_search::prelude::*;
use course_search::search::{EngineHits, EngineQuery, FilterOperation, OrderingSpec};

fn programming_catalog() -> InMemoryEngine {
    InMemoryEngine::with_records(vec![
        CourseRecord::builder("1", "Java Fundamentals")
            .category("Programming")
            .course_type("COURSE")
            .price(120.0)
            .next_session_date(Utc.with_ymd_and_hms(2025, 9, 1, 9, 0, 0).unwrap())
            .build(),
        CourseRecord::builder("2", "Scratch for Beginners")
            .category("Programming")
            .course_type("CLUB")
            .price(40.0)
            .next_session_date(Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap())
            .build(),
        CourseRecord::builder("3", "Java Game Lab")
            .category("Games")
            .course_type("CLUB")
            .price(60.0)
            .next_session_date(Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap())
            .build(),
    ])
}

fn ids(page: &ResultPage<CourseRecord>) -> Vec<&str> {
    page.items().iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_default_sort_is_next_session_ascending() -> Result<()> {
    let service = CourseSearchService::new(Arc::new(programming_catalog()));

    for sort in [None, Some("newest"), Some("PRICEASC")] {
        let mut builder = SearchCriteria::builder();
        if let Some(sort) = sort {
            builder = builder.sort(sort);
        }
        let page = service.search(&builder.build()?)?;
        assert_eq!(ids(&page), ["2", "3", "1"], "sort {sort:?}");
    }

    let page = service.search(&SearchCriteria::builder().sort("priceDesc").build()?)?;
    assert_eq!(ids(&page), ["1", "3", "2"]);
    Ok(())
}

#[test]
fn test_identical_criteria_give_identical_pages() -> Result<()> {
    let service = CourseSearchService::new(Arc::new(programming_catalog()));
    let criteria = SearchCriteria::builder()
        .query("java")
        .sort("priceAsc")
        .size(2)
        .build()?;

    assert_eq!(service.search(&criteria)?, service.search(&criteria)?);
    Ok(())
}

#[test]
fn test_filters_replace_text_search() -> Result<()> {
    let service = CourseSearchService::new(Arc::new(programming_catalog()));

    let with_text = SearchCriteria::builder()
        .query("Java")
        .category("Programming")
        .build()?;
    let page = service.search(&with_text)?;

    assert_eq!(page, service.search(&with_text.without_query())?);
    assert_eq!(ids(&page), ["2", "1"]);
    Ok(())
}

#[test]
fn test_age_range_with_paging() -> Result<()> {
    let engine = InMemoryEngine::with_records(vec![
        CourseRecord::builder("a", "Pottery").ages(18, 30).build(),
        CourseRecord::builder("b", "Kids Pottery").ages(10, 20).build(),
        CourseRecord::builder("c", "Evening Yoga").ages(20, 65).build(),
        CourseRecord::builder("d", "Family Hike").ages(30, 70).build(),
        CourseRecord::builder("e", "Photography").ages(40, 60).build(),
    ]);
    let service = CourseSearchService::new(Arc::new(engine));

    let criteria = SearchCriteria::builder().min_age(18).max_age(65).build()?;
    let page = service.search(&criteria)?;
    assert_eq!(page.total_matches(), 3);
    assert_eq!(ids(&page), ["a", "c", "e"]);

    let criteria = SearchCriteria::builder()
        .min_age(18)
        .max_age(65)
        .size(2)
        .build()?;
    let page = service.search(&criteria)?;
    assert_eq!(page.total_matches(), 3);
    assert_eq!(page.len(), 2);
    assert!(page.has_next());
    Ok(())
}

#[test]
fn test_text_search_pages_over_all_matches() -> Result<()> {
    let records = (1..=10)
        .map(|i| CourseRecord::builder(i.to_string(), format!("Course {i}")).build())
        .collect();
    let service = CourseSearchService::new(Arc::new(InMemoryEngine::with_records(records)));

    let criteria = SearchCriteria::builder().query("Course").page(0).size(5).build()?;
    let page = service.search(&criteria)?;

    assert_eq!(page.len(), 5);
    assert_eq!(page.total_matches(), 10);
    assert_eq!(page.total_pages(), 2);

    let last = service.search(&SearchCriteria::builder().query("Course").page(1).size(5).build()?)?;
    assert_eq!(ids(&last), ["6", "7", "8", "9", "10"]);
    assert!(!last.has_next());
    Ok(())
}

#[test]
fn test_zero_valued_filters_still_filter() -> Result<()> {
    let engine = InMemoryEngine::with_records(vec![
        CourseRecord::builder("free", "Open Day").price(0.0).build(),
        CourseRecord::builder("paid", "Robotics").price(90.0).build(),
    ]);
    let service = CourseSearchService::new(Arc::new(engine));

    let page = service.search(&SearchCriteria::builder().max_price(0.0).build()?)?;
    assert_eq!(ids(&page), ["free"]);
    Ok(())
}

/// Engine double that records every query and fails on demand.
#[derive(Debug, Default)]
struct RecordingEngine {
    queries: Mutex<Vec<EngineQuery>>,
    operations: Mutex<Vec<FilterOperation>>,
    fail: bool,
}

impl CourseEngine for RecordingEngine {
    fn execute(&self, query: &EngineQuery) -> Result<EngineHits> {
        self.queries.lock().push(query.clone());
        if self.fail {
            return Err(CourseSearchError::engine_unavailable("connection refused"));
        }
        Ok(EngineHits::default())
    }

    fn find(&self, operation: &FilterOperation, ordering: &OrderingSpec) -> Result<EngineHits> {
        self.operations.lock().push(operation.clone());
        self.execute(&EngineQuery::new(operation.to_predicate()).with_ordering(ordering))
    }

    fn count(&self) -> Result<u64> {
        Ok(0)
    }

    fn save_all(&self, records: Vec<CourseRecord>) -> Result<usize> {
        Ok(records.len())
    }
}

#[test]
fn test_engine_failure_is_not_a_fallback_trigger() {
    let engine = Arc::new(RecordingEngine {
        fail: true,
        ..Default::default()
    });
    let service = CourseSearchService::new(engine.clone());

    let criteria = SearchCriteria::builder()
        .query("Java")
        .category("Programming")
        .build()
        .unwrap();
    let err = service.search(&criteria).unwrap_err();

    assert!(err.is_engine_error());
    assert_eq!(engine.queries.lock().len(), 1);
    assert!(engine.operations.lock().is_empty());
}

#[test]
fn test_empty_text_result_runs_one_filtered_search() -> Result<()> {
    let engine = Arc::new(RecordingEngine::default());
    let service = CourseSearchService::new(engine.clone());

    let criteria = SearchCriteria::builder()
        .query("Java")
        .min_price(10.0)
        .max_price(50.0)
        .sort("priceAsc")
        .page(3)
        .size(7)
        .build()?;
    let page = service.search(&criteria)?;
    assert!(page.is_empty());

    let queries = engine.queries.lock();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[0].sort, queries[1].sort);
    assert_eq!((queries[1].page, queries[1].size), (3, 7));

    assert_eq!(
        *engine.operations.lock(),
        [FilterOperation::PriceRange {
            min_price: 10.0,
            max_price: 50.0
        }]
    );
    Ok(())
}
