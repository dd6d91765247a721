//! Filter predicate builder.
//!
//! Structured filters are resolved by an ordered list of rules. The first
//! rule that applies wins and produces exactly one [`FilterOperation`]; rules
//! are never combined across tiers:
//!
//! 1. `category` + `type` (plus `nextSessionDate >= fromDate` when given)
//! 2. `minAge` + `maxAge`
//! 3. `minPrice` + `maxPrice`
//! 4. single filters: `category`, `type`, `minAge`, `maxAge`, `minPrice`,
//!    `maxPrice`, `fromDate`
//! 5. no filter: every record matches
//!
//! Filters outside the winning rule are ignored. A request with `category`,
//! `minAge` and `maxAge` is filtered by age range only.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::document::field_value::CourseField;
use crate::query::{Predicate, RangeQuery, TermQuery};
use crate::search::criteria::SearchCriteria;

/// A discrete query-by-field operation understood by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum FilterOperation {
    CategoryAndType {
        category: String,
        course_type: String,
    },
    CategoryAndTypeFrom {
        category: String,
        course_type: String,
        from_date: DateTime<Utc>,
    },
    AgeRange {
        min_age: i32,
        max_age: i32,
    },
    PriceRange {
        min_price: f64,
        max_price: f64,
    },
    Category {
        category: String,
    },
    Type {
        course_type: String,
    },
    MinAge {
        min_age: i32,
    },
    MaxAge {
        max_age: i32,
    },
    MinPrice {
        min_price: f64,
    },
    MaxPrice {
        max_price: f64,
    },
    FromDate {
        from_date: DateTime<Utc>,
    },
    /// No filter; every record matches.
    All,
}

impl FilterOperation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            FilterOperation::CategoryAndType { .. } => "category_and_type",
            FilterOperation::CategoryAndTypeFrom { .. } => "category_and_type_from",
            FilterOperation::AgeRange { .. } => "age_range",
            FilterOperation::PriceRange { .. } => "price_range",
            FilterOperation::Category { .. } => "category",
            FilterOperation::Type { .. } => "type",
            FilterOperation::MinAge { .. } => "min_age",
            FilterOperation::MaxAge { .. } => "max_age",
            FilterOperation::MinPrice { .. } => "min_price",
            FilterOperation::MaxPrice { .. } => "max_price",
            FilterOperation::FromDate { .. } => "from_date",
            FilterOperation::All => "all",
        }
    }

    /// Lower this operation into a composite predicate.
    pub fn to_predicate(&self) -> Predicate {
        match self {
            FilterOperation::CategoryAndType {
                category,
                course_type,
            } => Predicate::and(vec![
                TermQuery::new(CourseField::Category, category.as_str()).into(),
                TermQuery::new(CourseField::Type, course_type.as_str()).into(),
            ]),
            FilterOperation::CategoryAndTypeFrom {
                category,
                course_type,
                from_date,
            } => Predicate::and(vec![
                TermQuery::new(CourseField::Category, category.as_str()).into(),
                TermQuery::new(CourseField::Type, course_type.as_str()).into(),
                RangeQuery::greater_than_or_equal(CourseField::NextSessionDate, *from_date).into(),
            ]),
            FilterOperation::AgeRange { min_age, max_age } => Predicate::and(vec![
                RangeQuery::greater_than_or_equal(CourseField::MinAge, *min_age).into(),
                RangeQuery::less_than_or_equal(CourseField::MaxAge, *max_age).into(),
            ]),
            FilterOperation::PriceRange {
                min_price,
                max_price,
            } => RangeQuery::between(CourseField::Price, *min_price, *max_price).into(),
            FilterOperation::Category { category } => {
                TermQuery::new(CourseField::Category, category.as_str()).into()
            }
            FilterOperation::Type { course_type } => {
                TermQuery::new(CourseField::Type, course_type.as_str()).into()
            }
            FilterOperation::MinAge { min_age } => {
                RangeQuery::greater_than_or_equal(CourseField::MinAge, *min_age).into()
            }
            FilterOperation::MaxAge { max_age } => {
                RangeQuery::less_than_or_equal(CourseField::MaxAge, *max_age).into()
            }
            FilterOperation::MinPrice { min_price } => {
                RangeQuery::greater_than_or_equal(CourseField::Price, *min_price).into()
            }
            FilterOperation::MaxPrice { max_price } => {
                RangeQuery::less_than_or_equal(CourseField::Price, *max_price).into()
            }
            FilterOperation::FromDate { from_date } => {
                RangeQuery::greater_than_or_equal(CourseField::NextSessionDate, *from_date).into()
            }
            FilterOperation::All => Predicate::All,
        }
    }
}

/// One entry of the priority list.
struct FilterRule {
    name: &'static str,
    select: fn(&SearchCriteria) -> Option<FilterOperation>,
}

/// Rules in priority order; the first that returns an operation wins.
const FILTER_RULES: &[FilterRule] = &[
    FilterRule {
        name: "category_and_type",
        select: |c| {
            let (category, course_type) = (c.category()?, c.course_type()?);
            Some(match c.from_date() {
                Some(from_date) => FilterOperation::CategoryAndTypeFrom {
                    category: category.to_string(),
                    course_type: course_type.to_string(),
                    from_date,
                },
                None => FilterOperation::CategoryAndType {
                    category: category.to_string(),
                    course_type: course_type.to_string(),
                },
            })
        },
    },
    FilterRule {
        name: "age_range",
        select: |c| {
            Some(FilterOperation::AgeRange {
                min_age: c.min_age()?,
                max_age: c.max_age()?,
            })
        },
    },
    FilterRule {
        name: "price_range",
        select: |c| {
            Some(FilterOperation::PriceRange {
                min_price: c.min_price()?,
                max_price: c.max_price()?,
            })
        },
    },
    FilterRule {
        name: "category",
        select: |c| {
            c.category().map(|category| FilterOperation::Category {
                category: category.to_string(),
            })
        },
    },
    FilterRule {
        name: "type",
        select: |c| {
            c.course_type().map(|course_type| FilterOperation::Type {
                course_type: course_type.to_string(),
            })
        },
    },
    FilterRule {
        name: "min_age",
        select: |c| c.min_age().map(|min_age| FilterOperation::MinAge { min_age }),
    },
    FilterRule {
        name: "max_age",
        select: |c| c.max_age().map(|max_age| FilterOperation::MaxAge { max_age }),
    },
    FilterRule {
        name: "min_price",
        select: |c| c.min_price().map(|min_price| FilterOperation::MinPrice { min_price }),
    },
    FilterRule {
        name: "max_price",
        select: |c| c.max_price().map(|max_price| FilterOperation::MaxPrice { max_price }),
    },
    FilterRule {
        name: "from_date",
        select: |c| c.from_date().map(|from_date| FilterOperation::FromDate { from_date }),
    },
];

/// Pick the filter operation for a request.
pub fn select_operation(criteria: &SearchCriteria) -> FilterOperation {
    for rule in FILTER_RULES {
        if let Some(operation) = (rule.select)(criteria) {
            log::trace!("Filter rule '{}' selected", rule.name);
            return operation;
        }
    }
    FilterOperation::All
}

/// Build the composite filter predicate for a request.
pub fn build(criteria: &SearchCriteria) -> Predicate {
    select_operation(criteria).to_predicate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn from_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_rule_names_follow_priority() {
        let names: Vec<_> = FILTER_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "category_and_type",
                "age_range",
                "price_range",
                "category",
                "type",
                "min_age",
                "max_age",
                "min_price",
                "max_price",
                "from_date"
            ]
        );
    }

    #[test]
    fn test_category_and_type_with_date() {
        let criteria = SearchCriteria::builder()
            .category("Math")
            .course_type("COURSE")
            .from_date(from_date())
            .build()
            .unwrap();

        assert_eq!(
            select_operation(&criteria),
            FilterOperation::CategoryAndTypeFrom {
                category: "Math".into(),
                course_type: "COURSE".into(),
                from_date: from_date(),
            }
        );
    }

    #[test]
    fn test_combination_beats_single_filters() {
        let criteria = SearchCriteria::builder()
            .category("Math")
            .min_age(10)
            .max_age(14)
            .min_price(5.0)
            .build()
            .unwrap();

        assert_eq!(
            select_operation(&criteria),
            FilterOperation::AgeRange {
                min_age: 10,
                max_age: 14
            }
        );
    }

    #[test]
    fn test_age_range_beats_price_range() {
        let criteria = SearchCriteria::builder()
            .min_price(5.0)
            .max_price(50.0)
            .min_age(10)
            .max_age(14)
            .build()
            .unwrap();
        assert_eq!(select_operation(&criteria).name(), "age_range");
    }

    #[test]
    fn test_single_filter_priority() {
        let criteria = SearchCriteria::builder()
            .from_date(from_date())
            .max_price(80.0)
            .max_age(12)
            .build()
            .unwrap();
        assert_eq!(
            select_operation(&criteria),
            FilterOperation::MaxAge { max_age: 12 }
        );

        let criteria = SearchCriteria::builder()
            .from_date(from_date())
            .min_price(20.0)
            .build()
            .unwrap();
        assert_eq!(
            select_operation(&criteria),
            FilterOperation::MinPrice { min_price: 20.0 }
        );
    }

    #[test]
    fn test_date_alone_does_not_join_category() {
        let criteria = SearchCriteria::builder()
            .category("Math")
            .from_date(from_date())
            .build()
            .unwrap();
        assert_eq!(
            select_operation(&criteria),
            FilterOperation::Category {
                category: "Math".into()
            }
        );
    }

    #[test]
    fn test_no_filters_match_all() {
        let criteria = SearchCriteria::builder().query("Java").build().unwrap();
        assert_eq!(select_operation(&criteria), FilterOperation::All);
        assert!(build(&criteria).is_match_all());
    }

    #[test]
    fn test_field_order_does_not_change_predicate() {
        let a = SearchCriteria::builder()
            .category("Art")
            .course_type("CLUB")
            .build()
            .unwrap();
        let b = SearchCriteria::builder()
            .course_type("CLUB")
            .category("Art")
            .build()
            .unwrap();

        assert_eq!(build(&a), build(&b));
        assert_eq!(
            build(&a),
            Predicate::and(vec![
                TermQuery::new(CourseField::Category, "Art").into(),
                TermQuery::new(CourseField::Type, "CLUB").into(),
            ])
        );
    }

    #[test]
    fn test_price_range_predicate() {
        let criteria = SearchCriteria::builder()
            .min_price(10.0)
            .max_price(20.0)
            .build()
            .unwrap();
        assert_eq!(
            build(&criteria),
            Predicate::from(RangeQuery::between(CourseField::Price, 10.0, 20.0))
        );
    }
}
