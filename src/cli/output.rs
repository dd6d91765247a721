//! Output formatting for CLI commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cli::args::{CourseSearchArgs, OutputFormat};
use crate::document::course::CourseRecord;
use crate::error::Result;
use crate::search::result::ResultPage;
use crate::search::strategy::SearchPlan;

/// One course as shown to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInfo {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_session_date: Option<DateTime<Utc>>,
}

impl From<CourseRecord> for CourseInfo {
    fn from(record: CourseRecord) -> Self {
        CourseInfo {
            id: record.id,
            title: record.title,
            category: record.category,
            price: record.price,
            next_session_date: record.next_session_date,
        }
    }
}

/// Result structure for search operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total: u64,
    pub courses: Vec<CourseInfo>,
}

impl From<ResultPage<CourseRecord>> for SearchResponse {
    fn from(page: ResultPage<CourseRecord>) -> Self {
        let total = page.total_matches();
        SearchResponse {
            total,
            courses: page.map(CourseInfo::from).into_items(),
        }
    }
}

/// Print a search response.
pub fn output_search(response: &SearchResponse, args: &CourseSearchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(response, args),
        OutputFormat::Human => {
            println!("Found {} courses", response.total);
            for (i, course) in response.courses.iter().enumerate() {
                println!();
                println!("{}. {} [{}]", i + 1, course.title, course.id);
                if !course.category.is_empty() {
                    println!("   Category: {}", course.category);
                }
                if let Some(price) = course.price {
                    println!("   Price: {price:.2}");
                }
                if let Some(date) = course.next_session_date {
                    println!("   Next session: {}", date.format("%Y-%m-%d %H:%M"));
                }
            }
            Ok(())
        }
    }
}

/// Print title suggestions.
pub fn output_suggestions(suggestions: &[String], args: &CourseSearchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(&suggestions, args),
        OutputFormat::Human => {
            if suggestions.is_empty() {
                if args.verbosity() > 0 {
                    println!("No suggestions");
                }
                return Ok(());
            }
            for title in suggestions {
                println!("{title}");
            }
            Ok(())
        }
    }
}

/// Print a search plan.
pub fn output_plan(plan: &SearchPlan, args: &CourseSearchArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(plan, args),
        OutputFormat::Human => {
            println!("Strategy: {:?}", plan.strategy);
            if let Some(predicate) = &plan.text_predicate {
                println!("Text predicate: {}", predicate.description());
                if plan.filters_override_text {
                    println!("Text hits are discarded because filters are present");
                }
            }
            println!(
                "Filter: {} ({})",
                plan.filter_operation.name(),
                plan.filter_predicate.description()
            );
            println!(
                "Ordering: {:?} {:?}, page {} size {}",
                plan.ordering.field, plan.ordering.direction, plan.ordering.page, plan.ordering.size
            );
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize + ?Sized>(result: &T, args: &CourseSearchArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::result::assemble;

    #[test]
    fn test_search_response_shape() {
        let record = CourseRecord::builder("7", "Chess Club")
            .category("Games")
            .description("not shown")
            .price(25.0)
            .build();
        let response = SearchResponse::from(assemble(vec![record], 12, 0, 10));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["total"], 12);
        assert_eq!(value["courses"][0]["id"], "7");
        assert_eq!(value["courses"][0]["price"], 25.0);
        assert!(value["courses"][0].get("description").is_none());
        assert!(value["courses"][0].get("nextSessionDate").is_none());
    }
}
