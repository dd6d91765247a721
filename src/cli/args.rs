//! Command line argument parsing for the course search CLI using clap.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Course search - query a course catalog by text, filters and sort order
#[derive(Parser, Debug, Clone)]
#[command(name = "course-search")]
#[command(about = "Search and autocomplete over a course catalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CourseSearchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Service configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "COURSE_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CourseSearchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search courses
    Search(SearchArgs),

    /// Suggest course titles for a partial title
    Suggest(SuggestArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Catalog file (JSON array or JSON Lines)
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Free-text query
    #[arg(long = "q", value_name = "TEXT")]
    pub query: Option<String>,

    /// Course category
    #[arg(long)]
    pub category: Option<String>,

    /// Course type
    #[arg(long = "type", value_name = "TYPE")]
    pub course_type: Option<String>,

    /// Minimum age the course accepts
    #[arg(long)]
    pub min_age: Option<i32>,

    /// Maximum age the course accepts
    #[arg(long)]
    pub max_age: Option<i32>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Earliest next session date (RFC 3339)
    #[arg(long, value_name = "DATE")]
    pub start_date: Option<DateTime<Utc>>,

    /// Sort order: priceAsc, priceDesc, or anything else for upcoming sessions first
    #[arg(long, value_name = "TOKEN")]
    pub sort: Option<String>,

    /// Zero-based page index
    #[arg(long, default_value = "0")]
    pub page: usize,

    /// Page size (defaults to the configured page size)
    #[arg(long)]
    pub size: Option<usize>,

    /// Print the search plan instead of running the search
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for title suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Catalog file (JSON array or JSON Lines)
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Partial title
    #[arg(value_name = "PARTIAL")]
    pub partial: String,

    /// Maximum number of suggestions (defaults to the configured limit)
    #[arg(short, long)]
    pub size: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_search_command() {
        let args = CourseSearchArgs::try_parse_from([
            "course-search",
            "search",
            "courses.json",
            "--q",
            "chess",
            "--type",
            "CLUB",
            "--min-age",
            "8",
            "--sort",
            "priceDesc",
            "--size",
            "5",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.catalog, PathBuf::from("courses.json"));
            assert_eq!(search_args.query.as_deref(), Some("chess"));
            assert_eq!(search_args.course_type.as_deref(), Some("CLUB"));
            assert_eq!(search_args.min_age, Some(8));
            assert_eq!(search_args.sort.as_deref(), Some("priceDesc"));
            assert_eq!(search_args.size, Some(5));
            assert_eq!(search_args.page, 0);
            assert!(!search_args.explain);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_start_date_is_parsed() {
        let args = CourseSearchArgs::try_parse_from([
            "course-search",
            "search",
            "courses.json",
            "--start-date",
            "2025-06-01T00:00:00Z",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            let date = search_args.start_date.unwrap();
            assert_eq!(date.to_rfc3339(), "2025-06-01T00:00:00+00:00");
        } else {
            panic!("Expected Search command");
        }

        assert!(
            CourseSearchArgs::try_parse_from([
                "course-search",
                "search",
                "courses.json",
                "--start-date",
                "tomorrow",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_suggest_command() {
        let args =
            CourseSearchArgs::try_parse_from(["course-search", "suggest", "courses.json", "ch", "-s", "3"])
                .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.partial, "ch");
            assert_eq!(suggest_args.size, Some(3));
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = CourseSearchArgs::try_parse_from(["course-search", "suggest", "c.json", "a"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            CourseSearchArgs::try_parse_from(["course-search", "-vv", "suggest", "c.json", "a"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            CourseSearchArgs::try_parse_from(["course-search", "--quiet", "suggest", "c.json", "a"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = CourseSearchArgs::try_parse_from([
            "course-search",
            "--format",
            "json",
            "suggest",
            "c.json",
            "a",
        ])
        .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
