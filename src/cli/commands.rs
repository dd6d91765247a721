//! Command implementations for the course search CLI.

use std::sync::Arc;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::loader;
use crate::error::Result;
use crate::search::ServiceConfig;
use crate::search::criteria::SearchCriteria;
use crate::search::memory::InMemoryEngine;
use crate::search::strategy::CourseSearchService;

/// Execute a CLI command.
pub fn execute_command(args: CourseSearchArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Search(search_args) => search_courses(search_args, config, &args),
        Command::Suggest(suggest_args) => suggest_titles(suggest_args, config, &args),
    }
}

fn load_config(args: &CourseSearchArgs) -> Result<ServiceConfig> {
    match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            ServiceConfig::from_json_file(path)
        }
        None => Ok(ServiceConfig::default()),
    }
}

/// Load a catalog into a fresh in-memory engine and wrap it in a service.
fn open_service(
    catalog: &std::path::Path,
    config: ServiceConfig,
) -> Result<CourseSearchService> {
    let engine = InMemoryEngine::new();
    loader::load_into(&engine, catalog)?;
    Ok(CourseSearchService::with_config(Arc::new(engine), config))
}

/// Build search criteria from command line arguments.
pub fn build_criteria(args: &SearchArgs, config: &ServiceConfig) -> Result<SearchCriteria> {
    let mut builder = SearchCriteria::builder()
        .page(args.page)
        .size(args.size.unwrap_or(config.default_page_size));

    if let Some(query) = &args.query {
        builder = builder.query(query.as_str());
    }
    if let Some(category) = &args.category {
        builder = builder.category(category.as_str());
    }
    if let Some(course_type) = &args.course_type {
        builder = builder.course_type(course_type.as_str());
    }
    if let Some(min_age) = args.min_age {
        builder = builder.min_age(min_age);
    }
    if let Some(max_age) = args.max_age {
        builder = builder.max_age(max_age);
    }
    if let Some(min_price) = args.min_price {
        builder = builder.min_price(min_price);
    }
    if let Some(max_price) = args.max_price {
        builder = builder.max_price(max_price);
    }
    if let Some(start_date) = args.start_date {
        builder = builder.from_date(start_date);
    }
    if let Some(sort) = &args.sort {
        builder = builder.sort(sort.as_str());
    }

    builder.build()
}

/// Search the catalog.
fn search_courses(
    args: &SearchArgs,
    config: ServiceConfig,
    cli_args: &CourseSearchArgs,
) -> Result<()> {
    let criteria = build_criteria(args, &config)?;
    let service = open_service(&args.catalog, config)?;

    if args.explain {
        return output_plan(&service.plan(&criteria), cli_args);
    }

    let page = service.search(&criteria)?;
    output_search(&SearchResponse::from(page), cli_args)
}

/// Suggest titles for a partial title.
fn suggest_titles(
    args: &SuggestArgs,
    config: ServiceConfig,
    cli_args: &CourseSearchArgs,
) -> Result<()> {
    let limit = args.size.unwrap_or(config.default_suggestion_limit);
    let service = open_service(&args.catalog, config)?;

    let suggestions = service.suggest(&args.partial, limit)?;
    output_suggestions(&suggestions, cli_args)
}
