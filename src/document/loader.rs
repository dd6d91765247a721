//! Catalog loading.
//!
//! A catalog is either a JSON array of course objects or JSON Lines, one
//! course object per line:
//!
//! ```json
//! [{"id": "1", "title": "Chess Club", "category": "Games", "type": "CLUB", "minAge": 8, "maxAge": 12}]
//! ```
//!
//! Loading is skipped when the engine already holds records.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::document::course::CourseRecord;
use crate::error::{CourseSearchError, Result};
use crate::search::engine::CourseEngine;

/// Outcome of loading a catalog into an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Records saved to the engine.
    pub loaded: usize,
    /// Whether loading was skipped because the engine was not empty.
    pub skipped: bool,
}

/// Parse catalog text, either a JSON array or JSON Lines.
pub fn parse_catalog(content: &str) -> Result<Vec<CourseRecord>> {
    let trimmed = content.trim_start();

    let records: Vec<CourseRecord> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)?
    } else {
        let mut records = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record: CourseRecord = serde_json::from_str(line)
                .with_context(|| format!("Invalid course on line {}", line_num + 1))?;
            records.push(record);
        }
        records
    };

    if let Some(position) = records.iter().position(|r| r.id.trim().is_empty()) {
        return Err(CourseSearchError::catalog(format!(
            "course at position {position} has an empty id"
        )));
    }

    Ok(records)
}

/// Read a catalog file.
pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CourseRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    parse_catalog(&content)
}

/// Load a catalog file into an engine, unless the engine already has data.
pub fn load_into<P: AsRef<Path>>(engine: &dyn CourseEngine, path: P) -> Result<LoadReport> {
    let path = path.as_ref();

    let existing = engine.count()?;
    if existing > 0 {
        log::warn!(
            "Engine already holds {existing} courses, skipping {}",
            path.display()
        );
        return Ok(LoadReport {
            loaded: 0,
            skipped: true,
        });
    }

    let records = read_catalog(path)?;
    let loaded = engine.save_all(records)?;
    log::info!("Loaded {loaded} courses from {}", path.display());

    Ok(LoadReport {
        loaded,
        skipped: false,
    })
}
