//! Scenario catalog files.
//!
//! A catalog file holds a top-level `scenarios` array. JSON:
//!
//! ```json
//! { "scenarios": [
//!     { "id": "housing-slump", "name": "Housing Slump",
//!       "impacts": [{ "assetClass": "Real Estate", "percentageChange": -25 }] }
//! ] }
//! ```
//!
//! TOML uses `[[scenarios]]` tables with the same field names.

use std::fs;
use std::path::Path;

use shockwave_portfolio::ScenarioCatalog;
use tracing::{debug, warn};

use crate::{FileError, FileResult};

/// Parses a catalog from JSON text.
///
/// # Errors
///
/// Returns [`FileError::Json`] for malformed input or invalid scenarios.
pub fn parse_catalog_json(input: &str) -> FileResult<ScenarioCatalog> {
    Ok(serde_json::from_str(input)?)
}

/// Parses a catalog from TOML text.
///
/// # Errors
///
/// Returns [`FileError::Toml`] for malformed input or invalid scenarios.
pub fn parse_catalog_toml(input: &str) -> FileResult<ScenarioCatalog> {
    Ok(toml::from_str(input)?)
}

/// Loads a catalog file, choosing the format from the extension.
///
/// # Errors
///
/// Returns [`FileError::UnsupportedFormat`] for anything other than
/// `.json` or `.toml`, [`FileError::Io`] if the file cannot be read, or a
/// parse error.
pub fn load_catalog(path: impl AsRef<Path>) -> FileResult<ScenarioCatalog> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let catalog = match extension.as_deref() {
        Some("json") => parse_catalog_json(&fs::read_to_string(path)?)?,
        Some("toml") => parse_catalog_toml(&fs::read_to_string(path)?)?,
        _ => {
            return Err(FileError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    for scenario in &catalog {
        let duplicates = scenario.duplicate_classes();
        if !duplicates.is_empty() {
            warn!(
                scenario = %scenario.id,
                classes = ?duplicates,
                "scenario defines an asset class more than once; the last entry wins"
            );
        }
    }

    debug!(path = %path.display(), scenarios = catalog.len(), "loaded scenario catalog");
    Ok(catalog)
}
