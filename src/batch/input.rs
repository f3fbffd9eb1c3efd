//! Parts list input.
//!
//! A parts list is either a JSON array of component records or a CSV file
//! with one record per row. Column and key names are the record's
//! serialised field names (`hardware_id`, `category_id`, `piQ`, ...);
//! absent fields take their defaults.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{BatchError, BatchResult};
use crate::milhdbk217f::Attributes;

/// Expands file paths and glob patterns into a sorted, de-duplicated list
/// of input files.
///
/// # Errors
///
/// Returns an error if a pattern is invalid or matches nothing.
pub fn resolve(patterns: &[String]) -> BatchResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let entries = glob::glob(pattern).map_err(|source| BatchError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        let before = paths.len();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(path) => debug!(path = %path.display(), "skipping non-file match"),
                Err(e) => warn!(error = %e, "unreadable glob match"),
            }
        }
        if paths.len() == before {
            return Err(BatchError::NoMatch {
                pattern: pattern.clone(),
            });
        }
    }
    paths.sort();
    paths.dedup();
    Ok(paths)
}

/// Loads the parts list in `path`, choosing the format from the extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or has an
/// extension other than `.json` or `.csv`.
pub fn load(path: &Path) -> BatchResult<Vec<Attributes>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);
    let parts = match extension.as_deref() {
        Some("json") => load_json(path)?,
        Some("csv") => load_csv(path)?,
        _ => {
            return Err(BatchError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };
    info!(path = %path.display(), parts = parts.len(), "loaded parts list");
    Ok(parts)
}

fn load_json(path: &Path) -> BatchResult<Vec<Attributes>> {
    let contents = std::fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| BatchError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn load_csv(path: &Path) -> BatchResult<Vec<Attributes>> {
    let csv_error = |source| BatchError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;
    reader
        .deserialize()
        .collect::<Result<Vec<Attributes>, _>>()
        .map_err(csv_error)
}
