//! Discovery
//!
//! Recursively scans a directory for TypeScript component sources and runs
//! the decorator pass over each of them in parallel.

use log::{debug, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::transform::{transform_component_source, TransformOutput};

/// Transforms every `.ts` / `.tsx` file under `dir`, sorted by path.
///
/// Unreadable or unparseable files are logged and skipped so one broken
/// file does not hide the diagnostics of the rest.
pub fn transform_components_in_dir(dir: &Path, config: &TransformConfig) -> Vec<TransformOutput> {
    let files = find_component_sources(dir);
    debug!("found {} component sources under {}", files.len(), dir.display());

    files
        .par_iter()
        .filter_map(|path| match transform_component_file(path, config) {
            Ok(output) => Some(output),
            Err(e) => {
                warn!("{}", e);
                None
            }
        })
        .collect()
}

pub fn transform_component_file(
    path: &Path,
    config: &TransformConfig,
) -> Result<TransformOutput, TransformError> {
    let source = fs::read_to_string(path).map_err(|source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    transform_component_source(&source, &path.to_string_lossy(), config)
}

/// Recursively find all component sources in a directory
pub fn find_component_sources(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_node_modules(entry))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_component_source(entry.path()))
        .map(DirEntry::into_path)
        .collect();
    files.sort();
    files
}

fn is_node_modules(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == "node_modules"
}

fn is_component_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.ends_with(".d.ts") {
        return false;
    }
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("ts" | "tsx")
    )
}
