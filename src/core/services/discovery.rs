//! Source file discovery
//!
//! Walks a directory under the project root and collects every file with a
//! given extension. Hidden entries are skipped.

use std::path::Path;

use walkdir::WalkDir;

use crate::paths;

/// Find files with `extension` under `root/source_root`
///
/// Returned paths are relative to `root`, use forward slashes and are sorted.
/// A missing source root yields no files. Entries that cannot be read are
/// logged and skipped.
#[must_use]
pub fn discover_sources(root: &Path, source_root: &str, extension: &str) -> Vec<String> {
    let base = root.join(source_root);
    if !base.is_dir() {
        log::debug!("source root {} is not a directory", base.display());
        return Vec::new();
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(&base).follow_links(true).into_iter().filter_entry(|e| {
        // Don't filter the walk root itself
        e.path() == base || !is_hidden(e)
    }) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                continue;
            },
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        if let Some(rel) = paths::relative_display(root, entry.path()) {
            found.push(rel);
        }
    }

    // Sort for deterministic output
    found.sort();
    found
}

/// Merge discovered files into an explicit list, keeping explicit order first
#[must_use]
pub fn merge_sources(explicit: &[String], discovered: Vec<String>) -> Vec<String> {
    let mut merged = explicit.to_vec();
    for file in discovered {
        if !merged.contains(&file) {
            merged.push(file);
        }
    }
    merged
}

/// Check if an entry is hidden (starts with .)
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
