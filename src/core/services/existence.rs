//! Existence checks for expected paths

use std::path::Path;

use crate::core::models::{CheckItem, ExistenceResult, PathKind};

/// Whether `path` exists as an entry of the given kind
///
/// Filesystem errors (permissions, broken symlinks) read as "does not exist".
#[must_use]
pub fn path_exists(path: &Path, kind: PathKind) -> bool {
    match kind {
        PathKind::File => path.is_file(),
        PathKind::Directory => path.is_dir(),
    }
}

/// Check one expected path under `root`
#[must_use]
pub fn check_item(root: &Path, item: &CheckItem) -> ExistenceResult {
    let full = root.join(&item.path);
    let exists = path_exists(&full, item.kind);
    log::debug!("{} {} -> {}", item.kind, full.display(), exists);
    ExistenceResult {
        item: item.clone(),
        exists,
    }
}

/// Check every expected path in order
#[must_use]
pub fn check_items(root: &Path, items: &[CheckItem]) -> Vec<ExistenceResult> {
    items.iter().map(|item| check_item(root, item)).collect()
}
