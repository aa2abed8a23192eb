//! Centralized path definitions for projcheck
//!
//! ## Layout
//!
//! ```text
//! project/                      # --root (defaults to the current directory)
//! ├── .projcheck.toml           # Optional validator configuration
//! ├── build.gradle              # Build descriptor (configurable)
//! └── app/src/...               # Expected paths and scanned sources
//! ```
//!
//! All configured paths are relative to the project root.

use std::path::{Path, PathBuf};

/// Configuration filename looked up in the project root
pub const CONFIG_FILE: &str = ".projcheck.toml";

/// Get path to the configuration file for a project root.
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve the project root from an optional CLI argument.
///
/// Falls back to the current directory.
pub fn project_root(arg: Option<&Path>) -> std::io::Result<PathBuf> {
    match arg {
        Some(path) => Ok(path.to_path_buf()),
        None => std::env::current_dir(),
    }
}

/// Render `path` relative to `root` with forward slashes.
///
/// Returns `None` if `path` is not under `root`.
#[must_use]
pub fn relative_display(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> =
        rel.components().map(|c| c.as_os_str().to_string_lossy().into_owned()).collect();
    Some(parts.join("/"))
}
