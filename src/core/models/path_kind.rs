//! Expected path kinds
//!
//! Distinguishes whether an expected path must be a regular file or a directory.

use serde::{Deserialize, Serialize};

/// What kind of filesystem entry an expected path must be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// A regular file
    #[default]
    File,
    /// A directory
    Directory,
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}
