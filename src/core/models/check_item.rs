//! Expected path model
//!
//! A check item declares: "this path must exist under the project root".

use serde::{Deserialize, Serialize};

use super::PathKind;

/// A single expected path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckItem {
    /// Path relative to the project root (e.g., "app/build.gradle")
    pub path: String,

    /// Human-readable label shown next to the status tag
    pub description: String,

    /// Whether the path must be a file or a directory
    #[serde(default)]
    pub kind: PathKind,
}

impl CheckItem {
    /// Create an expected file
    pub fn file(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            kind: PathKind::File,
        }
    }

    /// Create an expected directory
    pub fn directory(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            kind: PathKind::Directory,
        }
    }
}

/// A titled section of expected paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectedGroup {
    /// Section title (e.g., "Root files")
    pub title: String,

    /// Paths in this section, checked in order
    #[serde(default, rename = "item")]
    pub items: Vec<CheckItem>,
}

impl ExpectedGroup {
    /// Create a group from a title and its items
    pub fn new(title: impl Into<String>, items: Vec<CheckItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}
