//! Validator configuration
//!
//! Everything the validator checks is injected through [`ValidatorConfig`]:
//! expected paths, scanned sources and build descriptor rules. The config is
//! read from `.projcheck.toml` in the project root when present, and any
//! section left out falls back to the built-in defaults.

mod defaults;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{CheckItem, ExpectedGroup};
use crate::paths;

use defaults::{
    default_dependencies, default_descriptor, default_extension, default_groups,
    default_plugins, default_source_root, default_sources,
};

/// Errors that can occur while loading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be rendered as TOML
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Config parsed but is semantically unusable
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Build descriptor rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildRules {
    /// Descriptor path relative to the project root
    #[serde(default = "default_descriptor")]
    pub descriptor: String,

    /// Plugin identifiers that must appear in the descriptor
    #[serde(default = "default_plugins")]
    pub plugins: Vec<String>,

    /// Dependency identifiers that must appear in the descriptor
    #[serde(default = "default_dependencies")]
    pub dependencies: Vec<String>,
}

impl Default for BuildRules {
    fn default() -> Self {
        Self {
            descriptor: default_descriptor(),
            plugins: default_plugins(),
            dependencies: default_dependencies(),
        }
    }
}

/// Heuristic source scan rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyntaxRules {
    /// Source files scanned on every run
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    /// Also scan every matching file under `source_root`
    #[serde(default)]
    pub discover: bool,

    /// Directory walked when discovery is on
    #[serde(default = "default_source_root")]
    pub source_root: String,

    /// File extension picked up by discovery (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for SyntaxRules {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            discover: false,
            source_root: default_source_root(),
            extension: default_extension(),
        }
    }
}

/// Complete validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Build descriptor rules
    #[serde(default)]
    pub build: BuildRules,

    /// Source scan rules
    #[serde(default)]
    pub syntax: SyntaxRules,

    /// Expected paths, grouped into titled sections
    #[serde(default = "default_groups", rename = "group")]
    pub groups: Vec<ExpectedGroup>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            build: BuildRules::default(),
            syntax: SyntaxRules::default(),
            groups: default_groups(),
        }
    }
}

impl ValidatorConfig {
    /// Parse config from TOML text
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Resolve config for a project root
    ///
    /// An explicit path must exist. Otherwise `<root>/.projcheck.toml` is used
    /// when present, and the built-in defaults when not.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::debug!("loading config from {}", path.display());
            return Self::load_from(path);
        }

        let path = paths::config_file(root);
        if path.is_file() {
            log::debug!("loading config from {}", path.display());
            Self::load_from(&path)
        } else {
            log::debug!("no {} under {}, using defaults", paths::CONFIG_FILE, root.display());
            Ok(Self::default())
        }
    }

    /// Reject configs that cannot drive a meaningful run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.build.descriptor.trim().is_empty() {
            return Err(ConfigError::Invalid("build.descriptor is empty".to_string()));
        }
        if self.syntax.extension.trim().is_empty() {
            return Err(ConfigError::Invalid("syntax.extension is empty".to_string()));
        }
        let blank_item = |g: &&ExpectedGroup| g.items.iter().any(|i| i.path.trim().is_empty());
        if let Some(group) = self.groups.iter().find(blank_item) {
            return Err(ConfigError::Invalid(format!(
                "group '{}' has an item with an empty path",
                group.title
            )));
        }
        if self.syntax.sources.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid("syntax.sources has an empty path".to_string()));
        }
        Ok(())
    }

    /// Render as TOML (used by `init`)
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// All expected paths across groups, in order
    pub fn expected_items(&self) -> impl Iterator<Item = &CheckItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }
}
