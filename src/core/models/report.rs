//! Validation reports
//!
//! Built fresh for each run and discarded after rendering.

use serde::Serialize;

use super::{CheckItem, SourceReport};

/// Observed outcome for one expected path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExistenceResult {
    /// The expected path
    #[serde(flatten)]
    pub item: CheckItem,

    /// Whether an entry of the expected kind exists
    pub exists: bool,
}

/// Outcome of scanning the build descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BuildConfigOutcome {
    /// Descriptor file does not exist
    DescriptorMissing {
        /// Configured descriptor path
        path: String,
    },
    /// Descriptor exists but could not be read
    Unreadable {
        /// Configured descriptor path
        path: String,
        /// Underlying I/O error text
        reason: String,
    },
    /// Descriptor was read and scanned
    Checked {
        /// Configured descriptor path
        path: String,
        /// Required plugin identifiers not found, in configured order
        missing_plugins: Vec<String>,
        /// Required dependency identifiers not found, in configured order
        missing_dependencies: Vec<String>,
    },
}

impl BuildConfigOutcome {
    /// Whether every required identifier was found
    #[must_use]
    pub fn passed(&self) -> bool {
        match self {
            Self::Checked {
                missing_plugins,
                missing_dependencies,
                ..
            } => missing_plugins.is_empty() && missing_dependencies.is_empty(),
            Self::DescriptorMissing { .. } | Self::Unreadable { .. } => false,
        }
    }
}

/// The three category verdicts and their conjunction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Every expected path exists
    pub structure_ok: bool,
    /// No scanned source produced an issue
    pub syntax_ok: bool,
    /// Build descriptor has every required identifier
    pub config_ok: bool,
}

impl Summary {
    /// Verdict message when everything passed
    pub const PASS_MESSAGE: &'static str = "Project validation passed. Ready to build and test.";

    /// Verdict message when anything failed
    pub const FAIL_MESSAGE: &'static str = "Project has problems. Fix them before building.";

    /// Logical AND of the three categories
    #[must_use]
    pub const fn overall_ok(self) -> bool {
        self.structure_ok && self.syntax_ok && self.config_ok
    }

    /// Process exit code: 0 on pass, 1 on fail
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        if self.overall_ok() { 0 } else { 1 }
    }

    /// Final human-readable verdict
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        if self.overall_ok() {
            Self::PASS_MESSAGE
        } else {
            Self::FAIL_MESSAGE
        }
    }
}

/// Everything observed by a full validation run
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Existence outcome per expected path, in order
    pub structure: Vec<ExistenceResult>,

    /// Scan outcome per existing source file, in order
    pub sources: Vec<SourceReport>,

    /// Build descriptor outcome
    pub build: BuildConfigOutcome,

    /// Category verdicts
    pub summary: Summary,

    /// Convenience copy of `summary.overall_ok()`
    pub overall_ok: bool,
}

impl ValidationReport {
    /// Assemble a report, deriving the summary from the parts
    #[must_use]
    pub fn new(
        structure: Vec<ExistenceResult>,
        sources: Vec<SourceReport>,
        build: BuildConfigOutcome,
    ) -> Self {
        let summary = Summary {
            structure_ok: structure.iter().all(|r| r.exists),
            syntax_ok: sources.iter().all(SourceReport::passed),
            config_ok: build.passed(),
        };
        Self {
            structure,
            sources,
            build,
            overall_ok: summary.overall_ok(),
            summary,
        }
    }

    /// Process exit code for this run
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.summary.exit_code()
    }
}

/// Existence outcomes for one titled section
#[derive(Debug, Clone, Serialize)]
pub struct GroupResult {
    /// Section title
    pub title: String,
    /// Outcomes in order
    pub results: Vec<ExistenceResult>,
}

/// Outcome of the existence-only pass
#[derive(Debug, Clone, Serialize)]
pub struct StructureReport {
    /// Outcomes grouped by section
    pub groups: Vec<GroupResult>,

    /// Every expected path exists
    pub structure_ok: bool,
}

impl StructureReport {
    /// Assemble a report from grouped outcomes
    #[must_use]
    pub fn new(groups: Vec<GroupResult>) -> Self {
        let structure_ok = groups.iter().flat_map(|g| &g.results).all(|r| r.exists);
        Self {
            groups,
            structure_ok,
        }
    }

    /// Number of expected paths that are missing
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.groups.iter().flat_map(|g| &g.results).filter(|r| !r.exists).count()
    }
}
