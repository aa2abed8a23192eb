//! Heuristic syntax issues
//!
//! Findings from the substring/count scan of a source file. These are hints,
//! not proof that the file fails to compile.

use serde::Serialize;

/// What a heuristic scan found wrong with a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// `{` and `}` counts differ
    BraceMismatch {
        /// Number of `{`
        open: usize,
        /// Number of `}`
        close: usize,
    },
    /// `(` and `)` counts differ
    ParenMismatch {
        /// Number of `(`
        open: usize,
        /// Number of `)`
        close: usize,
    },
    /// No `package ` substring
    MissingPackage,
    /// No `class <name>` match and no `object` substring
    MissingTypeDefinition,
    /// The file could not be read as UTF-8 text
    Unreadable {
        /// Underlying I/O error text
        reason: String,
    },
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BraceMismatch { open, close } => {
                write!(f, "brace mismatch: {open} opening, {close} closing")
            },
            Self::ParenMismatch { open, close } => {
                write!(f, "parenthesis mismatch: {open} opening, {close} closing")
            },
            Self::MissingPackage => write!(f, "missing package declaration"),
            Self::MissingTypeDefinition => write!(f, "missing class or object definition"),
            Self::Unreadable { reason } => write!(f, "failed to read file: {reason}"),
        }
    }
}

/// An issue attributed to a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxIssue {
    /// File the issue was found in (as configured, relative to the root)
    pub file: String,

    /// What was found
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl SyntaxIssue {
    /// Create an issue for a file
    pub fn new(file: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            file: file.into(),
            kind,
        }
    }

    /// Human-readable issue message
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Scan outcome for one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    /// File that was scanned
    pub file: String,

    /// Issues in evaluation order (empty = clean)
    pub issues: Vec<SyntaxIssue>,
}

impl SourceReport {
    /// Whether the scan found nothing
    #[must_use]
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}
