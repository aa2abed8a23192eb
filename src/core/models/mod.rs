//! Domain models for projcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CheckItem`] - "This path must exist"
//! - [`PathKind`] - Whether that path is a file or a directory
//! - [`SyntaxIssue`] - A heuristic finding in a source file
//! - [`ValidationReport`] - Everything one run observed

mod check_item;
mod issue;
mod path_kind;
mod report;

pub use check_item::{CheckItem, ExpectedGroup};
pub use issue::{IssueKind, SourceReport, SyntaxIssue};
pub use path_kind::PathKind;
pub use report::{
    BuildConfigOutcome, ExistenceResult, GroupResult, StructureReport, Summary, ValidationReport,
};
