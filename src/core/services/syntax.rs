//! Heuristic syntax scan
//!
//! Counts delimiters and looks for marker substrings. Comments and string
//! literals are not treated specially: a `{` inside a string still counts,
//! and `object` anywhere in the text satisfies the type-definition rule.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{IssueKind, SourceReport, SyntaxIssue};

static CLASS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+(\w+)").expect("class pattern is valid"));

/// Scan source text and return issues in evaluation order
///
/// Order: braces, parentheses, package declaration, type definition.
#[must_use]
pub fn scan_text(content: &str) -> Vec<IssueKind> {
    let mut issues = Vec::new();

    let open = content.matches('{').count();
    let close = content.matches('}').count();
    if open != close {
        issues.push(IssueKind::BraceMismatch { open, close });
    }

    let open = content.matches('(').count();
    let close = content.matches(')').count();
    if open != close {
        issues.push(IssueKind::ParenMismatch { open, close });
    }

    if !content.contains("package ") {
        issues.push(IssueKind::MissingPackage);
    }

    if !CLASS_PATTERN.is_match(content) && !content.contains("object") {
        issues.push(IssueKind::MissingTypeDefinition);
    }

    issues
}

/// Scan one source file under `root`
///
/// A read failure (including invalid UTF-8) becomes a single
/// [`IssueKind::Unreadable`] issue.
#[must_use]
pub fn check_source(root: &Path, file: &str) -> SourceReport {
    let kinds = match fs::read_to_string(root.join(file)) {
        Ok(content) => scan_text(&content),
        Err(e) => {
            log::debug!("cannot read {file}: {e}");
            vec![IssueKind::Unreadable {
                reason: e.to_string(),
            }]
        },
    };

    SourceReport {
        file: file.to_string(),
        issues: kinds.into_iter().map(|kind| SyntaxIssue::new(file, kind)).collect(),
    }
}
