//! Build descriptor check
//!
//! Plain substring search for required plugin and dependency identifiers.
//! No dependency resolution is attempted.

use std::fs;
use std::path::Path;

use crate::core::models::BuildConfigOutcome;

/// Required identifiers absent from `content`, in the order given
#[must_use]
pub fn missing_identifiers(content: &str, required: &[String]) -> Vec<String> {
    required.iter().filter(|id| !content.contains(id.as_str())).cloned().collect()
}

/// Scan the build descriptor at `root/descriptor`
///
/// Fails closed: a missing or unreadable descriptor never passes.
#[must_use]
pub fn check_build_config(
    root: &Path,
    descriptor: &str,
    plugins: &[String],
    dependencies: &[String],
) -> BuildConfigOutcome {
    let full = root.join(descriptor);
    if !full.is_file() {
        return BuildConfigOutcome::DescriptorMissing {
            path: descriptor.to_string(),
        };
    }

    match fs::read_to_string(&full) {
        Ok(content) => {
            let outcome = BuildConfigOutcome::Checked {
                path: descriptor.to_string(),
                missing_plugins: missing_identifiers(&content, plugins),
                missing_dependencies: missing_identifiers(&content, dependencies),
            };
            log::debug!("{descriptor}: passed={}", outcome.passed());
            outcome
        },
        Err(e) => BuildConfigOutcome::Unreadable {
            path: descriptor.to_string(),
            reason: e.to_string(),
        },
    }
}
