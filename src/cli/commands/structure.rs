//! Existence-only project check

use std::process::ExitCode;

use anyhow::Context;
use projcheck::core::services;
use projcheck::output::OutputMode;

use super::load_target;
use crate::cli::app::TargetArgs;

/// Report which expected paths exist
///
/// Exits 0 even when paths are missing unless `strict` is set.
pub fn structure(
    target: &TargetArgs,
    strict: bool,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let (root, config) = load_target(target)?;

    let report = services::structure(&root, &config);
    report.render(mode).context("failed to write report")?;

    if !report.structure_ok {
        log::debug!("{} expected path(s) missing", report.missing_count());
    }
    if strict && !report.structure_ok {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
