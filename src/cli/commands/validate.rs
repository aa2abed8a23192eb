//! Full project validation

use std::process::ExitCode;

use anyhow::Context;
use projcheck::core::services;
use projcheck::output::OutputMode;

use super::load_target;
use crate::cli::app::TargetArgs;

/// Run every check, print the report, exit 0 on pass and 1 on fail
pub fn validate(
    target: &TargetArgs,
    discover: bool,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let (root, mut config) = load_target(target)?;
    if discover {
        config.syntax.discover = true;
    }

    let report = services::validate(&root, &config);
    report.render(mode).context("failed to write report")?;

    Ok(ExitCode::from(report.exit_code()))
}
