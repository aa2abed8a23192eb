//! Write the default configuration to a project

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use projcheck::config::ValidatorConfig;
use projcheck::output::{OperationResult, OutputMode};
use projcheck::paths;

/// Create `.projcheck.toml` in the project root
pub fn init(root: Option<&Path>, force: bool, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let root = paths::project_root(root).context("cannot determine the current directory")?;
    if !root.is_dir() {
        anyhow::bail!("project root {} is not a directory", root.display());
    }

    let config_path = paths::config_file(&root);
    if config_path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to overwrite.",
                paths::CONFIG_FILE
            ),
        }
        .render(mode)?;
        return Ok(ExitCode::SUCCESS);
    }

    let body = ValidatorConfig::default().to_toml()?;
    let content = format!(
        "# projcheck configuration\n\
         # Paths are relative to the project root. Omitted sections use the defaults.\n\n\
         {body}"
    );
    fs::write(&config_path, content)
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    log::debug!("wrote {}", config_path.display());

    OperationResult {
        success: true,
        message: format!("Created {}", paths::CONFIG_FILE),
    }
    .render(mode)?;
    Ok(ExitCode::SUCCESS)
}
