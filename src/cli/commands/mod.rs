//! Command implementations

mod init;
mod structure;
mod validate;

pub use init::init;
pub use structure::structure;
pub use validate::validate;

use std::path::PathBuf;

use anyhow::Context;
use projcheck::config::ValidatorConfig;
use projcheck::paths;

use super::app::TargetArgs;

/// Resolve the project root and load its configuration
fn load_target(target: &TargetArgs) -> anyhow::Result<(PathBuf, ValidatorConfig)> {
    let root = paths::project_root(target.root.as_deref())
        .context("cannot determine the current directory")?;
    if !root.is_dir() {
        anyhow::bail!("project root {} is not a directory", root.display());
    }

    let config = ValidatorConfig::load(&root, target.config.as_deref())
        .with_context(|| format!("failed to load configuration for {}", root.display()))?;
    log::debug!(
        "validating {} ({} expected path(s))",
        root.display(),
        config.expected_items().count()
    );

    Ok((root, config))
}
