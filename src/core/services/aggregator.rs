//! Validation runs
//!
//! Runs the individual checks in a single linear pass and assembles the
//! report. Nothing here is fatal: every failure lands in the report.

use std::path::Path;

use crate::config::ValidatorConfig;
use crate::core::models::{GroupResult, StructureReport, ValidationReport};

use super::build_config::check_build_config;
use super::discovery::{discover_sources, merge_sources};
use super::existence::check_items;
use super::syntax::check_source;

/// Source files the run will scan, explicit ones first
#[must_use]
pub fn sources_to_scan(root: &Path, config: &ValidatorConfig) -> Vec<String> {
    let syntax = &config.syntax;
    if syntax.discover {
        let discovered = discover_sources(root, &syntax.source_root, &syntax.extension);
        log::debug!("discovered {} source file(s) under {}", discovered.len(), syntax.source_root);
        merge_sources(&syntax.sources, discovered)
    } else {
        syntax.sources.clone()
    }
}

/// Full validation: existence, heuristic syntax scan and build descriptor
///
/// Source files that do not exist are skipped here; the existence check is
/// where missing files are reported.
#[must_use]
pub fn validate(root: &Path, config: &ValidatorConfig) -> ValidationReport {
    let items: Vec<_> = config.expected_items().cloned().collect();
    let structure = check_items(root, &items);

    let sources = sources_to_scan(root, config)
        .iter()
        .filter(|file| {
            let present = root.join(file.as_str()).is_file();
            if !present {
                log::debug!("skipping scan of missing source {file}");
            }
            present
        })
        .map(|file| check_source(root, file))
        .collect();

    let build = check_build_config(
        root,
        &config.build.descriptor,
        &config.build.plugins,
        &config.build.dependencies,
    );

    let report = ValidationReport::new(structure, sources, build);
    log::debug!(
        "structure_ok={} syntax_ok={} config_ok={}",
        report.summary.structure_ok,
        report.summary.syntax_ok,
        report.summary.config_ok
    );
    report
}

/// Existence-only pass over the configured groups
#[must_use]
pub fn structure(root: &Path, config: &ValidatorConfig) -> StructureReport {
    let groups = config
        .groups
        .iter()
        .map(|group| GroupResult {
            title: group.title.clone(),
            results: check_items(root, &group.items),
        })
        .collect();
    StructureReport::new(groups)
}
