//! projcheck - structure and heuristic lint validation for Android projects
//!
//! Checks that an Android application project has its expected files, that
//! its Kotlin sources pass crude syntax heuristics, and that its build
//! descriptor names the required plugins and dependencies.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use std::process::ExitCode;

/// Exit code for errors that stop the run before a report exists
const FATAL_EXIT: u8 = 2;

/// Main entry point for the projcheck CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(FATAL_EXIT)
        },
    }
}
