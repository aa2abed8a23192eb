//! projcheck - structure and heuristic lint validation for Android projects
//!
//! This library checks that an Android application project has its expected
//! files and directories, scans Kotlin sources for crude syntax red flags
//! (delimiter balance, package and type markers), and checks the build
//! descriptor for required plugin and dependency identifiers. All checks are
//! textual; nothing here parses Kotlin or invokes a build.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod paths;
