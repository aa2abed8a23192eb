//! Checks and the runs that combine them
//!
//! - [`existence`] - Does each expected path exist as the right kind
//! - [`syntax`] - Heuristic delimiter/marker scan of source text
//! - [`build_config`] - Required identifiers in the build descriptor
//! - [`discovery`] - Find source files by extension
//! - [`aggregator`] - Run everything and build the report

pub mod aggregator;
pub mod build_config;
pub mod discovery;
pub mod existence;
pub mod syntax;

pub use aggregator::{structure, validate};
pub use build_config::check_build_config;
pub use discovery::discover_sources;
pub use existence::{check_item, check_items, path_exists};
pub use syntax::{check_source, scan_text};
