//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Temporary Android project builder


pub use fixtures::{COMPLETE_GRADLE, ProjectBuilder, kotlin_class};
