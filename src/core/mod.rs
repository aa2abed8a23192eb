//! Core domain logic for projcheck
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`CheckItem`, `SyntaxIssue`, `ValidationReport`)
//! - `services/` - The individual checks and the aggregator that runs them

pub mod models;
pub mod services;
