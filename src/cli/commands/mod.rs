//! CLI command implementations

pub mod get_design;
pub mod summarize;
