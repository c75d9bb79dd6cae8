//! Design summary CSV
//!
//! This module provides:
//! - Discovery of design files under a folder
//! - Row construction and formatting
//! - The batch pipeline that writes the summary file

pub mod discovery;
pub mod pipeline;
pub mod row;

pub use discovery::discover_designs;
pub use pipeline::{BatchSummaryPipeline, CsvSink, SummaryReport};
pub use row::{format_millimetres, DesignRow, HeightColumn, CSV_HEADER, FIXED_COLUMNS};
