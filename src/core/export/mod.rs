//! Library export
//!
//! This module provides:
//! - The connect → search → export pipeline
//! - The report describing how a run ended

pub mod pipeline;
pub mod report;

pub use pipeline::{ExportSettings, LibraryExportPipeline, LIBRARY_PORT, MAX_SEARCH_RESULTS};
pub use report::{DesignFailure, ExportReport, ExportStatus};
