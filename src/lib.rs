// Stitchkit - Embroidery design batch tools
// Copyright (c) 2025 Stitchkit Contributors
// Licensed under the MIT License

//! # Stitchkit - embroidery design batch tools
//!
//! Two small batch tools that drive an embroidery design engine:
//!
//! - **`design-info`** walks a folder of `.pcf`/`.pxf` files and writes a CSV
//!   with each design's size, stitch count and thread palettes.
//! - **`librarian-util`** validates a `GetDesign` command line, connects to a
//!   design library, searches for designs by id and exports every match as
//!   PNG, PCF or PXF.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line validation and command executors
//! - [`core`] - The export and summary pipelines
//! - [`engine`] - Gateway traits for the external design engine
//! - [`adapters`] - Engine implementations
//! - [`domain`] - Validated command, error types
//! - [`config`] - Environment settings and secret handling
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stitchkit::adapters::json::JsonEngine;
//! use stitchkit::core::export::{ExportSettings, LibraryExportPipeline};
//!
//! let engine = JsonEngine::new();
//! let args = ["GetDesign", "/srv/library", "-d", "designs", "-u", "bob",
//!             "-p", "pw", "-x", "/tmp/out", "-f", "png", "-s", "rose"];
//! let command = stitchkit::cli::parse(&args[..])?;
//!
//! let report = LibraryExportPipeline::new(&engine, ExportSettings::default()).run(&command);
//! println!("Exported {} design(s)", report.exported.len());
//! # Ok::<(), stitchkit::domain::ValidationError>(())
//! ```
//!
//! ## Resource handling
//!
//! Every engine object (connection, result set, result entry, design,
//! raster surface) is an owned box released on drop. The pipelines acquire
//! them in nested scopes, so they are released exactly once and in reverse
//! order whether a scope finishes normally or returns an error.
//!
//! ## Logging
//!
//! Stitchkit uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(server = "srv1", "Starting library export");
//! warn!(design = "ROSE-01", "Skipping design");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod engine;
pub mod logging;
