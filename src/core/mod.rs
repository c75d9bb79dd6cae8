//! Core business logic for stitchkit.
//!
//! # Modules
//!
//! - [`export`] - Library search and export of matching designs
//! - [`summary`] - Design summary CSV generation
//!
//! # Export Workflow
//!
//! 1. **Connect**: open a library connection and the requested database
//! 2. **Search**: one wildcard search on the design id
//! 3. **Export**: open each match, save or render it, release it
//! 4. **Report**: status, exported files and exit code
//!
//! # Summary Workflow
//!
//! 1. **Reset**: delete the previous CSV and write the header
//! 2. **Discover**: walk the input folder for design files
//! 3. **Summarise**: one row per palette, flushed after each design

pub mod export;
pub mod summary;
