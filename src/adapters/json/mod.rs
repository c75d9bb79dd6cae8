//! Reference engine that keeps designs as JSON documents
//!
//! Local design files and library designs share one document format (see
//! [`models::DesignDocument`]). Saving a design as PCF or PXF writes the same
//! document, so exported files can be summarised again with `design-info`.

pub mod engine;
pub mod library;
pub mod models;

pub use engine::{JsonDesign, JsonEngine, RasterSurface};
pub use library::{JsonLibraryConnection, JsonSearchResults};
pub use models::DesignDocument;
