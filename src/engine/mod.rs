//! Gateway to the external embroidery design engine
//!
//! The engine does all design parsing, rendering and encoding. This module only
//! describes the interface the pipelines need; [`crate::adapters`] provides
//! implementations.

pub mod traits;
pub mod types;

pub use traits::{
    BitmapSurface, DesignEngine, EmbDesign, LibraryConnection, LibraryDesign, SearchResults,
};
pub use types::{
    ClientType, DesignStatistics, FileFormat, ImageFormat, RenderBounds, SearchQuery,
    ThreadEntry, ThreadPalette, UNITS_PER_MM,
};
