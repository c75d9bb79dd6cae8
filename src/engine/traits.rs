//! Design engine gateway traits
//!
//! These traits abstract the external embroidery engine: opening and inspecting
//! design files, rendering, and talking to a design-library server. Every
//! handle is an owned box; dropping it releases the underlying engine object,
//! so scopes that acquire several handles release them in reverse order.

use super::types::{
    ClientType, DesignStatistics, FileFormat, ImageFormat, RenderBounds, SearchQuery,
    ThreadPalette,
};
use crate::config::SecretString;
use crate::domain::Result;
use std::any::Any;
use std::path::Path;

/// An engine session
///
/// One value is created per process and passed by reference to the pipelines.
pub trait DesignEngine {
    /// Open a local design file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a design.
    fn open_design(&self, path: &Path, format: FileFormat) -> Result<Box<dyn EmbDesign>>;

    /// Allocate a blank raster surface
    fn new_image(&self, width: u32, height: u32) -> Result<Box<dyn BitmapSurface>>;

    /// Create an unconnected library connection
    fn new_library_connection(&self) -> Result<Box<dyn LibraryConnection>>;
}

/// An open design
pub trait EmbDesign {
    /// Extent in engine units (see [`super::UNITS_PER_MM`])
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn num_stitches(&self) -> u32;

    /// Needles used, in sewing order
    fn needle_sequence(&self) -> &[u16];

    /// Every palette attached to the design
    fn thread_palettes(&self) -> &[ThreadPalette];

    fn statistics(&self) -> Result<DesignStatistics>;

    /// Draw the design into `bounds` on `surface`
    ///
    /// # Errors
    ///
    /// Returns an error if the surface was not created by the same engine or
    /// the bounds fall outside it.
    fn render(&self, surface: &mut dyn BitmapSurface, bounds: RenderBounds) -> Result<()>;

    /// Write the design to `path` in `format`
    fn save(&self, path: &Path, format: FileFormat) -> Result<()>;
}

/// A raster image owned by the engine
pub trait BitmapSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn save(&self, path: &Path, format: ImageFormat) -> Result<()>;

    /// Downcast to Any so an engine can reach its own surface type
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A connection to a design-library server
pub trait LibraryConnection {
    fn connect(
        &mut self,
        server: &str,
        port: u16,
        user: &str,
        password: &SecretString,
        client_type: ClientType,
    ) -> Result<()>;

    fn open_database(&mut self, name: &str) -> Result<()>;

    /// Run a search in the open database
    ///
    /// Returns `None` when the server produced no result set at all.
    fn search(
        &mut self,
        query: &SearchQuery,
        max_results: usize,
    ) -> Result<Option<Box<dyn SearchResults>>>;

    /// Open a design from the open database by name
    fn open_design(&mut self, name: &str) -> Result<Box<dyn EmbDesign>>;
}

/// An ordered set of search matches
pub trait SearchResults {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Acquire the entry at `index`
    fn entry(&self, index: usize) -> Result<Box<dyn LibraryDesign>>;
}

/// One entry of a search result set
pub trait LibraryDesign {
    fn name(&self) -> &str;
}
