//! Value types exchanged with the design engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine units per millimetre
pub const UNITS_PER_MM: f64 = 254.0;

/// Design file formats understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Let the engine detect the format from the file
    Auto,
    Pcf,
    Pxf,
}

impl FileFormat {
    /// Format for a path extension (case-insensitive), if it is a design file
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pcf" => Some(FileFormat::Pcf),
            "pxf" => Some(FileFormat::Pxf),
            _ => None,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Auto => write!(f, "auto"),
            FileFormat::Pcf => write!(f, "pcf"),
            FileFormat::Pxf => write!(f, "pxf"),
        }
    }
}

/// Raster formats a surface can be saved as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
}

/// Client identity announced to the library server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientType {
    /// Design-library client
    PdlClient,
}

/// Target rectangle, in surface pixels, for rendering a design
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RenderBounds {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// One thread in a palette
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThreadEntry {
    pub name: String,
    pub code: String,
}

impl ThreadEntry {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// A named palette, indexed by needle number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadPalette {
    pub name: String,
    #[serde(default)]
    pub threads: Vec<ThreadEntry>,
}

impl ThreadPalette {
    pub fn new(name: impl Into<String>, threads: Vec<ThreadEntry>) -> Self {
        Self {
            name: name.into(),
            threads,
        }
    }

    /// Thread loaded on `needle`, if the palette has one
    pub fn get(&self, needle: u16) -> Option<&ThreadEntry> {
        self.threads.get(usize::from(needle))
    }
}

/// Statistics computed by the engine for an open design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DesignStatistics {
    pub color_changes: u32,
}

impl DesignStatistics {
    /// Number of colors sewn: one more than the number of changes
    pub fn num_colors(&self) -> u32 {
        self.color_changes + 1
    }
}

/// A library search expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Wildcard match on the design id: `[design_id] LIKE '*<fragment>*'`
    pub fn design_id_like(fragment: &str) -> Self {
        Self(format!("[design_id] LIKE '*{fragment}*'"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
