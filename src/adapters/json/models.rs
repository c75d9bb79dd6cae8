//! On-disk design document for the JSON engine

use crate::domain::{EngineError, Result};
use crate::engine::ThreadPalette;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A design as stored by the JSON engine
///
/// ```json
/// {
///   "width": 25400,
///   "height": 12700,
///   "stitches": 5120,
///   "color_changes": 2,
///   "needle_sequence": [1, 2, 1],
///   "palettes": [{ "name": "Madeira", "threads": [{ "name": "Black", "code": "1000" }] }],
///   "path": [[0, 0], [25400, 12700]]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDocument {
    #[serde(default)]
    pub width: i32,

    #[serde(default)]
    pub height: i32,

    #[serde(default)]
    pub stitches: u32,

    #[serde(default)]
    pub color_changes: u32,

    #[serde(default)]
    pub needle_sequence: Vec<u16>,

    #[serde(default)]
    pub palettes: Vec<ThreadPalette>,

    /// Stitch points in engine units, used for rendering
    #[serde(default)]
    pub path: Vec<[i32; 2]>,
}

impl DesignDocument {
    /// Read and parse a design document
    pub fn load(path: &Path) -> Result<Self> {
        let open_failed = |message: String| EngineError::OpenFailed {
            path: path.display().to_string(),
            message,
        };

        let contents = fs::read_to_string(path).map_err(|e| open_failed(e.to_string()))?;
        let document = serde_json::from_str(&contents).map_err(|e| open_failed(e.to_string()))?;
        Ok(document)
    }

    /// Serialize and write the document to `path`
    pub fn store(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| EngineError::SaveFailed {
            path: path.display().to_string(),
            message,
        };

        let contents = serde_json::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        fs::write(path, contents).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }
}
