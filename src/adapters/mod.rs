//! Design engine adapters
//!
//! Implementations of the [`crate::engine`] gateway traits.

pub mod json;

use crate::engine::DesignEngine;

/// The engine session used by the command-line tools
pub fn default_engine() -> Box<dyn DesignEngine> {
    Box::new(json::JsonEngine::new())
}
