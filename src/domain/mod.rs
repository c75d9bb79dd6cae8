//! Domain models and types for stitchkit.
//!
//! The domain layer provides:
//! - **Validated commands** ([`Command`], [`FileType`])
//! - **Error types** ([`StitchError`], [`EngineError`], [`ValidationError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, StitchError>`]:
//!
//! ```rust
//! use stitchkit::domain::{EngineError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(EngineError::DesignNotFound("ROSE-01".to_string()))?
//! }
//! ```

pub mod command;
pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use command::{Command, FileType};
pub use errors::{EngineError, StitchError, ValidationError};
pub use result::Result;
