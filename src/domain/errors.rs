//! Domain error types
//!
//! This module defines the error hierarchy for stitchkit. Gateway failures and
//! command-line validation failures have their own enums and are wrapped by
//! [`StitchError`], so callers can propagate everything with `?`.

use thiserror::Error;

/// Main stitchkit error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum StitchError {
    /// Tool settings could not be resolved
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Command-line validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Design engine or design library errors
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// A single design could not be exported
    #[error("Failed to export design '{design}': {message}")]
    Export { design: String, message: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Command-line validation errors
///
/// Produced by the command dispatcher before any external resource is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fewer than two positional arguments
    #[error("A command and a server name are required.")]
    Usage,

    /// The first argument is not a recognized command
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// A positional argument is blank
    #[error("{0} is required.")]
    MissingArgument(&'static str),

    /// The flag tokens do not form exactly one pair per required flag
    #[error("Incorrect number of flags provided (expected {expected} tokens, got {actual}).")]
    FlagCount { expected: usize, actual: usize },

    /// A flag token is not in the recognized set
    #[error("Unknown flag '{0}'")]
    UnknownFlag(String),

    /// A required flag is absent or blank
    #[error("Missing required flag {0}")]
    MissingFlag(&'static str),

    /// The file type is not one of the allowed values
    #[error("Invalid file type '{value}'. Allowed types: {allowed}")]
    InvalidFileType { value: String, allowed: String },
}

/// Design engine and design library errors
///
/// These errors describe failures reported by the external engine without
/// exposing any adapter-specific types.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A design file could not be opened or parsed
    #[error("Failed to open design {path}: {message}")]
    OpenFailed { path: String, message: String },

    /// The requested file format is not supported for this operation
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Rendering into a raster surface failed
    #[error("Render failed: {0}")]
    RenderFailed(String),

    /// Writing a design or image to disk failed
    #[error("Failed to save {path}: {message}")]
    SaveFailed { path: String, message: String },

    /// Failed to connect to a design library server
    #[error("Failed to connect to {server}:{port}: {message}")]
    ConnectionFailed {
        server: String,
        port: u16,
        message: String,
    },

    /// The library rejected the supplied credentials
    #[error("Authentication failed for user '{0}'")]
    AuthenticationFailed(String),

    /// An operation needed a live connection or an open database
    #[error("Not connected: {0}")]
    NotConnected(String),

    /// The named database does not exist on the server
    #[error("Database not found: {0}")]
    DatabaseNotFound(String),

    /// The search query could not be executed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The named design does not exist in the open database
    #[error("Design not found: {0}")]
    DesignNotFound(String),

    /// A search result index was out of range
    #[error("Search result index {index} out of range ({len} results)")]
    ResultOutOfRange { index: usize, len: usize },
}

// Conversion from std::io::Error
impl From<std::io::Error> for StitchError {
    fn from(err: std::io::Error) -> Self {
        StitchError::Io(err.to_string())
    }
}

// Conversion from walkdir::Error
impl From<walkdir::Error> for StitchError {
    fn from(err: walkdir::Error) -> Self {
        StitchError::Io(err.to_string())
    }
}
