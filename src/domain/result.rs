//! Result type alias for stitchkit

use super::errors::StitchError;

/// Result type alias for stitchkit operations
///
/// # Examples
///
/// ```
/// use stitchkit::domain::result::Result;
/// use stitchkit::domain::errors::StitchError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(StitchError::Io("disk full".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, StitchError>;
