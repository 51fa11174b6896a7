use thiserror::Error;

/// Errors returned by [`Field`](crate::Field) operations.
///
/// All of these are synchronous, caller-recoverable conditions; the field
/// itself is never left in a broken state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("field dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("position ({x}, {y}) is outside the field")]
    OutOfBounds { x: usize, y: usize },
}
