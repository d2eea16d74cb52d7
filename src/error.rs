//! Error types for rendering and serialization.

use thiserror::Error;

/// Errors surfaced at the public rendering API boundary.
///
/// Geometry that lands outside the buffer is a caller bug, not a recoverable
/// runtime condition; it is reported explicitly rather than clamped so callers
/// can validate shapes before rasterizing.
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("invalid buffer dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("coordinate ({x}, {y}) outside {width}x{height} buffer")]
    OutOfBounds { x: i32, y: i32, width: u32, height: u32 },

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid render config: {0}")]
    Config(String),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RasterError>;
