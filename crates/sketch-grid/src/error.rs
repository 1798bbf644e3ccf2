//! This module defines the error types used by the `sketch-grid` crate.

/// Error type for grid operations.
///
/// Covers invalid canvas geometry at construction time and cell lookups
/// that fall outside the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Error for an invalid cell size.
    /// Returned when the cell size is not positive or does not fit on the canvas.
    InvalidCellSize(&'static str),
    /// Error for invalid canvas dimensions.
    /// Returned when the canvas width or height is not positive.
    InvalidDimensions(&'static str),
    /// Error for out-of-bounds access.
    /// Returned when a point or cell lies outside the canvas.
    OutOfBounds(&'static str),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidCellSize(msg) => write!(f, "Invalid cell size: {}", msg),
            GridError::InvalidDimensions(msg) => write!(f, "Invalid canvas dimensions: {}", msg),
            GridError::OutOfBounds(msg) => write!(f, "Grid access out of bounds: {}", msg),
        }
    }
}

impl core::error::Error for GridError {}
