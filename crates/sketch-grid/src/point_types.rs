use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a point in pixel coordinates on the canvas.
///
/// The origin is the top-left corner, x grows to the right and y grows downwards.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// The x-coordinate in pixels.
    pub x: i32,
    /// The y-coordinate in pixels.
    pub y: i32,
}

impl Point {
    /// Creates a new `Point`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents a grid cell by its column and row index.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The column index, counted from the left edge.
    pub col: usize,
    /// The row index, counted from the top edge.
    pub row: usize,
}

impl Cell {
    /// Creates a new `Cell`.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}
