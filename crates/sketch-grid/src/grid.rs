use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::point_types::{Cell, Point};

/// Side length of a grid cell in pixels when none is configured.
pub const DEFAULT_CELL_SIZE: i32 = 10;

/// A straight grid line between two canvas points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridLine {
    /// Start of the line.
    pub from: Point,
    /// End of the line.
    pub to: Point,
}

/// A canvas divided into square cells.
///
/// The canvas spans `[0, width) x [0, height)` in pixel coordinates. Cells are
/// anchored at the origin, so the last column or row is partial when a dimension
/// is not a multiple of the cell size.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width of the canvas in pixels
    width: i32,
    /// Height of the canvas in pixels
    height: i32,
    /// Side length of a cell in pixels
    cell_size: i32,
}

impl Grid {
    /// Creates a new grid over a `width x height` canvas.
    ///
    /// # Arguments
    /// * `width` - Canvas width in pixels
    /// * `height` - Canvas height in pixels
    /// * `cell_size` - Side length of one cell in pixels
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The grid or an error if the geometry is invalid
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions("Width and height must be positive"));
        }
        if cell_size <= 0 {
            return Err(GridError::InvalidCellSize("Cell size must be positive"));
        }
        if cell_size > width || cell_size > height {
            return Err(GridError::InvalidCellSize("Cell size must not exceed canvas dimensions"));
        }

        Ok(Grid { width, height, cell_size })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Cell side length in pixels.
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Whether both dimensions are whole multiples of the cell size.
    pub fn is_aligned(&self) -> bool {
        self.width % self.cell_size == 0 && self.height % self.cell_size == 0
    }

    /// Number of columns, counting a trailing partial column.
    pub fn columns(&self) -> usize {
        (self.width as usize).div_ceil(self.cell_size as usize)
    }

    /// Number of rows, counting a trailing partial row.
    pub fn rows(&self) -> usize {
        (self.height as usize).div_ceil(self.cell_size as usize)
    }

    /// Rounds a coordinate down to the nearest multiple of the cell size.
    ///
    /// Rounding is towards negative infinity, so `snap(-1)` is `-cell_size`.
    pub fn snap(&self, n: i32) -> i32 {
        n.div_euclid(self.cell_size) * self.cell_size
    }

    /// Snaps both coordinates of `p` to the top-left corner of its cell.
    ///
    /// This is total: points outside the canvas snap the same way.
    pub fn snap_point(&self, p: Point) -> Point {
        Point::new(self.snap(p.x), self.snap(p.y))
    }

    /// Returns `true` if `p` lies on the canvas.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Converts a pixel point to the cell containing it.
    ///
    /// # Returns
    /// * `Result<Cell, GridError>` - The containing cell or an error if `p` is off the canvas
    pub fn cell_of(&self, p: Point) -> Result<Cell, GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds("Point lies outside the canvas"));
        }
        Ok(Cell::new(
            (p.x / self.cell_size) as usize,
            (p.y / self.cell_size) as usize,
        ))
    }

    /// Top-left corner of a cell in pixel coordinates.
    pub fn cell_origin(&self, cell: Cell) -> Result<Point, GridError> {
        if cell.col >= self.columns() || cell.row >= self.rows() {
            return Err(GridError::OutOfBounds("Cell index outside the grid"));
        }
        Ok(Point::new(
            cell.col as i32 * self.cell_size,
            cell.row as i32 * self.cell_size,
        ))
    }

    /// Center of a cell in pixel coordinates, rounded down to whole pixels.
    pub fn cell_center(&self, cell: Cell) -> Result<Point, GridError> {
        let origin = self.cell_origin(cell)?;
        Ok(self.center_of_snapped(origin))
    }

    /// Center of the cell a point snaps to.
    ///
    /// Unlike [`Grid::cell_center`] this never fails, since snapping is defined
    /// for every coordinate.
    pub fn snapped_center(&self, p: Point) -> Point {
        self.center_of_snapped(self.snap_point(p))
    }

    fn center_of_snapped(&self, corner: Point) -> Point {
        let half = self.cell_size / 2;
        Point::new(corner.x + half, corner.y + half)
    }

    /// Vertical grid lines, one every cell width from `x = 0`, each spanning the full height.
    pub fn vertical_lines(&self) -> impl Iterator<Item = GridLine> {
        let height = self.height;
        (0..self.width)
            .step_by(self.cell_size as usize)
            .map(move |x| GridLine {
                from: Point::new(x, 0),
                to: Point::new(x, height),
            })
    }

    /// Horizontal grid lines, one every cell height from `y = 0`, each spanning the full width.
    pub fn horizontal_lines(&self) -> impl Iterator<Item = GridLine> {
        let width = self.width;
        (0..self.height)
            .step_by(self.cell_size as usize)
            .map(move |y| GridLine {
                from: Point::new(0, y),
                to: Point::new(width, y),
            })
    }
}

impl Default for Grid {
    /// A 760x760 canvas of 10px cells, 76 cells per axis.
    fn default() -> Self {
        Grid {
            width: 760,
            height: 760,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid ({}x{}px, cell: {}px, {}x{} cells)",
            self.width,
            self.height,
            self.cell_size,
            self.columns(),
            self.rows()
        )
    }
}
