#![warn(missing_docs)]
#![doc = "Pixel grid geometry for the point sketch."]
#![doc = ""]
#![doc = "This crate provides integer pixel points, a validated canvas grid that snaps"]
#![doc = "points to their containing cell, and the two-point ring-shift that drives the"]
#![doc = "sketch's line endpoints."]

pub mod error;
pub mod grid;
pub mod pair;
pub mod point_types;

pub use error::GridError;
pub use grid::{DEFAULT_CELL_SIZE, Grid, GridLine};
pub use pair::PointPair;
pub use point_types::{Cell, Point};
