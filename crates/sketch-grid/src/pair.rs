//! The two tracked endpoints and the click-driven ring-shift over them.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point_types::Point;

/// The start (`p1`) and end (`p2`) of the sketched line.
///
/// New points always enter at `p2`; the previous `p2` becomes `p1` and the old
/// `p1` is dropped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PointPair {
    /// Start of the line, the older of the two points.
    pub p1: Point,
    /// End of the line, the most recent point.
    pub p2: Point,
}

impl PointPair {
    /// Construct a pair from its start and end.
    pub const fn new(p1: Point, p2: Point) -> Self {
        PointPair { p1, p2 }
    }

    /// Shift `p2` into `p1` and store `p` as the new `p2`.
    ///
    /// # Returns
    ///
    /// The displaced `p1`.
    pub fn shift_in(&mut self, p: Point) -> Point {
        let dropped = self.p1;
        self.p1 = self.p2;
        self.p2 = p;
        dropped
    }

    /// Both points in `[p1, p2]` order.
    pub fn endpoints(&self) -> [Point; 2] {
        [self.p1, self.p2]
    }
}

impl fmt::Display for PointPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p1, self.p2)
    }
}
