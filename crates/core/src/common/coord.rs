//! Pixel coordinates and cardinal directions.
//!
//! This module defines the coordinate space of a blueprint image. It provides the following:
//! 1. **Type Safety:** A dedicated coordinate type instead of loose `(x, y)` tuples.
//! 2. **Checked Stepping:** Moving off the top or left edge yields `None` rather than wrapping.
//! 3. **Scan Order:** Directions are always visited Right, Down, Left, Up; coordinates order row-major.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A pixel position in the source image.
///
/// Ordering is row-major (`y` first, then `x`), which matches the scan order of
/// every extraction pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PixelCoord {
    /// Column, counted from the left edge.
    pub x: u32,
    /// Row, counted from the top edge.
    pub y: u32,
}

impl PixelCoord {
    /// Creates a coordinate from a column and a row.
    #[inline(always)]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the neighboring coordinate in `dir`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant. The
    /// right and bottom edges are not known here; callers check those against
    /// the image dimensions.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.offset();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Iterates the four cardinal neighbors in scan order, skipping any that
    /// fall off the top or left edge.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, Self)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(dir).map(|n| (dir, n)))
    }
}

impl Ord for PixelCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for PixelCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PixelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal directions.
///
/// A gate's direction is the offset from its input marker to its type marker,
/// which is also the side its output wire is searched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// +x
    Right,
    /// +y
    Down,
    /// -x
    Left,
    /// -y
    Up,
}

impl Direction {
    /// All directions in the fixed scan order used by gate detection and linking.
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Returns the `(dx, dy)` offset of one step in this direction.
    #[inline(always)]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
            Self::Up => "up",
        };
        f.pad(name)
    }
}
