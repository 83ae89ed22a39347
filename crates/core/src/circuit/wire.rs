//! Wire records and logic levels.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::common::PixelCoord;
use crate::extract::color::WireColor;

/// Logic level of a wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Level {
    /// Logic 0; every wire starts here.
    #[default]
    Low,
    /// Logic 1.
    High,
}

impl Level {
    /// Returns the other level.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.pad("LOW"),
            Self::High => f.pad("HIGH"),
        }
    }
}

/// One connected single-color trace.
///
/// `state` is the visible level. `state_buffer` accumulates the next level of a
/// driven wire during a tick and is copied into `state` when the tick ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wire {
    pixels: HashSet<PixelCoord>,
    /// Trace color.
    pub color: WireColor,
    /// False once some gate drives this wire; only touchable wires may be toggled.
    pub touchable: bool,
    /// Current level.
    pub state: Level,
    state_buffer: Level,
}

impl Wire {
    /// Creates an empty, touchable, low wire.
    pub fn new(color: WireColor) -> Self {
        Self {
            pixels: HashSet::new(),
            color,
            touchable: true,
            state: Level::Low,
            state_buffer: Level::Low,
        }
    }

    /// Creates a touchable, low wire covering `pixels`.
    pub fn with_pixels(color: WireColor, pixels: impl IntoIterator<Item = PixelCoord>) -> Self {
        let mut wire = Self::new(color);
        wire.pixels.extend(pixels);
        wire
    }

    /// The pixels of this wire. Iteration order is unspecified.
    pub const fn pixels(&self) -> &HashSet<PixelCoord> {
        &self.pixels
    }

    /// True if `coord` is one of this wire's pixels.
    pub fn contains(&self, coord: PixelCoord) -> bool {
        self.pixels.contains(&coord)
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True if the wire has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels sorted row-major.
    pub fn sorted_pixels(&self) -> Vec<PixelCoord> {
        let mut pixels: Vec<PixelCoord> = self.pixels.iter().copied().collect();
        pixels.sort_unstable();
        pixels
    }

    /// Level accumulated for the tick in progress.
    pub const fn state_buffer(&self) -> Level {
        self.state_buffer
    }

    pub(crate) fn insert(&mut self, coord: PixelCoord) -> bool {
        self.pixels.insert(coord)
    }

    pub(crate) const fn clear_buffer(&mut self) {
        self.state_buffer = Level::Low;
    }

    pub(crate) const fn raise_buffer(&mut self) {
        self.state_buffer = Level::High;
    }

    pub(crate) const fn commit_buffer(&mut self) {
        self.state = self.state_buffer;
    }
}
