//! Pixel color classification.
//!
//! A blueprint pixel's meaning depends only on which of its RGB channels are
//! non-zero, never on their exact values:
//!
//! | Non-zero channels | Category                   |
//! |-------------------|----------------------------|
//! | R, G, B           | white wire                 |
//! | R, B              | magenta wire               |
//! | R, G              | yellow wire                |
//! | G, B              | cyan wire                  |
//! | R                 | crossing or gate input     |
//! | B                 | NOT gate type marker       |
//! | G                 | DIODE gate type marker     |
//! | none              | space                      |
//!
//! Crossings and gate inputs share pure red. [`classify`] cannot tell them apart
//! and reports `Crossing`; gate extraction promotes a red pixel to a gate input
//! when it has a type marker as a cardinal neighbor, and erases it before wire
//! extraction looks at the image.

use serde::Serialize;

use crate::circuit::{GateKind, Level};

/// Which RGB channels of a pixel are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelMask {
    /// Red channel is non-zero.
    pub r: bool,
    /// Green channel is non-zero.
    pub g: bool,
    /// Blue channel is non-zero.
    pub b: bool,
}

impl ChannelMask {
    /// Builds a mask from raw channel values.
    #[inline]
    pub const fn of(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r > 0,
            g: g > 0,
            b: b > 0,
        }
    }
}

/// One of the four wire colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum WireColor {
    /// All three channels set.
    White,
    /// Red and blue.
    Magenta,
    /// Red and green.
    Yellow,
    /// Green and blue.
    Cyan,
}

impl WireColor {
    /// Canonical full-intensity color.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::White => [0xFF, 0xFF, 0xFF],
            Self::Magenta => [0xFF, 0x00, 0xFF],
            Self::Yellow => [0xFF, 0xFF, 0x00],
            Self::Cyan => [0x00, 0xFF, 0xFF],
        }
    }

    /// Color a renderer should use for a wire at `level`: full intensity when
    /// high, every channel halved when low.
    pub const fn display_rgb(self, level: Level) -> [u8; 3] {
        let [r, g, b] = self.rgb();
        match level {
            Level::High => [r, g, b],
            Level::Low => [r / 2, g / 2, b / 2],
        }
    }
}

/// Semantic category of a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    /// Background; belongs to nothing.
    Space,
    /// Part of a wire trace.
    Wire(WireColor),
    /// Pure red pixel seen without gate context.
    Crossing,
    /// Pure red pixel next to a type marker. Only produced by gate extraction.
    GateInputMarker,
    /// Marks the kind of the gate whose input marker is adjacent.
    GateTypeMarker(GateKind),
}

impl ColorCategory {
    /// Returns the wire color if this is a wire pixel.
    #[inline]
    pub const fn wire_color(self) -> Option<WireColor> {
        match self {
            Self::Wire(color) => Some(color),
            _ => None,
        }
    }

    /// True for pure red pixels, which may be either a crossing or a gate input.
    #[inline]
    pub const fn is_red_marker(self) -> bool {
        matches!(self, Self::Crossing | Self::GateInputMarker)
    }
}

/// Classifies a pixel by its non-zero channels.
///
/// Pure, total and alpha-blind. Pure red comes back as
/// [`ColorCategory::Crossing`]; see the module docs for how gate inputs are
/// told apart.
pub fn classify(r: u8, g: u8, b: u8) -> ColorCategory {
    let mask = ChannelMask::of(r, g, b);
    match (mask.r, mask.g, mask.b) {
        (true, true, true) => ColorCategory::Wire(WireColor::White),
        (true, false, true) => ColorCategory::Wire(WireColor::Magenta),
        (true, true, false) => ColorCategory::Wire(WireColor::Yellow),
        (false, true, true) => ColorCategory::Wire(WireColor::Cyan),
        (true, false, false) => ColorCategory::Crossing,
        (false, false, false) => ColorCategory::Space,
        _ => GateKind::from_marker(mask).map_or(ColorCategory::Space, ColorCategory::GateTypeMarker),
    }
}
