//! Gate records and gate kinds.
//!
//! A gate occupies two pixels: a red input marker at `position` and a type
//! marker one step away in `direction`. Its input wire touches the input marker
//! and its output wire touches the type marker.
//!
//! Adding a gate kind means adding a variant to [`GateKind`], its marker channels
//! in [`GateKind::marker`] and its transfer function in [`GateKind::drives`].

use std::fmt;

use serde::Serialize;

use super::wire::Level;
use crate::common::{Direction, PixelCoord, WireId};
use crate::extract::color::ChannelMask;

/// The logic function of a gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GateKind {
    /// Drives its output high while its input is low.
    Not,
    /// Drives its output high while its input is high.
    Diode,
}

impl GateKind {
    /// Every gate kind, in marker lookup order.
    pub const ALL: [Self; 2] = [Self::Not, Self::Diode];

    /// Channel pattern of this kind's type-marker pixel.
    pub const fn marker(self) -> ChannelMask {
        match self {
            Self::Not => ChannelMask {
                r: false,
                g: false,
                b: true,
            },
            Self::Diode => ChannelMask {
                r: false,
                g: true,
                b: false,
            },
        }
    }

    /// Canonical marker color, for drawing blueprints.
    pub const fn marker_rgb(self) -> [u8; 3] {
        let mask = self.marker();
        [
            if mask.r { 0xFF } else { 0 },
            if mask.g { 0xFF } else { 0 },
            if mask.b { 0xFF } else { 0 },
        ]
    }

    /// Looks up the kind whose type marker has channel pattern `mask`.
    pub fn from_marker(mask: ChannelMask) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.marker() == mask)
    }

    /// Whether a gate of this kind raises its output when its input is at `input`.
    #[inline]
    pub const fn drives(self, input: Level) -> bool {
        match self {
            Self::Not => matches!(input, Level::Low),
            Self::Diode => matches!(input, Level::High),
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => f.pad("NOT"),
            Self::Diode => f.pad("DIODE"),
        }
    }
}

/// A gate found in the blueprint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Gate {
    /// Coordinate of the red input marker.
    pub position: PixelCoord,
    /// Offset from the input marker to the type marker.
    pub direction: Direction,
    /// Logic function.
    pub kind: GateKind,
    /// Wire read by this gate, if one touches the input marker.
    pub input_wire: Option<WireId>,
    /// Wire driven by this gate, if one touches the type marker.
    pub output_wire: Option<WireId>,
}

impl Gate {
    /// Creates an unlinked gate.
    pub const fn new(position: PixelCoord, direction: Direction, kind: GateKind) -> Self {
        Self {
            position,
            direction,
            kind,
            input_wire: None,
            output_wire: None,
        }
    }

    /// Coordinate of the type marker, `position + direction`.
    pub fn type_marker(&self) -> Option<PixelCoord> {
        self.position.step(self.direction)
    }

    /// Returns `(input, output)` when both links resolved; `None` for an inert gate.
    #[inline]
    pub const fn links(&self) -> Option<(WireId, WireId)> {
        match (self.input_wire, self.output_wire) {
            (Some(input), Some(output)) => Some((input, output)),
            _ => None,
        }
    }

    /// True if the gate never affects simulation state.
    pub const fn is_inert(&self) -> bool {
        self.links().is_none()
    }

    /// True if `coord` is the input marker or the type marker of this gate.
    pub fn occupies(&self, coord: PixelCoord) -> bool {
        self.position == coord || self.type_marker() == Some(coord)
    }
}
