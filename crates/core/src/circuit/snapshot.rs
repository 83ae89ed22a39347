//! Serializable circuit state for inspection.
//!
//! A snapshot is an export: it lists gates, wires and crossings with their current
//! levels so a front end can dump them as JSON. It is never read back.

use serde::Serialize;

use super::gate::Gate;
use super::model::CircuitModel;
use super::wire::Level;
use crate::common::{PixelCoord, WireId};
use crate::extract::color::WireColor;

/// One wire as exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireSnapshot {
    /// Wire id.
    pub id: WireId,
    /// Trace color.
    pub color: WireColor,
    /// Whether external input may toggle it.
    pub touchable: bool,
    /// Current level.
    pub state: Level,
    /// Pixels, sorted row-major.
    pub pixels: Vec<PixelCoord>,
}

/// Whole-circuit export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CircuitSnapshot {
    /// Image width.
    pub width: u32,
    /// Image height.
    pub height: u32,
    /// Ticks simulated so far.
    pub ticks: u64,
    /// All gates with their links.
    pub gates: Vec<Gate>,
    /// All wires.
    pub wires: Vec<WireSnapshot>,
    /// Crossing pixels.
    pub crossings: Vec<PixelCoord>,
}

impl CircuitSnapshot {
    /// Copies the current state of `model`.
    pub fn capture(model: &CircuitModel) -> Self {
        let (width, height) = model.dimensions();
        let wires = model
            .wires()
            .iter()
            .enumerate()
            .map(|(i, wire)| WireSnapshot {
                id: WireId(i),
                color: wire.color,
                touchable: wire.touchable,
                state: wire.state,
                pixels: wire.sorted_pixels(),
            })
            .collect();
        Self {
            width,
            height,
            ticks: model.stats().ticks,
            gates: model.gates().to_vec(),
            wires,
            crossings: model.crossings().to_vec(),
        }
    }

    /// Renders the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures from `serde_json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
