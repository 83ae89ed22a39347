//! Blueprint extraction pipeline.
//!
//! Turns a pixel grid into gates, wires and crossings. It runs the stages:
//! 1. **Classify:** Map every pixel to a [`ColorCategory`](color::ColorCategory).
//! 2. **Gates:** Detect gate markers and erase them from the working grid.
//! 3. **Wires:** Flood-fill wires and record crossings.
//! 4. **Link:** Attach gates to their input and output wires.

/// Pixel color classification.
pub mod color;
/// Gate detection.
pub mod gates;
/// Pixel source trait and the classified working grid.
pub mod grid;
/// Gate-to-wire linking.
pub mod link;
/// Wire flood fill.
pub mod wires;

use tracing::info;

use crate::circuit::{Gate, PixelIndex, Wire};
use crate::common::{GateId, PixelCoord};
pub use color::{ColorCategory, WireColor, classify};
pub use grid::{PixelGrid, PixelSource};

/// Everything extraction produces for one image.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Linked gates.
    pub gates: Vec<Gate>,
    /// Wires, touchability resolved.
    pub wires: Vec<Wire>,
    /// Crossing pixels.
    pub crossings: Vec<PixelCoord>,
    /// Pixel ownership.
    pub index: PixelIndex,
    /// Gates without both an input and an output wire.
    pub inert_gates: usize,
}

/// Runs the full pipeline over a classified grid.
pub fn extract(mut grid: PixelGrid) -> Extraction {
    let (width, height) = grid.dimensions();
    let mut index = PixelIndex::new(width, height);

    info!(width, height, "extracting gates");
    let found = gates::extract_gates(&grid);
    for (id, gate) in found.gates.iter().enumerate() {
        index.claim_gate(gate.position, GateId(id));
        if let Some(marker) = gate.type_marker() {
            index.claim_gate(marker, GateId(id));
        }
    }
    gates::erase_gates(&mut grid, &found);

    info!(gates = found.gates.len(), "extracting wires");
    let extracted = wires::extract_wires(&grid, &found.pixels, &mut index);

    info!(wires = extracted.wires.len(), crossings = extracted.crossings.len(), "attaching gates and wires");
    let mut gates = found.gates;
    let mut wires = extracted.wires;
    let inert_gates = link::link(&mut gates, &mut wires, &index);

    Extraction {
        gates,
        wires,
        crossings: extracted.crossings,
        index,
        inert_gates,
    }
}
