//! Gate detection.
//!
//! Scans the grid row-major for red pixels and inspects each one's cardinal
//! neighbors in the order Right, Down, Left, Up. Every neighbor that is a type
//! marker yields one gate, so a red pixel with markers on two sides becomes two
//! gates sharing a position.

use std::collections::HashSet;

use tracing::debug;

use super::color::ColorCategory;
use super::grid::PixelGrid;
use crate::circuit::Gate;
use crate::common::PixelCoord;

/// Output of gate detection.
#[derive(Debug, Clone, Default)]
pub struct GateExtraction {
    /// Gates in discovery order; a gate's index is its id.
    pub gates: Vec<Gate>,
    /// Input-marker and type-marker pixels of every gate.
    pub pixels: HashSet<PixelCoord>,
}

/// Category of `coord` with the red ambiguity resolved by its neighborhood.
///
/// A red pixel with at least one cardinal type-marker neighbor is a
/// `GateInputMarker`; any other red pixel stays a `Crossing`.
pub fn classify_in_context(grid: &PixelGrid, coord: PixelCoord) -> ColorCategory {
    let category = grid.get(coord);
    if !category.is_red_marker() {
        return category;
    }
    let has_marker = coord
        .neighbors()
        .any(|(_, n)| matches!(grid.get(n), ColorCategory::GateTypeMarker(_)));
    if has_marker {
        ColorCategory::GateInputMarker
    } else {
        ColorCategory::Crossing
    }
}

/// Finds every gate in `grid`.
pub fn extract_gates(grid: &PixelGrid) -> GateExtraction {
    let mut out = GateExtraction::default();
    for coord in grid.coords() {
        if classify_in_context(grid, coord) != ColorCategory::GateInputMarker {
            continue;
        }
        for (dir, neighbor) in coord.neighbors() {
            if let ColorCategory::GateTypeMarker(kind) = grid.get(neighbor) {
                debug!(id = out.gates.len(), %coord, %dir, %kind, "gate found");
                out.gates.push(Gate::new(coord, dir, kind));
                out.pixels.extend([coord, neighbor]);
            }
        }
    }
    out
}

/// Erases every gate pixel from `grid` so that later passes see them as space.
pub fn erase_gates(grid: &mut PixelGrid, gates: &GateExtraction) {
    for &coord in &gates.pixels {
        grid.erase(coord);
    }
}
