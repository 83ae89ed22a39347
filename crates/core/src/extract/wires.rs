//! Wire extraction by iterative flood fill.
//!
//! Every unclaimed wire-colored pixel, visited row-major, seeds a new wire that
//! is grown breadth-first from an explicit worklist:
//! 1. **Same color:** Cardinal neighbors of the wire's color join the wire.
//! 2. **Crossings:** A red neighbor is recorded as a crossing; if the pixel one
//!    further step along the same axis has the wire's color, the fill tunnels to it.
//! 3. **Gates:** A neighboring gate pixel is queued as a *skip* item. It is never
//!    added to the wire, and it does not look for crossings or gates itself, but
//!    its same-colored neighbors still join the wire.
//!
//! A coordinate is queued at most once per fill and a claimed pixel is never
//! queued again, so total work is linear in the pixel count and stack usage does
//! not depend on image size.

use std::collections::{HashSet, VecDeque};

use super::color::ColorCategory;
use super::grid::PixelGrid;
use crate::circuit::{PixelIndex, Wire};
use crate::common::{PixelCoord, WireId};
use crate::extract::color::WireColor;

/// Output of wire extraction.
#[derive(Debug, Clone, Default)]
pub struct WireExtraction {
    /// Wires in seed order; a wire's index is its id.
    pub wires: Vec<Wire>,
    /// Crossing pixels met by any fill, each listed once in first-seen order.
    pub crossings: Vec<PixelCoord>,
}

#[derive(Debug, Clone, Copy)]
struct WorkItem {
    coord: PixelCoord,
    skip: bool,
}

/// Flood-fill state shared across all wires of one image.
#[derive(Debug)]
pub struct WireExtractor<'a> {
    grid: &'a PixelGrid,
    gate_pixels: &'a HashSet<PixelCoord>,
    index: &'a mut PixelIndex,
    crossings: Vec<PixelCoord>,
    crossing_seen: HashSet<PixelCoord>,
}

impl<'a> WireExtractor<'a> {
    /// Prepares an extractor. `grid` must already have its gate pixels erased;
    /// `index` receives the owner of every claimed pixel.
    pub fn new(
        grid: &'a PixelGrid,
        gate_pixels: &'a HashSet<PixelCoord>,
        index: &'a mut PixelIndex,
    ) -> Self {
        Self {
            grid,
            gate_pixels,
            index,
            crossings: Vec::new(),
            crossing_seen: HashSet::new(),
        }
    }

    /// Extracts every wire of the grid.
    pub fn run(mut self) -> WireExtraction {
        let mut wires = Vec::new();
        for seed in self.grid.coords() {
            if self.index.is_claimed(seed) {
                continue;
            }
            let Some(color) = self.grid.get(seed).wire_color() else {
                continue;
            };
            let id = WireId(wires.len());
            wires.push(self.fill(seed, color, id));
        }
        WireExtraction {
            wires,
            crossings: self.crossings,
        }
    }

    fn fill(&mut self, seed: PixelCoord, color: WireColor, id: WireId) -> Wire {
        let mut wire = Wire::new(color);
        let mut queue = VecDeque::new();
        let mut queued = HashSet::new();
        self.enqueue(&mut queue, &mut queued, seed, false);

        while let Some(item) = queue.pop_front() {
            if !item.skip {
                let _ = wire.insert(item.coord);
                self.index.claim_wire(item.coord, id);
            }

            for (dir, neighbor) in item.coord.neighbors() {
                let category = self.grid.get(neighbor);
                if category.wire_color() == Some(color) {
                    self.enqueue(&mut queue, &mut queued, neighbor, false);
                }
                if item.skip {
                    continue;
                }
                if category == ColorCategory::Crossing {
                    self.record_crossing(neighbor);
                    if let Some(far) = neighbor.step(dir) {
                        if self.grid.get(far).wire_color() == Some(color) {
                            self.enqueue(&mut queue, &mut queued, far, false);
                        }
                    }
                }
                if self.gate_pixels.contains(&neighbor) {
                    self.enqueue(&mut queue, &mut queued, neighbor, true);
                }
            }
        }
        wire
    }

    fn enqueue(
        &self,
        queue: &mut VecDeque<WorkItem>,
        queued: &mut HashSet<PixelCoord>,
        coord: PixelCoord,
        skip: bool,
    ) {
        if !self.index.is_claimed(coord) && queued.insert(coord) {
            queue.push_back(WorkItem { coord, skip });
        }
    }

    fn record_crossing(&mut self, coord: PixelCoord) {
        if self.crossing_seen.insert(coord) {
            self.crossings.push(coord);
        }
    }
}

/// Extracts every wire of `grid`, recording pixel ownership in `index`.
pub fn extract_wires(
    grid: &PixelGrid,
    gate_pixels: &HashSet<PixelCoord>,
    index: &mut PixelIndex,
) -> WireExtraction {
    WireExtractor::new(grid, gate_pixels, index).run()
}
