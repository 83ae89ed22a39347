//! Pixel ownership index.
//!
//! Maps every pixel to the wire that claimed it and to the first gate that
//! occupies it. Flood fill fills the wire side while it claims pixels, so the
//! linker and click lookups never scan wire pixel sets.
//!
//! Owners are stored as `u32` with `u32::MAX` as the empty slot, so the table
//! costs eight bytes per pixel.

use crate::common::{GateId, PixelCoord, WireId};

/// Slot value of a pixel nobody owns.
const UNOWNED: u32 = u32::MAX;

/// Dense per-pixel owner table.
#[derive(Debug, Clone)]
pub struct PixelIndex {
    width: u32,
    height: u32,
    wires: Vec<u32>,
    gates: Vec<u32>,
}

impl PixelIndex {
    /// Largest image the index can hold.
    ///
    /// A pixel yields at most one wire and a red pixel at most four gates, so
    /// below this size every id stays below `u32::MAX`.
    pub const MAX_PIXELS: u64 = (UNOWNED as u64 - 1) / 4;

    /// Creates an index with no owners.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            wires: vec![UNOWNED; len],
            gates: vec![UNOWNED; len],
        }
    }

    #[inline]
    const fn slot(&self, coord: PixelCoord) -> Option<usize> {
        if coord.x < self.width && coord.y < self.height {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    fn owner(table: &[u32], slot: usize) -> Option<usize> {
        match table[slot] {
            UNOWNED => None,
            id => Some(id as usize),
        }
    }

    fn claim(table: &mut [u32], slot: usize, id: usize) {
        if table[slot] != UNOWNED {
            return;
        }
        if let Ok(id) = u32::try_from(id) {
            table[slot] = id;
        }
    }

    /// Wire owning `coord`, if any.
    #[inline]
    pub fn wire_at(&self, coord: PixelCoord) -> Option<WireId> {
        self.slot(coord)
            .and_then(|i| Self::owner(&self.wires, i))
            .map(WireId)
    }

    /// First gate occupying `coord`, if any.
    #[inline]
    pub fn gate_at(&self, coord: PixelCoord) -> Option<GateId> {
        self.slot(coord)
            .and_then(|i| Self::owner(&self.gates, i))
            .map(GateId)
    }

    /// True if some wire already owns `coord`.
    #[inline]
    pub fn is_claimed(&self, coord: PixelCoord) -> bool {
        self.wire_at(coord).is_some()
    }

    /// Records `wire` as the owner of `coord`. Existing owners are kept.
    pub(crate) fn claim_wire(&mut self, coord: PixelCoord, wire: WireId) {
        if let Some(i) = self.slot(coord) {
            Self::claim(&mut self.wires, i, wire.index());
        }
    }

    /// Records `gate` as occupying `coord`. The first gate to claim a pixel keeps it.
    pub(crate) fn claim_gate(&mut self, coord: PixelCoord, gate: GateId) {
        if let Some(i) = self.slot(coord) {
            Self::claim(&mut self.gates, i, gate.index());
        }
    }
}
