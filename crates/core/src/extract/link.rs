//! Gate-to-wire linking.
//!
//! For each gate the input wire is the first wire found among the neighbors of
//! the input marker, and the output wire is the first wire found among the
//! neighbors of the type marker. Both searches use the order Right, Down, Left,
//! Up, so when several wires touch a gate the choice depends on that order.
//! Output wires become untouchable.

use tracing::debug;

use crate::circuit::{Gate, PixelIndex, Wire};
use crate::common::{PixelCoord, WireId};

/// First wire owning a cardinal neighbor of `coord`.
fn first_adjacent_wire(index: &PixelIndex, coord: PixelCoord) -> Option<WireId> {
    coord.neighbors().find_map(|(_, n)| index.wire_at(n))
}

/// Resolves `input_wire` and `output_wire` of every gate and marks driven wires.
///
/// Returns the number of gates left inert.
pub fn link(gates: &mut [Gate], wires: &mut [Wire], index: &PixelIndex) -> usize {
    let mut inert = 0;
    for (id, gate) in gates.iter_mut().enumerate() {
        gate.input_wire = first_adjacent_wire(index, gate.position);
        gate.output_wire = gate
            .type_marker()
            .and_then(|marker| first_adjacent_wire(index, marker));

        if let Some(wire) = gate.output_wire.and_then(|w| wires.get_mut(w.index())) {
            wire.touchable = false;
        }
        if gate.is_inert() {
            inert += 1;
            debug!(
                id,
                position = %gate.position,
                has_input = gate.input_wire.is_some(),
                has_output = gate.output_wire.is_some(),
                "gate left inert"
            );
        }
    }
    inert
}
