//! Synchronous tick engine.
//!
//! One tick walks the phases `Idle → ClearBuffers → EvaluateGates → SwapBuffers → Idle`:
//! 1. **Clear:** Every driven (untouchable) wire's buffer is reset to low.
//! 2. **Evaluate:** Every linked gate reads its input's *current* state and may
//!    raise its output's buffer. Buffers are only ever raised, so several gates
//!    driving one wire combine as an OR regardless of evaluation order.
//! 3. **Swap:** Every driven wire takes its buffered level.
//!
//! Touchable wires are never written by the engine. Each gate therefore adds one
//! tick of delay, and feedback loops settle over several ticks.

use tracing::trace;

use crate::circuit::{Gate, Wire};
use crate::stats::SimStats;

/// Phase of the tick state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Between ticks.
    #[default]
    Idle,
    /// Resetting driven wire buffers.
    ClearBuffers,
    /// Applying gate functions to buffers.
    EvaluateGates,
    /// Publishing buffers to wire state.
    SwapBuffers,
}

/// Resets the buffer of every driven wire to low.
pub fn clear_buffers(wires: &mut [Wire]) {
    for wire in wires.iter_mut().filter(|w| !w.touchable) {
        wire.clear_buffer();
    }
}

/// Evaluates every linked gate against the current wire states.
///
/// Gates whose links are missing or out of range are skipped. Returns how many
/// gates raised their output buffer.
pub fn evaluate_gates(gates: &[Gate], wires: &mut [Wire]) -> u64 {
    let mut activations = 0;
    for gate in gates {
        let Some((input, output)) = gate.links() else {
            continue;
        };
        let Some(level) = wires.get(input.index()).map(|w| w.state) else {
            continue;
        };
        if !gate.kind.drives(level) {
            continue;
        }
        if let Some(out) = wires.get_mut(output.index()) {
            out.raise_buffer();
            activations += 1;
        }
    }
    activations
}

/// Copies the buffer into the state of every driven wire.
pub fn swap_buffers(wires: &mut [Wire]) {
    for wire in wires.iter_mut().filter(|w| !w.touchable) {
        wire.commit_buffer();
    }
}

/// Drives the tick state machine over a circuit's gates and wires.
#[derive(Debug, Default)]
pub struct SimulationEngine {
    phase: Phase,
    trace_ticks: bool,
}

impl SimulationEngine {
    /// Creates an idle engine. With `trace_ticks`, each tick emits a trace event.
    pub const fn new(trace_ticks: bool) -> Self {
        Self {
            phase: Phase::Idle,
            trace_ticks,
        }
    }

    /// Current phase; `Idle` whenever control is outside [`step`](Self::step).
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs one full tick.
    pub fn tick(&mut self, gates: &[Gate], wires: &mut [Wire], stats: &mut SimStats) {
        self.phase = Phase::ClearBuffers;
        clear_buffers(wires);

        self.phase = Phase::EvaluateGates;
        let activations = evaluate_gates(gates, wires);

        self.phase = Phase::SwapBuffers;
        swap_buffers(wires);

        self.phase = Phase::Idle;
        stats.ticks += 1;
        stats.gate_activations += activations;
        if self.trace_ticks {
            trace!(tick = stats.ticks, activations, "tick");
        }
    }

    /// Runs `n` ticks back to back. `n = 0` changes nothing.
    pub fn step(&mut self, gates: &[Gate], wires: &mut [Wire], n: u64, stats: &mut SimStats) {
        for _ in 0..n {
            self.tick(gates, wires, stats);
        }
    }
}
