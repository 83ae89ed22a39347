//! Tick engine tests.
//!
//! These drive the engine directly over hand-built gates and wires, without
//! going through an image.

use bitwidgets_core::circuit::{Gate, GateKind, Level, Wire};
use bitwidgets_core::common::{Direction, PixelCoord, WireId};
use bitwidgets_core::extract::WireColor;
use bitwidgets_core::sim::engine::{self, Phase, SimulationEngine};
use bitwidgets_core::stats::SimStats;
use rstest::rstest;

fn wire(touchable: bool) -> Wire {
    let mut w = Wire::with_pixels(WireColor::White, [PixelCoord::new(0, 0)]);
    w.touchable = touchable;
    w
}

fn gate(kind: GateKind, input: usize, output: usize) -> Gate {
    let mut g = Gate::new(PixelCoord::new(0, 0), Direction::Right, kind);
    g.input_wire = Some(WireId(input));
    g.output_wire = Some(WireId(output));
    g
}

fn run(gates: &[Gate], wires: &mut [Wire], n: u64) -> SimStats {
    let mut stats = SimStats::default();
    SimulationEngine::new(false).step(gates, wires, n, &mut stats);
    stats
}

#[rstest]
#[case::not_low(GateKind::Not, Level::Low, Level::High)]
#[case::not_high(GateKind::Not, Level::High, Level::Low)]
#[case::diode_low(GateKind::Diode, Level::Low, Level::Low)]
#[case::diode_high(GateKind::Diode, Level::High, Level::High)]
fn truth_table(#[case] kind: GateKind, #[case] input: Level, #[case] want: Level) {
    let mut wires = vec![wire(true), wire(false)];
    wires[0].state = input;
    let _ = run(&[gate(kind, 0, 1)], &mut wires, 1);
    assert_eq!(wires[1].state, want);
}

#[test]
fn evaluation_reads_current_state_not_buffer() {
    // w0 -NOT-> w1 -NOT-> w2; one tick only moves one gate's worth.
    let mut wires = vec![wire(true), wire(false), wire(false)];
    let gates = [gate(GateKind::Not, 0, 1), gate(GateKind::Not, 1, 2)];
    let _ = run(&gates, &mut wires, 1);
    assert_eq!(wires[1].state, Level::High);
    assert_eq!(wires[2].state, Level::High);
    let _ = run(&gates, &mut wires, 1);
    assert_eq!(wires[2].state, Level::Low);
}

#[test]
fn multiple_drivers_combine_as_or() {
    let mut wires = vec![wire(true), wire(true), wire(false)];
    wires[1].state = Level::High;
    let forward = [gate(GateKind::Diode, 0, 2), gate(GateKind::Diode, 1, 2)];
    let backward = [gate(GateKind::Diode, 1, 2), gate(GateKind::Diode, 0, 2)];

    let mut a = wires.clone();
    let _ = run(&forward, &mut a, 1);
    let _ = run(&backward, &mut wires, 1);
    assert_eq!(a[2].state, Level::High);
    assert_eq!(wires[2].state, Level::High);
}

#[test]
fn touchable_wires_are_never_written() {
    let mut wires = vec![wire(true), wire(true)];
    let _ = run(&[gate(GateKind::Not, 0, 1)], &mut wires, 3);
    assert_eq!(wires[1].state, Level::Low);
}

#[test]
fn driven_wire_falls_when_no_gate_raises_it() {
    let mut wires = vec![wire(true), wire(false)];
    wires[1].state = Level::High;
    let _ = run(&[gate(GateKind::Diode, 0, 1)], &mut wires, 1);
    assert_eq!(wires[1].state, Level::Low);
}

#[test]
fn unlinked_and_out_of_range_gates_are_skipped() {
    let mut wires = vec![wire(false)];
    let mut inert = Gate::new(PixelCoord::new(0, 0), Direction::Right, GateKind::Not);
    inert.output_wire = Some(WireId(0));
    let dangling = gate(GateKind::Not, 7, 0);
    let activations = engine::evaluate_gates(&[inert, dangling], &mut wires);
    assert_eq!(activations, 0);
    assert_eq!(wires[0].state_buffer(), Level::Low);
}

#[test]
fn phases_publish_only_on_swap() {
    let mut wires = vec![wire(true), wire(false)];
    let gates = [gate(GateKind::Not, 0, 1)];
    engine::clear_buffers(&mut wires);
    assert_eq!(engine::evaluate_gates(&gates, &mut wires), 1);
    assert_eq!(wires[1].state_buffer(), Level::High);
    assert_eq!(wires[1].state, Level::Low);
    engine::swap_buffers(&mut wires);
    assert_eq!(wires[1].state, Level::High);
}

#[test]
fn engine_returns_to_idle_and_counts() {
    let mut wires = vec![wire(true), wire(false)];
    let gates = [gate(GateKind::Not, 0, 1)];
    let mut engine = SimulationEngine::new(true);
    let mut stats = SimStats::default();
    engine.step(&gates, &mut wires, 4, &mut stats);
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(stats.ticks, 4);
    assert_eq!(stats.gate_activations, 4);
}

#[test]
fn zero_ticks_change_nothing() {
    let mut wires = vec![wire(true), wire(false)];
    let stats = run(&[gate(GateKind::Not, 0, 1)], &mut wires, 0);
    assert_eq!(stats.ticks, 0);
    assert_eq!(wires[1].state, Level::Low);
}
