//! SimStats unit tests.

use bitwidgets_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::harness::TestContext;

#[test]
fn default_stats_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.gates, 0);
    assert_eq!(stats.wires, 0);
    assert_eq!(stats.ticks, 0);
    assert_eq!(stats.ticks_dropped, 0);
    assert_eq!(stats.gate_activations, 0);
    assert_eq!(stats.toggles, 0);
}

#[test]
fn circuit_stats_start_with_no_activity() {
    let stats = SimStats::for_circuit(3, 1, 5, 2, 4);
    assert_eq!(stats.gates, 3);
    assert_eq!(stats.inert_gates, 1);
    assert_eq!(stats.wires, 5);
    assert_eq!(stats.touchable_wires, 2);
    assert_eq!(stats.crossings, 4);
    assert_eq!(stats.ticks, 0);
    assert_eq!(stats.toggles, 0);
    assert_eq!(stats.summary_line(), "Gates: 3 | Wires: 5 | Ticks: 0");
}

#[test]
fn summary_line_format() {
    let mut ctx = TestContext::from_rows(&["WRNWRNW"]);
    ctx.step(3);
    assert_eq!(
        ctx.model.stats().summary_line(),
        "Gates: 2 | Wires: 3 | Ticks: 3"
    );
}

#[test]
fn activations_count_raised_buffers() {
    let mut ctx = TestContext::from_rows(&["WRNWRNW"]);
    // Tick 1: both gates see low inputs. Tick 2: only the first does.
    ctx.step(2);
    assert_eq!(ctx.model.stats().gate_activations, 3);
}

#[test]
fn loaded_circuit_shape_is_recorded() {
    let ctx = TestContext::from_rows(&[".C.", "WRW", ".C."]);
    let stats = ctx.model.stats();
    assert_eq!(stats.crossings, 1);
    assert_eq!(stats.wires, 2);
    assert_eq!(stats.touchable_wires, 2);
}

#[test]
fn printing_every_section_does_not_panic() {
    let stats = SimStats::default();
    stats.print();
    let sections: Vec<String> = STATS_SECTIONS.iter().map(|s| (*s).to_string()).collect();
    stats.print_sections(&sections[..1]);
    assert!(stats.tick_rate() >= 0.0);
}
