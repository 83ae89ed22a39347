//! Linker tests.

use bitwidgets_core::common::WireId;

use crate::common::harness::TestContext;

#[test]
fn not_gate_links_both_sides() {
    let ctx = TestContext::from_rows(&["WRNW"]);
    let gate = &ctx.model.gates()[0];
    assert_eq!(gate.input_wire, Some(WireId(0)));
    assert_eq!(gate.output_wire, Some(WireId(1)));
    assert!(!gate.is_inert());
    assert!(ctx.model.wires()[0].touchable);
    assert!(!ctx.model.wires()[1].touchable);
}

#[test]
fn first_neighbor_in_right_down_left_up_order_wins() {
    // Both the white wire (left) and the yellow wire (up) touch the input marker.
    let ctx = TestContext::from_rows(&[".Y..", "WRNC"]);
    let gate = &ctx.model.gates()[0];
    assert_eq!(gate.input_wire, Some(ctx.wire_at(0, 1)));
    assert_eq!(gate.output_wire, Some(ctx.wire_at(3, 1)));
    assert!(ctx.model.wires()[ctx.wire_at(1, 0).index()].touchable);
}

#[test]
fn gate_without_output_is_inert() {
    let ctx = TestContext::from_rows(&["WRN"]);
    let gate = &ctx.model.gates()[0];
    assert_eq!(gate.input_wire, Some(WireId(0)));
    assert_eq!(gate.output_wire, None);
    assert!(gate.is_inert());
    assert_eq!(ctx.model.stats().inert_gates, 1);
    assert!(ctx.model.wires()[0].touchable);
}

#[test]
fn gate_without_input_is_inert() {
    let ctx = TestContext::from_rows(&["RNW"]);
    let gate = &ctx.model.gates()[0];
    assert_eq!(gate.input_wire, None);
    assert!(gate.is_inert());
    // An inert gate still claims its output wire.
    assert!(!ctx.model.wires()[0].touchable);
}

#[test]
fn feedback_gate_reads_and_drives_one_wire() {
    let ctx = TestContext::from_rows(&[".WWW", ".RNW"]);
    assert_eq!(ctx.model.wires().len(), 1);
    let gate = &ctx.model.gates()[0];
    assert_eq!(gate.input_wire, Some(WireId(0)));
    assert_eq!(gate.output_wire, Some(WireId(0)));
    assert!(!ctx.model.wires()[0].touchable);
}

#[test]
fn stats_count_touchable_wires() {
    let ctx = TestContext::from_rows(&["WRNC", "...C", "YRDC"]);
    let stats = ctx.model.stats();
    assert_eq!(stats.gates, 2);
    assert_eq!(stats.wires, 3);
    assert_eq!(stats.touchable_wires, 2);
    assert_eq!(stats.inert_gates, 0);
}
