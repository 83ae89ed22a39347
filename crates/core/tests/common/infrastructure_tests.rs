use super::builder::blueprint::{BlueprintBuilder, rgba_of};
use super::harness::TestContext;
use bitwidgets_core::circuit::Level;

// ─── BlueprintBuilder ──────────────────────────────────────────────────────

#[test]
fn builder_pads_short_rows_with_space() {
    let image = BlueprintBuilder::new().row("WWW").row("W").build();
    assert_eq!(image.dimensions(), (3, 2));
    assert_eq!(image.get_pixel(2, 1).0, rgba_of('.'));
    assert_eq!(image.get_pixel(0, 1).0, rgba_of('W'));
}

#[test]
fn builder_maps_markers_to_pure_channels() {
    let image = BlueprintBuilder::from_rows(&["RND"]).build();
    assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(1, 0).0, [0, 0, 255, 255]);
    assert_eq!(image.get_pixel(2, 0).0, [0, 255, 0, 255]);
}

// ─── TestContext ───────────────────────────────────────────────────────────

#[test]
fn context_toggles_by_pixel() {
    let mut ctx = TestContext::from_rows(&["WW"]);
    assert_eq!(ctx.level_at(1, 0), Level::Low);
    ctx.toggle_at(0, 0);
    assert_eq!(ctx.level_at(1, 0), Level::High);
}
