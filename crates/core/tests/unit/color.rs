//! Classifier tests.

use bitwidgets_core::circuit::{GateKind, Level};
use bitwidgets_core::common::PixelCoord;
use bitwidgets_core::extract::{ColorCategory, PixelGrid, WireColor, classify};
use image::{Rgba, RgbaImage};
use rstest::rstest;

#[rstest]
#[case::white(255, 255, 255, ColorCategory::Wire(WireColor::White))]
#[case::magenta(255, 0, 255, ColorCategory::Wire(WireColor::Magenta))]
#[case::yellow(255, 255, 0, ColorCategory::Wire(WireColor::Yellow))]
#[case::cyan(0, 255, 255, ColorCategory::Wire(WireColor::Cyan))]
#[case::red(255, 0, 0, ColorCategory::Crossing)]
#[case::blue(0, 0, 255, ColorCategory::GateTypeMarker(GateKind::Not))]
#[case::green(0, 255, 0, ColorCategory::GateTypeMarker(GateKind::Diode))]
#[case::black(0, 0, 0, ColorCategory::Space)]
fn canonical_colors(#[case] r: u8, #[case] g: u8, #[case] b: u8, #[case] want: ColorCategory) {
    assert_eq!(classify(r, g, b), want);
}

#[rstest]
#[case::dim_white(1, 1, 1, ColorCategory::Wire(WireColor::White))]
#[case::dark_magenta(128, 0, 7, ColorCategory::Wire(WireColor::Magenta))]
#[case::dark_red(3, 0, 0, ColorCategory::Crossing)]
#[case::navy(0, 0, 40, ColorCategory::GateTypeMarker(GateKind::Not))]
fn only_nonzero_channels_matter(
    #[case] r: u8,
    #[case] g: u8,
    #[case] b: u8,
    #[case] want: ColorCategory,
) {
    assert_eq!(classify(r, g, b), want);
}

#[test]
fn alpha_is_ignored() {
    let image = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 0]));
    let grid = PixelGrid::from_source(&image);
    assert_eq!(
        grid.get(PixelCoord::new(0, 0)),
        ColorCategory::Wire(WireColor::White)
    );
}

#[test]
fn out_of_bounds_reads_as_space() {
    let image = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
    let grid = PixelGrid::from_source(&image);
    assert_eq!(grid.get(PixelCoord::new(2, 0)), ColorCategory::Space);
    assert_eq!(grid.get(PixelCoord::new(0, 5)), ColorCategory::Space);
}

#[test]
fn low_wires_display_at_half_intensity() {
    assert_eq!(WireColor::Cyan.display_rgb(Level::High), [0, 0xFF, 0xFF]);
    assert_eq!(WireColor::Cyan.display_rgb(Level::Low), [0, 0x7F, 0x7F]);
    assert_eq!(WireColor::White.display_rgb(Level::Low), [0x7F, 0x7F, 0x7F]);
}

#[test]
fn gate_markers_round_trip_through_classifier() {
    for kind in GateKind::ALL {
        let [r, g, b] = kind.marker_rgb();
        assert_eq!(classify(r, g, b), ColorCategory::GateTypeMarker(kind));
    }
}
