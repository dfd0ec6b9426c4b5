//! Assertion helpers for tests.

use color_match::{BuiltinPalette, Raster, RgbBuffer};
use colorpick::models::PickReport;
use pretty_assertions::assert_eq;

/// Assert the report names `expected` as nearest entry of `palette`
pub fn assert_match(report: &PickReport, palette: BuiltinPalette, expected: &str) {
    let found = report
        .match_for(palette)
        .unwrap_or_else(|| panic!("No {palette} match in report: {report:?}"));
    assert_eq!(
        found.name, expected,
        "Expected {palette} match {expected}, got {} (distance {})",
        found.name, found.distance
    );
}

/// Assert the report carries one match per built-in palette, in order
pub fn assert_all_palettes(report: &PickReport) {
    let palettes: Vec<&str> = report.matches.iter().map(|m| m.palette).collect();
    let expected: Vec<&str> = BuiltinPalette::ALL.iter().map(|p| p.key()).collect();
    assert_eq!(palettes, expected);
}

/// Assert two images are pixel-identical
pub fn assert_same_pixels(actual: &RgbBuffer, expected: &RgbBuffer) {
    assert_eq!(
        (actual.width(), actual.height()),
        (expected.width(), expected.height()),
        "Image sizes differ"
    );
    let differing = actual
        .pixels()
        .iter()
        .zip(expected.pixels())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(differing, 0, "{differing} pixels differ");
}
