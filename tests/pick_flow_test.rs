//! End-to-end picking: PNG on disk -> session -> reports and overlay output.

mod common;

use color_match::{BuiltinPalette, ColorMetric, DistanceWeight, RgbBuffer};
use colorpick::error::{ImageError, PickError};
use colorpick::models::PickSettings;
use colorpick::rendering::png_io;
use colorpick::services::{parse_point, PickSession};
use common::fixtures::{self, colors};
use common::TestImage;
use pretty_assertions::assert_eq;

fn settings(radius: i32, weight: DistanceWeight, draw_rect: bool) -> PickSettings {
    PickSettings {
        radius,
        weight,
        metric: ColorMetric::Redmean,
        draw_rect,
        rect_color: colors::WHITE,
    }
}

fn session_for(fixture: &TestImage, settings: PickSettings) -> PickSession {
    let image = png_io::load_png(fixture.path()).expect("Fixture should load");
    PickSession::new(image, settings).expect("Fixture is not empty")
}

#[test]
fn test_pick_from_png_file() {
    let fixture = TestImage::write("split.png", &fixtures::split_image());
    let mut session = session_for(&fixture, settings(0, DistanceWeight::Euclidean, false));

    let report = session.pointer_move(1, 1).unwrap();
    assert_eq!(report.rgb, colors::RED);
    common::assert_all_palettes(&report);
    common::assert_match(&report, BuiltinPalette::Names, "red");
    common::assert_match(&report, BuiltinPalette::Simple, "red");

    let report = session.pointer_move(6, 1).unwrap();
    assert_eq!(report.rgb, colors::BLUE);
    common::assert_match(&report, BuiltinPalette::Simple, "blue");
}

#[test]
fn test_near_color_gets_css_name() {
    let image = RgbBuffer::filled(3, 3, colors::NEAR_DODGERBLUE);
    let fixture = TestImage::write("sky.png", &image);
    let mut session = session_for(&fixture, settings(1, DistanceWeight::Euclidean, false));

    let report = session.pointer_move(1, 1).unwrap();
    common::assert_match(&report, BuiltinPalette::Names, "dodgerblue");
    assert!(report.match_for(BuiltinPalette::Names).unwrap().distance > 0.0);
}

#[test]
fn test_weight_changes_sampled_value() {
    let fixture = TestImage::write("dot.png", &fixtures::dot_image());

    let pick = |weight| {
        let mut session = session_for(&fixture, settings(1, weight, false));
        session.pointer_move(2, 2).unwrap()
    };

    // One white pixel among eight black ones
    assert_eq!(pick(DistanceWeight::Const).rgb, [28, 28, 28]);
    assert_eq!(pick(DistanceWeight::Euclidean).rgb, [55, 55, 55]);
    assert_eq!(pick(DistanceWeight::Manhattan2).rgb, [67, 67, 67]);

    // 55 is still nearest black; at 67 the dark-red brown (165,42,42) is
    // already closer under redmean than both black and gray
    common::assert_match(&pick(DistanceWeight::Euclidean), BuiltinPalette::Simple, "black");
    common::assert_match(&pick(DistanceWeight::Manhattan2), BuiltinPalette::Simple, "brown");

    // A brighter center crosses the black/gray midpoint
    let bright = {
        let mut image = RgbBuffer::filled(5, 5, [60, 60, 60]);
        image.put_pixel(2, 2, colors::WHITE);
        TestImage::write("bright.png", &image)
    };
    let mut session = session_for(&bright, settings(1, DistanceWeight::Manhattan2, false));
    let report = session.pointer_move(2, 2).unwrap();
    assert_eq!(report.rgb, [111, 111, 111]);
    common::assert_match(&report, BuiltinPalette::Simple, "gray");
}

#[test]
fn test_edge_pick_reports_clipped_rect() {
    let fixture = TestImage::write("split.png", &fixtures::split_image());
    let mut session = session_for(&fixture, settings(2, DistanceWeight::Const, false));

    let report = session.pointer_move(-5, 0).unwrap();
    assert_eq!((report.x, report.y), (0, 0));
    assert_eq!(
        (report.rect.x, report.rect.y, report.rect.width, report.rect.height),
        (0, 0, 3, 3)
    );
    assert_eq!(report.rgb, colors::RED);
}

#[test]
fn test_overlay_written_and_undone() {
    let original = fixtures::split_image();
    let fixture = TestImage::write("split.png", &original);
    let mut session = session_for(&fixture, settings(1, DistanceWeight::Euclidean, true));

    session.pointer_move(2, 2).unwrap();
    let overlay_path = fixture.sibling("overlay.png");
    png_io::save_png(&overlay_path, session.image()).unwrap();

    let with_outline = png_io::load_png(&overlay_path).unwrap();
    assert_eq!(with_outline.get_pixel(1, 1), colors::WHITE);
    assert_eq!(with_outline.get_pixel(3, 3), colors::WHITE);
    assert_eq!(with_outline.get_pixel(2, 2), colors::RED);

    common::assert_same_pixels(&session.into_image(), &original);
}

#[test]
fn test_trace_path_is_unaffected_by_overlay() {
    let fixture = TestImage::write("split.png", &fixtures::split_image());

    let path: Vec<(i32, i32)> = ["0,0", "3,3", "4,3", "7,7", "3,3"]
        .iter()
        .map(|p| parse_point(p).unwrap())
        .collect();

    let trace = |draw_rect| {
        let mut session = session_for(&fixture, settings(1, DistanceWeight::Euclidean, draw_rect));
        path.iter()
            .map(|&(x, y)| session.pointer_move(x, y).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(trace(true), trace(false));
}

#[test]
fn test_non_png_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.jpeg");
    std::fs::write(&path, b"not an image").unwrap();

    let result = png_io::load_png(&path);
    assert!(matches!(result, Err(ImageError::UnsupportedFormat(_))));
}

#[test]
fn test_corrupt_png_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nnope").unwrap();

    let error: PickError = png_io::load_png(&path).unwrap_err().into();
    assert!(error.to_string().starts_with("Image error: PNG decode error"));
}
