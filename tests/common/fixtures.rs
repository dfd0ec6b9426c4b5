//! Test fixtures and constants.

use color_match::RgbBuffer;
use colorpick::rendering::png_io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Colors used to paint fixture images
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];
    /// Close to CSS "dodgerblue" (#1e90ff)
    pub const NEAR_DODGERBLUE: [u8; 3] = [32, 142, 250];
}

/// 8x8 image: red left half, blue right half
pub fn split_image() -> RgbBuffer {
    let mut image = RgbBuffer::filled(8, 8, colors::RED);
    for y in 0..8 {
        for x in 4..8 {
            image.put_pixel(x, y, colors::BLUE);
        }
    }
    image
}

/// 5x5 black image with a single white pixel in the middle
pub fn dot_image() -> RgbBuffer {
    let mut image = RgbBuffer::filled(5, 5, colors::BLACK);
    image.put_pixel(2, 2, colors::WHITE);
    image
}

/// A PNG written to a temporary directory that lives as long as the fixture
pub struct TestImage {
    dir: TempDir,
    path: PathBuf,
}

impl TestImage {
    pub fn write(name: &str, image: &RgbBuffer) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        png_io::save_png(&path, image).expect("Failed to write fixture PNG");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path for an output file next to the fixture
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
