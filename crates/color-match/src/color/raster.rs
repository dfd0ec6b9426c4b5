//! Read access to a 2D pixel grid.

use super::rgb::Rgb;
use crate::error::KernelError;

/// A raster image readable by `(x, y)` pixel coordinates.
///
/// Implementors guarantee that `pixel(x, y)` is valid for every
/// `x < width()` and `y < height()`.
pub trait Raster {
    /// Image width in pixels.
    fn width(&self) -> u32;

    /// Image height in pixels.
    fn height(&self) -> u32;

    /// Color of the pixel at `(x, y)`.
    fn pixel(&self, x: u32, y: u32) -> Rgb;

    /// Returns true if `(x, y)` lies inside the raster.
    #[inline]
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64
    }
}

/// Owned 8-bit RGB raster stored row-major.
///
/// # Example
///
/// ```
/// use color_match::{Raster, RgbBuffer, Rgb};
///
/// let mut image = RgbBuffer::filled(2, 2, [0, 0, 0]);
/// image.put_pixel(1, 0, [255, 0, 0]);
/// assert_eq!(image.pixel(1, 0), Rgb::from_u8(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl RgbBuffer {
    /// Wrap a row-major pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidInput`] if `pixels.len()` is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Result<Self, KernelError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(KernelError::invalid(format!(
                "pixel count {} does not match {}x{} image",
                pixels.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Raw bytes of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Flattened `RGBRGB...` bytes, as expected by 8-bit RGB encoders.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}

impl Raster for RgbBuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> Rgb {
        Rgb::from_bytes(self.get_pixel(x, y))
    }
}
