//! Weighted neighborhood sampling.

use super::weight::WeightFn;
use crate::color::{Raster, Rgb};
use crate::error::KernelError;

/// Axis-aligned pixel rectangle, already clipped to the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rightmost column covered by the rectangle, saturating at `u32::MAX`.
    /// Undefined for zero width.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width.saturating_sub(1))
    }

    /// Bottom row covered by the rectangle, saturating at `u32::MAX`.
    /// Undefined for zero height.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height.saturating_sub(1))
    }
}

/// Result of [`sample`]: the averaged color plus the neighborhood it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledColor {
    /// Weighted average, channels may be fractional
    pub color: Rgb,
    /// Sampled neighborhood clipped to the image
    pub rect: Rect,
}

/// Average the square neighborhood of side `2 * radius + 1` around
/// `(center_x, center_y)`, weighting each pixel by `weight(dx, dy)`.
///
/// Pixels outside the image are skipped, not zero-filled. If every weight in
/// the neighborhood is zero the center pixel's color is returned.
///
/// # Errors
///
/// - [`KernelError::InvalidInput`] if `radius` is negative
/// - [`KernelError::OutOfBounds`] if the center is outside the image
///
/// # Example
///
/// ```
/// use color_match::{sample, DistanceWeight, Rect, Rgb, RgbBuffer};
///
/// let image = RgbBuffer::filled(3, 3, [255, 255, 255]);
/// let sampled = sample(&image, 1, 1, 1, &DistanceWeight::Const).unwrap();
///
/// assert_eq!(sampled.color, Rgb::from_u8(255, 255, 255));
/// assert_eq!(sampled.rect, Rect::new(0, 0, 3, 3));
/// ```
pub fn sample<R, W>(
    image: &R,
    center_x: i32,
    center_y: i32,
    radius: i32,
    weight: &W,
) -> Result<SampledColor, KernelError>
where
    R: Raster + ?Sized,
    W: WeightFn + ?Sized,
{
    if radius < 0 {
        return Err(KernelError::invalid(format!(
            "radius must be non-negative, got {radius}"
        )));
    }
    if !image.contains(center_x as i64, center_y as i64) {
        return Err(KernelError::OutOfBounds {
            x: center_x,
            y: center_y,
            width: image.width(),
            height: image.height(),
        });
    }

    let (cx, cy, r) = (center_x as i64, center_y as i64, radius as i64);

    // Only the clipped window is visited; offsets outside it are skipped anyway.
    let x0 = (cx - r).max(0);
    let y0 = (cy - r).max(0);
    let x1 = (cx + r).min(image.width() as i64 - 1);
    let y1 = (cy + r).min(image.height() as i64 - 1);

    let mut sum = [0.0f64; 3];
    let mut total_weight = 0.0f64;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let w = weight.weight((x - cx) as i32, (y - cy) as i32);
            if w == 0.0 {
                continue;
            }
            let c = image.pixel(x as u32, y as u32);
            sum[0] += c.r * w;
            sum[1] += c.g * w;
            sum[2] += c.b * w;
            total_weight += w;
        }
    }

    let color = if total_weight > 0.0 {
        Rgb::new(
            sum[0] / total_weight,
            sum[1] / total_weight,
            sum[2] / total_weight,
        )
    } else {
        image.pixel(center_x as u32, center_y as u32)
    };

    Ok(SampledColor {
        color,
        rect: Rect::new(
            x0 as u32,
            y0 as u32,
            (x1 - x0 + 1) as u32,
            (y1 - y0 + 1) as u32,
        ),
    })
}
