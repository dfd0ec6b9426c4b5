//! Color and raster types
//!
//! - [`Rgb`]: a color on the 0..=255 scale with fractional channels
//! - [`Raster`]: read access to an image by pixel coordinates
//! - [`RgbBuffer`]: the owned 8-bit raster used by the host

mod raster;
mod rgb;

pub use raster::{Raster, RgbBuffer};
pub use rgb::Rgb;
