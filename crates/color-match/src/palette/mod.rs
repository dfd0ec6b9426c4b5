//! Palettes and nearest-color matching
//!
//! - [`NamedColor`]: a reference color with a name
//! - [`closest`]: linear-scan nearest match with first-in-order tie-break
//! - [`ColorMetric`] / [`ColorDistance`]: the distance used for ranking
//! - [`BuiltinPalette`]: the two static reference palettes

mod builtin;
mod matcher;
mod metric;

pub use builtin::{BuiltinPalette, COLOR_NAMES, COLOR_NAMES_SIMPLE};
pub use matcher::{closest, ColorMatch, NamedColor};
pub use metric::{
    paramspace_squared, paramspace_transform, redmean_squared, weighted_squared, ColorDistance,
    ColorMetric, PARAMSPACE_EXPONENT, WEIGHTED_CHANNEL_WEIGHTS,
};
