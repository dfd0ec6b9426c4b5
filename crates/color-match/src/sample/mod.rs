//! Pixel sampling
//!
//! [`sample`] averages a square neighborhood around a center pixel. How much
//! each pixel counts is decided by a [`WeightFn`]; [`DistanceWeight`] holds the
//! built-in falloff strategies.

mod sampler;
mod weight;

pub use sampler::{sample, Rect, SampledColor};
pub use weight::{DistanceWeight, WeightFn};
