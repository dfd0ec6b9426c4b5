//! color-match: weighted pixel sampling and nearest named-color lookup
//!
//! This library is the computational kernel of a color picker. It answers two
//! questions for a pointer position over an image:
//!
//! 1. What color is under the pointer? [`sample`] averages a square
//!    neighborhood, weighting each pixel by its offset from the center.
//! 2. What is that color called? [`closest`] scans a palette of
//!    [`NamedColor`]s and returns the nearest entry under a [`ColorMetric`].
//!
//! Every function is pure: no state survives between calls and the only shared
//! data are the static [`BuiltinPalette`] tables.
//!
//! # Quick Start
//!
//! ```
//! use color_match::{closest, sample, BuiltinPalette, ColorMetric, DistanceWeight, RgbBuffer};
//!
//! let mut image = RgbBuffer::filled(5, 5, [250, 5, 5]);
//! image.put_pixel(4, 4, [0, 0, 0]);
//!
//! let sampled = sample(&image, 2, 2, 1, &DistanceWeight::Euclidean).unwrap();
//! let named = closest(sampled.color, BuiltinPalette::Simple.colors(), &ColorMetric::Redmean).unwrap();
//!
//! assert_eq!(named.name, "red");
//! ```
//!
//! # Selecting strategies by key
//!
//! Hosts usually receive strategy names as strings (a select box, a config
//! file, a CLI flag). Each strategy enum parses from a fixed set of keys and
//! rejects anything else with [`KernelError::InvalidInput`]:
//!
//! | Type                | Keys                                                       |
//! |---------------------|------------------------------------------------------------|
//! | [`DistanceWeight`]  | `euclidean`, `euclidean2`, `manhattan`, `manhattan2`, `const` |
//! | [`ColorMetric`]     | `redmean`, `weighted`, `paramspace`                        |
//! | [`BuiltinPalette`]  | `names`, `simple`                                          |
//!
//! ```
//! use color_match::{ColorMetric, DistanceWeight, KernelError};
//!
//! let weight: DistanceWeight = "manhattan2".parse().unwrap();
//! assert_eq!(weight, DistanceWeight::Manhattan2);
//!
//! let bad = "lab".parse::<ColorMetric>();
//! assert!(matches!(bad, Err(KernelError::InvalidInput(_))));
//! ```
//!
//! # Distances are squared
//!
//! [`ColorMatch::distance`] is the raw value reported by the metric, which is
//! a squared distance. It is meant for ranking. Callers that show a magnitude
//! to people take the square root themselves.

pub mod color;
pub mod error;
pub mod palette;
pub mod sample;


pub use color::{Raster, Rgb, RgbBuffer};
pub use error::KernelError;
pub use palette::{
    closest, BuiltinPalette, ColorDistance, ColorMatch, ColorMetric, NamedColor, COLOR_NAMES,
    COLOR_NAMES_SIMPLE,
};
pub use sample::{sample, DistanceWeight, Rect, SampledColor, WeightFn};
