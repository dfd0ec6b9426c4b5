//! Distance-to-weight functions for neighborhood sampling.
//!
//! Each function maps a pixel offset `(dx, dy)` from the sampling center to a
//! non-negative weight. The named strategies form a closed set selected by key
//! through [`DistanceWeight::from_str`].

use std::fmt;
use std::str::FromStr;

use crate::error::KernelError;

/// Maps a pixel offset from the sampling center to a weight.
///
/// Implemented by [`DistanceWeight`] and by any `Fn(i32, i32) -> f64`, so
/// callers can plug in their own falloff:
///
/// ```
/// use color_match::WeightFn;
///
/// let center_only = |dx: i32, dy: i32| if dx == 0 && dy == 0 { 1.0 } else { 0.0 };
/// assert_eq!(center_only.weight(0, 0), 1.0);
/// assert_eq!(center_only.weight(1, 0), 0.0);
/// ```
pub trait WeightFn {
    /// Weight for the pixel at offset `(dx, dy)`. Must be `>= 0`.
    fn weight(&self, dx: i32, dy: i32) -> f64;
}

impl<F> WeightFn for F
where
    F: Fn(i32, i32) -> f64,
{
    #[inline]
    fn weight(&self, dx: i32, dy: i32) -> f64 {
        self(dx, dy)
    }
}

/// Built-in weighting strategies.
///
/// With `e = sqrt(dx² + dy²)` and `m = |dx| + |dy|`:
///
/// | Key          | Weight          |
/// |--------------|-----------------|
/// | `euclidean`  | `1 / (1 + e)`   |
/// | `euclidean2` | `1 / (1 + e²)`  |
/// | `manhattan`  | `1 / (1 + m)`   |
/// | `manhattan2` | `1 / (1 + m²)`  |
/// | `const`      | `1`             |
///
/// Every weight is strictly positive, and all but `const` strictly decrease
/// with distance from the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceWeight {
    /// Falloff by Euclidean radius.
    #[default]
    Euclidean,
    /// Falloff by squared Euclidean radius (steeper).
    Euclidean2,
    /// Falloff by Manhattan distance.
    Manhattan,
    /// Falloff by squared Manhattan distance.
    Manhattan2,
    /// Unweighted box average.
    Const,
}

impl DistanceWeight {
    /// All strategies in declaration order.
    pub const ALL: [DistanceWeight; 5] = [
        DistanceWeight::Euclidean,
        DistanceWeight::Euclidean2,
        DistanceWeight::Manhattan,
        DistanceWeight::Manhattan2,
        DistanceWeight::Const,
    ];

    /// Selection key for this strategy.
    pub fn key(self) -> &'static str {
        match self {
            DistanceWeight::Euclidean => "euclidean",
            DistanceWeight::Euclidean2 => "euclidean2",
            DistanceWeight::Manhattan => "manhattan",
            DistanceWeight::Manhattan2 => "manhattan2",
            DistanceWeight::Const => "const",
        }
    }
}

impl WeightFn for DistanceWeight {
    #[inline]
    fn weight(&self, dx: i32, dy: i32) -> f64 {
        let (dx, dy) = (dx as f64, dy as f64);
        match self {
            DistanceWeight::Euclidean => 1.0 / (1.0 + (dx * dx + dy * dy).sqrt()),
            DistanceWeight::Euclidean2 => 1.0 / (1.0 + dx * dx + dy * dy),
            DistanceWeight::Manhattan => 1.0 / (1.0 + dx.abs() + dy.abs()),
            DistanceWeight::Manhattan2 => {
                let m = dx.abs() + dy.abs();
                1.0 / (1.0 + m * m)
            }
            DistanceWeight::Const => 1.0,
        }
    }
}

impl fmt::Display for DistanceWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DistanceWeight {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceWeight::ALL
            .into_iter()
            .find(|w| w.key() == s)
            .ok_or_else(|| {
                KernelError::invalid(format!(
                    "unknown weight function '{s}' (expected one of: euclidean, euclidean2, manhattan, manhattan2, const)"
                ))
            })
    }
}
