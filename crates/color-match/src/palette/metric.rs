//! Color distance metrics for palette ranking.
//!
//! All metrics return a *squared* distance. They are only used to order
//! palette candidates, so none of them needs to be a true metric, but each
//! returns exactly 0 for identical colors.

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::error::KernelError;

/// Per-channel weights of the `weighted` metric (R, G, B).
pub const WEIGHTED_CHANNEL_WEIGHTS: [f64; 3] = [2.0, 4.0, 3.0];

/// Exponent applied to normalised channels before `paramspace` comparison.
pub const PARAMSPACE_EXPONENT: f64 = 1.0 / 2.2;

/// Computes a squared distance between two colors.
///
/// Implemented by [`ColorMetric`] and by any `Fn(Rgb, Rgb) -> f64`.
pub trait ColorDistance {
    /// Squared distance between `a` and `b`. Must be 0 when `a == b`.
    fn distance(&self, a: Rgb, b: Rgb) -> f64;
}

impl<F> ColorDistance for F
where
    F: Fn(Rgb, Rgb) -> f64,
{
    #[inline]
    fn distance(&self, a: Rgb, b: Rgb) -> f64 {
        self(a, b)
    }
}

/// Built-in color distance metrics.
///
/// Select one by key with [`ColorMetric::from_str`]: `weighted`, `redmean`,
/// `paramspace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMetric {
    /// Euclidean squared distance with fixed channel weights
    /// ([`WEIGHTED_CHANNEL_WEIGHTS`]).
    Weighted,
    /// The "redmean" low-cost approximation of perceived difference: the red
    /// and blue weights shift with the mean red level of the two colors.
    #[default]
    Redmean,
    /// Euclidean squared distance after a gamma-like per-channel remap
    /// (see [`paramspace_transform`]).
    Paramspace,
}

impl ColorMetric {
    /// All metrics in declaration order.
    pub const ALL: [ColorMetric; 3] = [
        ColorMetric::Weighted,
        ColorMetric::Redmean,
        ColorMetric::Paramspace,
    ];

    /// Selection key for this metric.
    pub fn key(self) -> &'static str {
        match self {
            ColorMetric::Weighted => "weighted",
            ColorMetric::Redmean => "redmean",
            ColorMetric::Paramspace => "paramspace",
        }
    }
}

impl ColorDistance for ColorMetric {
    #[inline]
    fn distance(&self, a: Rgb, b: Rgb) -> f64 {
        match self {
            ColorMetric::Weighted => weighted_squared(a, b),
            ColorMetric::Redmean => redmean_squared(a, b),
            ColorMetric::Paramspace => paramspace_squared(a, b),
        }
    }
}

impl fmt::Display for ColorMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorMetric {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorMetric::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| {
                KernelError::invalid(format!(
                    "unknown color distance '{s}' (expected one of: redmean, weighted, paramspace)"
                ))
            })
    }
}

/// `2·dr² + 4·dg² + 3·db²`
#[inline]
pub fn weighted_squared(a: Rgb, b: Rgb) -> f64 {
    let [wr, wg, wb] = WEIGHTED_CHANNEL_WEIGHTS;
    let dr = a.r - b.r;
    let dg = a.g - b.g;
    let db = a.b - b.b;
    wr * dr * dr + wg * dg * dg + wb * db * db
}

/// `(2 + r̄/256)·dr² + 4·dg² + (2 + (255 - r̄)/256)·db²` with `r̄` the mean red.
#[inline]
pub fn redmean_squared(a: Rgb, b: Rgb) -> f64 {
    let r_mean = 0.5 * (a.r + b.r);
    let dr = a.r - b.r;
    let dg = a.g - b.g;
    let db = a.b - b.b;
    (2.0 + r_mean / 256.0) * dr * dr
        + 4.0 * dg * dg
        + (2.0 + (255.0 - r_mean) / 256.0) * db * db
}

/// Map a color into the space compared by [`ColorMetric::Paramspace`].
///
/// Each channel becomes `255 · (max(c, 0) / 255)^(1/2.2)` and is then scaled by
/// the square root of its [`WEIGHTED_CHANNEL_WEIGHTS`] entry. The curve
/// stretches dark tones, where the eye separates shades more finely.
#[inline]
pub fn paramspace_transform(c: Rgb) -> [f64; 3] {
    let remap = |v: f64, weight: f64| {
        weight.sqrt() * 255.0 * (v.max(0.0) / 255.0).powf(PARAMSPACE_EXPONENT)
    };
    let [wr, wg, wb] = WEIGHTED_CHANNEL_WEIGHTS;
    [remap(c.r, wr), remap(c.g, wg), remap(c.b, wb)]
}

/// Squared Euclidean distance between [`paramspace_transform`]ed colors.
#[inline]
pub fn paramspace_squared(a: Rgb, b: Rgb) -> f64 {
    let ta = paramspace_transform(a);
    let tb = paramspace_transform(b);
    ta.iter()
        .zip(tb.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_colors() -> Vec<Rgb> {
        vec![
            Rgb::from_u8(0, 0, 0),
            Rgb::from_u8(255, 255, 255),
            Rgb::from_u8(255, 0, 0),
            Rgb::from_u8(12, 200, 99),
            Rgb::new(127.5, 63.25, 0.125),
            Rgb::new(-4.0, 260.0, 3.0),
        ]
    }

    #[test]
    fn test_identical_colors_have_zero_distance() {
        for m in ColorMetric::ALL {
            for c in sample_colors() {
                assert_eq!(m.distance(c, c), 0.0, "{m} on {c:?}");
            }
        }
    }

    #[test]
    fn test_distances_non_negative_and_finite() {
        let colors = sample_colors();
        for m in ColorMetric::ALL {
            for &a in &colors {
                for &b in &colors {
                    let d = m.distance(a, b);
                    assert!(d.is_finite() && d >= 0.0, "{m}({a:?}, {b:?}) = {d}");
                }
            }
        }
    }

    #[test]
    fn test_weighted_known_value() {
        let d = weighted_squared(Rgb::from_u8(10, 20, 30), Rgb::from_u8(11, 22, 33));
        assert_eq!(d, 2.0 * 1.0 + 4.0 * 4.0 + 3.0 * 9.0);
    }

    #[test]
    fn test_redmean_known_value() {
        // Black vs pure red: r̄ = 127.5, only the red term contributes.
        let d = redmean_squared(Rgb::from_u8(0, 0, 0), Rgb::from_u8(255, 0, 0));
        let expected = (2.0 + 127.5 / 256.0) * 255.0 * 255.0;
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_redmean_blue_weight_depends_on_red_level() {
        // Same blue step costs more in a dark-red context than a bright-red one.
        let dark = redmean_squared(Rgb::from_u8(0, 0, 0), Rgb::from_u8(0, 0, 50));
        let bright = redmean_squared(Rgb::from_u8(255, 0, 0), Rgb::from_u8(255, 0, 50));
        assert!(dark > bright);
    }

    #[test]
    fn test_paramspace_stretches_dark_tones() {
        let dark_step = paramspace_squared(Rgb::from_u8(0, 0, 0), Rgb::from_u8(20, 20, 20));
        let light_step =
            paramspace_squared(Rgb::from_u8(220, 220, 220), Rgb::from_u8(240, 240, 240));
        assert!(dark_step > light_step);
    }

    #[test]
    fn test_paramspace_transform_endpoints() {
        let white = paramspace_transform(Rgb::from_u8(255, 255, 255));
        assert!((white[0] - 255.0 * 2f64.sqrt()).abs() < 1e-9);
        assert!((white[1] - 510.0).abs() < 1e-9);
        assert_eq!(paramspace_transform(Rgb::from_u8(0, 0, 0)), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_closure_metric() {
        let red_only = |a: Rgb, b: Rgb| (a.r - b.r).powi(2);
        assert_eq!(red_only.distance(Rgb::from_u8(3, 0, 0), Rgb::from_u8(0, 9, 9)), 9.0);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("redmean".parse::<ColorMetric>().unwrap(), ColorMetric::Redmean);
        assert_eq!("weighted".parse::<ColorMetric>().unwrap(), ColorMetric::Weighted);
        assert_eq!(
            "paramspace".parse::<ColorMetric>().unwrap(),
            ColorMetric::Paramspace
        );
        assert!(matches!(
            "cie76".parse::<ColorMetric>(),
            Err(KernelError::InvalidInput(_))
        ));
    }
}
