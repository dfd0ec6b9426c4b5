//! Nearest named-color lookup.

use super::metric::ColorDistance;
use crate::color::Rgb;
use crate::error::KernelError;

/// A reference color with a human-readable name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Rgb,
}

impl NamedColor {
    /// Const constructor used by the built-in palette tables.
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: Rgb::from_u8(r, g, b),
        }
    }
}

/// The palette entry chosen by [`closest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatch {
    /// Position of the entry in the palette
    pub index: usize,
    pub name: &'static str,
    pub color: Rgb,
    /// Raw squared distance reported by the metric
    pub distance: f64,
}

/// Find the palette entry nearest to `color` under `metric`.
///
/// Linear scan over the palette. Only a strictly smaller distance replaces the
/// current best, so among equally close entries the first one in palette order
/// wins.
///
/// # Errors
///
/// Returns [`KernelError::InvalidInput`] if `palette` is empty.
///
/// # Example
///
/// ```
/// use color_match::{closest, ColorMetric, NamedColor, Rgb};
///
/// let palette = [
///     NamedColor::new("red", 255, 0, 0),
///     NamedColor::new("black", 0, 0, 0),
/// ];
/// let found = closest(Rgb::from_u8(250, 5, 5), &palette, &ColorMetric::Redmean).unwrap();
///
/// assert_eq!(found.name, "red");
/// assert!(found.distance > 0.0);
/// ```
pub fn closest<D>(color: Rgb, palette: &[NamedColor], metric: &D) -> Result<ColorMatch, KernelError>
where
    D: ColorDistance + ?Sized,
{
    let (first, rest) = palette
        .split_first()
        .ok_or_else(|| KernelError::invalid("palette cannot be empty"))?;

    let mut best_idx = 0;
    let mut best_dist = metric.distance(color, first.color);

    for (i, entry) in rest.iter().enumerate() {
        let dist = metric.distance(color, entry.color);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i + 1;
        }
    }

    let winner = &palette[best_idx];
    Ok(ColorMatch {
        index: best_idx,
        name: winner.name,
        color: winner.color,
        distance: best_dist,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorMetric;

    fn red_black() -> [NamedColor; 2] {
        [
            NamedColor::new("red", 255, 0, 0),
            NamedColor::new("black", 0, 0, 0),
        ]
    }

    #[test]
    fn test_empty_palette_rejected() {
        let result = closest(Rgb::from_u8(0, 0, 0), &[], &ColorMetric::Weighted);
        assert!(matches!(result, Err(KernelError::InvalidInput(_))));
    }

    #[test]
    fn test_near_red_matches_red_under_every_metric() {
        for m in ColorMetric::ALL {
            let found = closest(Rgb::from_u8(250, 5, 5), &red_black(), &m).unwrap();
            assert_eq!(found.name, "red", "{m}");
            assert_eq!(found.index, 0);
            assert!(found.distance > 0.0, "{m} distance should be positive");
            let far = m.distance(Rgb::from_u8(250, 5, 5), Rgb::from_u8(0, 0, 0));
            assert!(found.distance < far);
        }
    }

    #[test]
    fn test_exact_hit_has_zero_distance() {
        for m in ColorMetric::ALL {
            let found = closest(Rgb::from_u8(0, 0, 0), &red_black(), &m).unwrap();
            assert_eq!(found.name, "black");
            assert_eq!(found.index, 1);
            assert_eq!(found.distance, 0.0);
            assert_eq!(found.color, Rgb::from_u8(0, 0, 0));
        }
    }

    #[test]
    fn test_ties_resolve_to_first_entry() {
        let palette = [
            NamedColor::new("navy", 0, 0, 128),
            NamedColor::new("gray", 128, 128, 128),
            NamedColor::new("grey", 128, 128, 128),
        ];
        for m in ColorMetric::ALL {
            let found = closest(Rgb::from_u8(128, 128, 128), &palette, &m).unwrap();
            assert_eq!(found.name, "gray", "{m}");
            assert_eq!(found.index, 1);
        }
    }

    #[test]
    fn test_equidistant_non_exact_tie_keeps_first() {
        let palette = [
            NamedColor::new("low", 100, 100, 100),
            NamedColor::new("high", 110, 100, 100),
        ];
        let halfway = Rgb::new(105.0, 100.0, 100.0);
        let found = closest(halfway, &palette, &ColorMetric::Weighted).unwrap();
        assert_eq!(found.name, "low");
    }

    #[test]
    fn test_custom_metric_closure() {
        // Rank purely by green: red and black both have g = 0 and tie.
        let green_only = |a: Rgb, b: Rgb| (a.g - b.g).powi(2);
        let found = closest(Rgb::from_u8(0, 0, 0), &red_black(), &green_only).unwrap();
        assert_eq!(found.name, "red");
        assert_eq!(found.distance, 0.0);
    }

    #[test]
    fn test_single_entry_palette() {
        let palette = [NamedColor::new("only", 1, 2, 3)];
        let found = closest(Rgb::from_u8(200, 200, 200), &palette, &ColorMetric::Redmean).unwrap();
        assert_eq!(found.name, "only");
        assert!(found.distance > 0.0);
    }
}
