use color_match::{BuiltinPalette, ColorMatch, Rect, SampledColor};
use serde::Serialize;
use std::fmt;

/// Everything shown for one pointer position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickReport {
    /// Pointer position after clamping to the image
    pub x: i32,
    pub y: i32,
    /// Sampled color rounded to whole channel values
    pub rgb: [u8; 3],
    pub hex: String,
    /// Neighborhood that produced the sample
    pub rect: RectReport,
    /// Nearest entry per built-in palette, in [`BuiltinPalette::ALL`] order
    pub matches: Vec<MatchReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RectReport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl From<Rect> for RectReport {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Nearest named color in one palette
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub palette: &'static str,
    pub name: &'static str,
    pub rgb: [u8; 3],
    pub hex: String,
    /// `sqrt` of the metric's squared distance, rounded to 2 decimals
    pub distance: f64,
}

impl MatchReport {
    pub fn new(palette: BuiltinPalette, found: &ColorMatch) -> Self {
        Self {
            palette: palette.key(),
            name: found.name,
            rgb: found.color.to_bytes(),
            hex: found.color.to_hex(),
            distance: round_fixed(found.distance.sqrt(), 2),
        }
    }
}

impl PickReport {
    pub fn new(x: i32, y: i32, sampled: &SampledColor, matches: Vec<MatchReport>) -> Self {
        Self {
            x,
            y,
            rgb: sampled.color.to_bytes(),
            hex: sampled.color.to_hex(),
            rect: sampled.rect.into(),
            matches,
        }
    }

    /// Match for the given palette, if it was computed
    pub fn match_for(&self, palette: BuiltinPalette) -> Option<&MatchReport> {
        self.matches.iter().find(|m| m.palette == palette.key())
    }
}

/// Round to a fixed number of decimal places
pub fn round_fixed(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

fn join_rgb(rgb: [u8; 3]) -> String {
    format!("{}, {}, {}", rgb[0], rgb[1], rgb[2])
}

impl fmt::Display for PickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "({}, {})  rgb({})  {}  rect {},{} {}x{}",
            self.x,
            self.y,
            join_rgb(self.rgb),
            self.hex,
            self.rect.x,
            self.rect.y,
            self.rect.width,
            self.rect.height
        )?;
        for m in &self.matches {
            writeln!(
                f,
                "  {:<7} {:<22} distance {:>7.2}  rgb({})  {}",
                format!("{}:", m.palette),
                m.name,
                m.distance,
                join_rgb(m.rgb),
                m.hex
            )?;
        }
        Ok(())
    }
}
