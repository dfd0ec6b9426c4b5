use color_match::{closest, sample, BuiltinPalette, Raster, RgbBuffer};
use std::io::BufRead;

use crate::error::{ImageError, PickError};
use crate::models::{MatchReport, PickReport, PickSettings};
use crate::rendering::UndoableRect;

/// Interactive picking state for one image
///
/// Owns the image so the sampling overlay can be drawn into it and taken back
/// out before the next pointer position is sampled. The image is never
/// sampled while an overlay is on it.
pub struct PickSession {
    image: RgbBuffer,
    settings: PickSettings,
    overlay: Option<UndoableRect>,
}

impl PickSession {
    pub fn new(image: RgbBuffer, settings: PickSettings) -> Result<Self, PickError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ImageError::Empty.into());
        }
        Ok(Self {
            image,
            settings,
            overlay: None,
        })
    }

    pub fn settings(&self) -> &PickSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: PickSettings) {
        self.settings = settings;
    }

    /// Current image, including the overlay if one is drawn
    pub fn image(&self) -> &RgbBuffer {
        &self.image
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Restore the pixels under the current overlay, if any
    pub fn clear_overlay(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            overlay.undo(&mut self.image);
        }
    }

    /// Sample and match the color under the pointer
    ///
    /// The position is clamped into the image first, so any pointer position
    /// yields a report. With `draw_rect` set the sampled neighborhood is
    /// outlined afterwards and stays visible until the next call.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> Result<PickReport, PickError> {
        self.clear_overlay();

        let x = clamp_coord(x, self.image.width());
        let y = clamp_coord(y, self.image.height());

        let sampled = sample(&self.image, x, y, self.settings.radius, &self.settings.weight)?;

        let matches = BuiltinPalette::ALL
            .iter()
            .map(|&palette| {
                closest(sampled.color, palette.colors(), &self.settings.metric)
                    .map(|found| MatchReport::new(palette, &found))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let report = PickReport::new(x, y, &sampled, matches);

        if self.settings.draw_rect {
            self.overlay = Some(UndoableRect::draw(
                &mut self.image,
                sampled.rect,
                self.settings.rect_color,
            ));
        }

        tracing::debug!(
            x,
            y,
            radius = self.settings.radius,
            weight = %self.settings.weight,
            metric = %self.settings.metric,
            hex = %report.hex,
            "Picked color"
        );

        Ok(report)
    }

    /// Give the image back, without any overlay still drawn on it
    pub fn into_image(mut self) -> RgbBuffer {
        self.clear_overlay();
        self.image
    }
}

fn clamp_coord(value: i32, size: u32) -> i32 {
    (value as i64).clamp(0, size as i64 - 1) as i32
}

/// Parse a pointer position written as `x,y`
pub fn parse_point(text: &str) -> Result<(i32, i32), PickError> {
    let invalid = || PickError::InvalidPoint(text.to_string());

    let (x, y) = text.trim().split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
    let y = y.trim().parse::<i32>().map_err(|_| invalid())?;
    Ok((x, y))
}

/// Read one `x,y` point per line, skipping blank lines
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<(i32, i32)>, PickError> {
    let mut points = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        points.push(parse_point(&line)?);
    }
    Ok(points)
}
