use color_match::{ColorMetric, DistanceWeight, Rgb};
use serde::Deserialize;
use std::path::Path;

use crate::error::PickError;

/// Picker configuration loaded from a YAML file
///
/// Strategy names stay as strings here; [`AppConfig::settings`] resolves them
/// against the kernel's fixed key sets.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Neighborhood radius in pixels (0 samples a single pixel)
    #[serde(default)]
    pub radius: i32,

    /// Pixel weighting key (euclidean, euclidean2, manhattan, manhattan2, const)
    #[serde(default = "default_weight")]
    pub weight: String,

    /// Color distance key (redmean, weighted, paramspace)
    #[serde(default = "default_metric")]
    pub metric: String,

    /// Outline the sampled neighborhood on the image
    #[serde(default)]
    pub draw_rect: bool,

    /// Outline color as hex
    #[serde(default = "default_rect_color")]
    pub rect_color: String,
}

fn default_weight() -> String {
    DistanceWeight::Euclidean.key().to_string()
}

fn default_metric() -> String {
    ColorMetric::Redmean.key().to_string()
}

fn default_rect_color() -> String {
    "#ff0000".to_string()
}

/// Validated picker settings, ready to hand to the kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickSettings {
    pub radius: i32,
    pub weight: DistanceWeight,
    pub metric: ColorMetric,
    pub draw_rect: bool,
    pub rect_color: [u8; 3],
}

impl Default for PickSettings {
    fn default() -> Self {
        Self {
            radius: 0,
            weight: DistanceWeight::Euclidean,
            metric: ColorMetric::Redmean,
            draw_rect: false,
            rect_color: [255, 0, 0],
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, PickError> {
        serde_yaml::from_str(content).map_err(|e| PickError::Config(e.to_string()))
    }

    /// Load configuration from a file, falling back to defaults
    ///
    /// A missing file quietly yields defaults. An unreadable or unparsable
    /// file also yields defaults but is logged as a warning.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        radius = config.radius,
                        weight = %config.weight,
                        metric = %config.metric,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve strategy keys and colors into [`PickSettings`]
    ///
    /// Unknown keys are rejected with the kernel's `InvalidInput`. The radius
    /// is passed through unchanged; a negative value is reported by the
    /// sampler when it is used.
    pub fn settings(&self) -> Result<PickSettings, PickError> {
        let weight: DistanceWeight = self.weight.parse()?;
        let metric: ColorMetric = self.metric.parse()?;
        let rect_color: Rgb = self.rect_color.parse()?;

        Ok(PickSettings {
            radius: self.radius,
            weight,
            metric,
            draw_rect: self.draw_rect,
            rect_color: rect_color.to_bytes(),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            radius: 0,
            weight: default_weight(),
            metric: default_metric(),
            draw_rect: false,
            rect_color: default_rect_color(),
        }
    }
}
