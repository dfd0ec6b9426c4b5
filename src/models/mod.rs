pub mod config;
pub mod report;

pub use config::{AppConfig, PickSettings};
pub use report::{round_fixed, MatchReport, PickReport, RectReport};
