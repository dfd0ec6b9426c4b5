//! colorpick - weighted pixel sampling and named color matching
//!
//! Host side of the picker: PNG loading, configuration, the pick session
//! with its undoable overlay, and serializable reports. The color math lives
//! in the `color-match` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
