//! Error type for the color-match kernel.
//!
//! Every kernel operation is a pure computation, so failures are limited to
//! bad arguments ([`KernelError::InvalidInput`]) and sampling positions that
//! fall outside the raster ([`KernelError::OutOfBounds`]).

use thiserror::Error;

/// Unified error type for the color-match public API.
///
/// # Example
///
/// ```
/// use color_match::{closest, ColorMetric, KernelError, Rgb};
///
/// let result = closest(Rgb::from_u8(1, 2, 3), &[], &ColorMetric::Redmean);
/// assert!(matches!(result, Err(KernelError::InvalidInput(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// An argument was rejected (negative radius, empty palette, unknown key,
    /// malformed color string)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The sampling center lies outside the raster
    #[error("position ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

impl KernelError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        KernelError::InvalidInput(msg.into())
    }
}
