use color_match::KernelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickError {
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Color kernel error: {0}")]
    Kernel(#[from] KernelError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid point {0:?}, expected x,y")]
    InvalidPoint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unsupported image format: {0} (only PNG is supported)")]
    UnsupportedFormat(String),

    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Image has no pixels")]
    Empty,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
