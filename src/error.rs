//! Error types for icon rendering and font loading

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering or saving an icon
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid icon size: {0}")]
    InvalidSize(u32),

    #[error("Failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Errors raised while loading a font candidate
///
/// These never leave the font probing loop.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Font file not found")]
    NotFound,

    #[error("Failed to read font: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid font data: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),
}
