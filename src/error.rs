//! Error types for the asset generator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, AssetError>;

#[derive(Error, Debug)]
pub enum AssetError {
    /// The linked `image` build cannot write a format we need.
    #[error(
        "the image backend was built without the {format} encoder. \
         Enable it with: image = {{ version = \"0.25\", features = [\"png\", \"ico\"] }}"
    )]
    MissingEncoder { format: &'static str },

    #[error("could not create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
