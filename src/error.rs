//! Error types for the resnap-cleanup crate.

/// Errors that can occur while cleaning a screenshot.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred during image decoding or encoding.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// No non-white pixels remained after the chrome was erased, so the
    /// content crop is undefined.
    #[error("image is entirely white after chrome removal; nothing to crop")]
    BlankImage,

    /// The output format cannot carry the alpha channel the cleanup
    /// produces.
    #[error("output format does not support transparency: {0}")]
    UnsupportedFormat(String),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
