use thiserror::Error;

/// Errors that can occur while exporting the board as an image
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Nothing to export: the captured canvas is empty")]
    EmptyImage,

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser download failed: {0}")]
    Browser(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
