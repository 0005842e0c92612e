//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and TIFF reader errors, and provides semantic variants
//! for the two fatal conditions the batch driver distinguishes.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TIFF reader error: {0}")]
    Tiff(#[from] crate::io::tiff::TiffError),

    #[error("Input directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission to write file denied: {}", path.display())]
    PermissionDenied { path: PathBuf },
}
