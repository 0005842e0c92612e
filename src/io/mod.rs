//! I/O layer for decoding multi-page TIFF inputs and writing PDF outputs.
//! Provides the `tiff` frame reader and the `writers` module for
//! multi-page PDF encoding.
pub mod tiff;
pub use tiff::{TiffError, TiffReader};

pub mod writers;
