//! Error types for lattice-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or rasterizing geometry.
///
/// Degenerate geometry (zero-length lines, zero-area triangles) is never an
/// error; it produces minimal or empty output instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Circle radius below zero.
    #[error("Negative radius: {0}")]
    NegativeRadius(i32),

    /// Coordinate outside the configured lattice range.
    #[error("Coordinate {value} outside the range [-{limit}, {limit}]")]
    CoordinateOutOfRange {
        /// Offending coordinate value.
        value: i64,
        /// Configured absolute limit.
        limit: i64,
    },

    /// NaN or infinite real coordinate.
    #[error("Non-finite coordinate")]
    NonFiniteCoordinate,

    /// Normalizer scale that cannot be divided by.
    #[error("Invalid normalization scale: {0}")]
    InvalidScale(f32),

    /// Configuration value rejected by the builder.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}
