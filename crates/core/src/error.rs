//! Error types for the huepath color engine.

use thiserror::Error;

/// Errors produced by color parsing and gradient operations.
///
/// Conversion math itself never fails; only input validation and host-side
/// output can produce an error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex color string was empty, the wrong length, or had non-hex characters.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// A gradient was requested with fewer than one sample.
    #[error("invalid sample count {0}: at least 1 sample is required")]
    InvalidSampleCount(usize),

    /// A color space identifier was not one of the supported spaces.
    #[error("unknown color space: {0}")]
    UnknownColorSpace(String),

    /// Writing rendered output failed.
    #[error("I/O error: {0}")]
    Io(String),
}
