//! Reproducible description of a gradient job.
//!
//! A [`GradientRequest`] captures everything needed to recompute a gradient:
//! the two endpoint colors, the blend space, and the sample count. Hosts load
//! it from JSON or build it from command-line arguments.

use crate::error::ColorError;
use crate::interpolate::{interpolate, ColorSpace};
use crate::value::ColorValue;
use serde::{Deserialize, Serialize};

/// Start color of the default request.
pub const DEFAULT_START: &str = "#9013fe";
/// End color of the default request.
pub const DEFAULT_END: &str = "#50e3c2";
/// Sample count of the default request.
pub const DEFAULT_SAMPLES: usize = 1024;

/// Endpoint colors are kept as the caller's hex strings so a malformed file
/// still deserializes and is reported by [`GradientRequest::validate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradientRequest {
    pub start: String,
    pub end: String,
    #[serde(default = "default_space")]
    pub space: ColorSpace,
    #[serde(default = "default_samples")]
    pub samples: usize,
}

fn default_space() -> ColorSpace {
    ColorSpace::Oklch
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

impl Default for GradientRequest {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_END, default_space(), DEFAULT_SAMPLES)
    }
}

impl GradientRequest {
    pub fn new(start: &str, end: &str, space: ColorSpace, samples: usize) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            space,
            samples,
        }
    }

    /// Parses both endpoints and checks the sample count.
    pub fn validate(&self) -> Result<(ColorValue, ColorValue), ColorError> {
        if self.samples == 0 {
            return Err(ColorError::InvalidSampleCount(self.samples));
        }
        Ok((
            ColorValue::from_hex(&self.start)?,
            ColorValue::from_hex(&self.end)?,
        ))
    }

    /// Validates, then interpolates.
    pub fn run(&self) -> Result<Vec<ColorValue>, ColorError> {
        let (start, end) = self.validate()?;
        interpolate(start, end, self.space, self.samples)
    }

    /// The same request blended in a different space.
    pub fn with_space(&self, space: ColorSpace) -> Self {
        Self {
            space,
            ..self.clone()
        }
    }
}
