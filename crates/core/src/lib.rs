#![deny(unsafe_code)]
//! Color conversion and gradient interpolation engine.
//!
//! Provides color types (`Srgb`, `LinearRgb`, `OkLab`, `OkLch`) with pure
//! conversions between them, the immutable [`ColorValue`], two-stop gradient
//! interpolation in RGB, linear RGB, OKLab, or OKLCh, and random colors
//! drawn in OKLCh from an injected [`UniformSource`].

pub mod color;
pub mod error;
pub mod interpolate;
pub mod prng;
pub mod random;
pub mod request;
pub mod value;

pub use color::{LinearRgb, OkLab, OkLch, Srgb};
pub use error::ColorError;
pub use interpolate::{interpolate, interpolate_hex, ColorSpace, Scale};
pub use prng::{UniformSource, Xorshift64};
pub use random::{companion_pair, random_color, rotate_hue, rotate_hue_default};
pub use request::GradientRequest;
pub use value::ColorValue;
