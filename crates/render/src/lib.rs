#![deny(unsafe_code)]
//! Turns interpolated color sequences into things a page or file can show:
//! RGBA8 pixel strips, CSS `linear-gradient` values, and (feature `png`)
//! PNG snapshots with one band per gradient.

pub mod css;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use css::linear_gradient_css;
pub use pixel::{bands_to_rgba, rgba_len, strip_to_rgba};
