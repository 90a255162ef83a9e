//! Gradient interpolation between two colors.
//!
//! A [`Scale`] blends two [`ColorValue`]s in one of four coordinate systems.
//! [`interpolate`] takes `n` evenly spaced samples from a scale, endpoints
//! included. In OKLCh the hue travels the shorter way around the wheel.

use crate::color::{linear_to_srgb, normalize_hue, LinearRgb, OkLab, OkLch, Srgb};
use crate::error::ColorError;
use crate::value::ColorValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Chroma below which an endpoint's hue is ignored when blending in OKLCh.
pub const ACHROMATIC_HUE_EPSILON: f64 = 1e-4;

/// Coordinate system a gradient is blended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSpace {
    /// Gamma-encoded sRGB channels.
    Rgb,
    /// Linear-light RGB channels.
    #[serde(alias = "lrgb")]
    LinearRgb,
    Oklab,
    /// OKLCh with shortest-arc hue.
    Oklch,
}

impl ColorSpace {
    /// Every space, in display order.
    pub const ALL: [ColorSpace; 4] = [
        ColorSpace::Rgb,
        ColorSpace::LinearRgb,
        ColorSpace::Oklab,
        ColorSpace::Oklch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::LinearRgb => "linear-rgb",
            ColorSpace::Oklab => "oklab",
            ColorSpace::Oklch => "oklch",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorSpace::Rgb),
            "linear-rgb" | "lrgb" => Ok(ColorSpace::LinearRgb),
            "oklab" => Ok(ColorSpace::Oklab),
            "oklch" => Ok(ColorSpace::Oklch),
            _ => Err(ColorError::UnknownColorSpace(s.to_string())),
        }
    }
}

/// A continuous two-stop gradient.
///
/// `at(0.0)` is the start color and `at(1.0)` the end color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    start: ColorValue,
    end: ColorValue,
    space: ColorSpace,
}

impl Scale {
    pub fn new(start: ColorValue, end: ColorValue, space: ColorSpace) -> Self {
        Self { start, end, space }
    }

    pub fn start(&self) -> ColorValue {
        self.start
    }

    pub fn end(&self) -> ColorValue {
        self.end
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Samples the gradient at `t`, clamped to [0, 1]. NaN samples the start.
    pub fn at(&self, t: f64) -> ColorValue {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self.space {
            ColorSpace::Rgb => {
                // Unclamped encoding so out-of-gamut endpoints survive the trip.
                let a = linear_to_srgb(self.start.linear_rgb());
                let b = linear_to_srgb(self.end.linear_rgb());
                ColorValue::from_srgb(Srgb {
                    r: lerp(a.r, b.r, t),
                    g: lerp(a.g, b.g, t),
                    b: lerp(a.b, b.b, t),
                })
            }
            ColorSpace::LinearRgb => {
                let a = self.start.linear_rgb();
                let b = self.end.linear_rgb();
                ColorValue::from_linear_rgb(LinearRgb {
                    r: lerp(a.r, b.r, t),
                    g: lerp(a.g, b.g, t),
                    b: lerp(a.b, b.b, t),
                })
            }
            ColorSpace::Oklab => {
                let a = self.start.oklab();
                let b = self.end.oklab();
                ColorValue::from_oklab(OkLab {
                    l: lerp(a.l, b.l, t),
                    a: lerp(a.a, b.a, t),
                    b: lerp(a.b, b.b, t),
                })
            }
            ColorSpace::Oklch => {
                let a = self.start.oklch();
                let b = self.end.oklch();
                let (h0, h1) = hue_endpoints(a, b);
                ColorValue::from_oklch(OkLch {
                    l: lerp(a.l, b.l, t),
                    c: lerp(a.c, b.c, t),
                    h: interpolate_hue(h0, h1, t),
                })
            }
        }
    }

    /// `n` evenly spaced samples, endpoints included. `n == 1` yields just
    /// the start color.
    pub fn colors(&self, n: usize) -> Result<Vec<ColorValue>, ColorError> {
        match n {
            0 => Err(ColorError::InvalidSampleCount(n)),
            1 => Ok(vec![self.start]),
            _ => {
                let last = (n - 1) as f64;
                Ok((0..n).map(|k| self.at(k as f64 / last)).collect())
            }
        }
    }
}

/// Produces `n` colors evenly spaced from `start` to `end` in `space`.
///
/// Fails with `InvalidSampleCount` when `n` is 0. Pure: the same arguments
/// always give a bit-identical sequence.
pub fn interpolate(
    start: ColorValue,
    end: ColorValue,
    space: ColorSpace,
    n: usize,
) -> Result<Vec<ColorValue>, ColorError> {
    debug!(%start, %end, %space, samples = n, "interpolating");
    Scale::new(start, end, space).colors(n)
}

/// [`interpolate`] for hex string endpoints.
pub fn interpolate_hex(
    start: &str,
    end: &str,
    space: ColorSpace,
    n: usize,
) -> Result<Vec<ColorValue>, ColorError> {
    interpolate(ColorValue::from_hex(start)?, ColorValue::from_hex(end)?, space, n)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Picks the hues to blend between. An achromatic endpoint borrows the
/// other endpoint's hue so the blend has zero hue delta; when both are
/// achromatic the start hue is held.
fn hue_endpoints(a: OkLch, b: OkLch) -> (f64, f64) {
    let a_gray = a.c < ACHROMATIC_HUE_EPSILON;
    let b_gray = b.c < ACHROMATIC_HUE_EPSILON;
    match (a_gray, b_gray) {
        (false, false) => (a.h, b.h),
        (true, false) => (b.h, b.h),
        (_, true) => (a.h, a.h),
    }
}

/// Signed shorter-arc distance from `h0` to `h1`, in (-180, 180].
pub fn hue_delta(h0: f64, h1: f64) -> f64 {
    match h1 - h0 {
        d if d > 180.0 => d - 360.0,
        d if d <= -180.0 => d + 360.0,
        d => d,
    }
}

/// Blends two hues along the shorter arc; result in [0, 360).
fn interpolate_hue(h0: f64, h1: f64, t: f64) -> f64 {
    normalize_hue(h0 + t * hue_delta(h0, h1))
}
