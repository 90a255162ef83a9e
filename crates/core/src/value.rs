//! [`ColorValue`]: one immutable color, viewable in every supported space.

use crate::color::{
    linear_to_oklab, oklab_to_linear, oklab_to_oklch, oklab_to_srgb, oklch_to_oklab,
    srgb_to_oklab, LinearRgb, OkLab, OkLch, Srgb,
};
use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A single color.
///
/// Stored as OKLab; every other representation is derived on demand. Out-of-gamut
/// coordinates are kept as-is and only clamped when an sRGB view is requested,
/// so a color built from OKLCh reads back the same OKLCh.
///
/// Serializes as a `"#rrggbb"` hex string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorValue {
    lab: OkLab,
}

impl ColorValue {
    /// Parses `#rrggbb` or `rrggbb`, case insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Srgb::from_hex(hex).map(Self::from_srgb)
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb(Srgb::from_rgb8(r, g, b))
    }

    pub fn from_srgb(c: Srgb) -> Self {
        Self {
            lab: srgb_to_oklab(c),
        }
    }

    pub fn from_linear_rgb(c: LinearRgb) -> Self {
        Self {
            lab: linear_to_oklab(c),
        }
    }

    pub fn from_oklab(lab: OkLab) -> Self {
        Self { lab }
    }

    /// Builds from OKLCh, normalizing negative chroma and wrapping the hue first.
    pub fn from_oklch(c: OkLch) -> Self {
        let c = OkLch::new(c.l, c.c, c.h);
        Self {
            lab: oklch_to_oklab(c),
        }
    }

    pub fn oklab(&self) -> OkLab {
        self.lab
    }

    /// OKLCh view with `c >= 0` and `h` in [0, 360).
    pub fn oklch(&self) -> OkLch {
        oklab_to_oklch(self.lab)
    }

    /// Linear RGB view. May fall outside [0, 1] for out-of-gamut colors.
    pub fn linear_rgb(&self) -> LinearRgb {
        oklab_to_linear(self.lab)
    }

    /// Display sRGB, clamped to [0, 1].
    pub fn srgb(&self) -> Srgb {
        oklab_to_srgb(self.lab)
    }

    /// Display sRGB as 8-bit channels.
    pub fn rgb8(&self) -> [u8; 3] {
        self.srgb().to_rgb8()
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        self.srgb().to_hex()
    }

    /// True when every OKLab coordinate is within `eps` of `other`'s.
    pub fn approx_eq(&self, other: &ColorValue, eps: f64) -> bool {
        (self.lab.l - other.lab.l).abs() <= eps
            && (self.lab.a - other.lab.a).abs() <= eps
            && (self.lab.b - other.lab.b).abs() <= eps
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ColorValue::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
