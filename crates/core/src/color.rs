//! Color representations and the conversions between them.
//!
//! Four plain value types (`Srgb`, `LinearRgb`, `OkLab`, `OkLch`) and the pure
//! functions that map between them. Everything is `f64`; 8-bit quantization
//! only happens at the hex / channel boundary.
//!
//! The OKLab matrices are Björn Ottosson's published constants. The inverse
//! path cubes the LMS values and applies the inverse matrices, so the
//! round trip is exact up to floating-point error.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chroma below which a hue angle is considered meaningless.
pub const ACHROMATIC_EPSILON: f64 = 1e-10;

/// sRGB color with gamma-encoded components nominally in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear-light RGB (sRGB primaries, transfer function removed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh, the polar form of OKLab. Hue is in degrees.
///
/// Values produced by this crate always have `c >= 0` and `h` in [0, 360).
/// Use [`OkLch::new`] when building one from arbitrary numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl OkLch {
    /// Builds a normalized OKLCh value.
    ///
    /// Negative chroma is folded into a 180 degree hue rotation, and the hue
    /// is wrapped into [0, 360).
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        let (c, h) = if c < 0.0 { (-c, h + 180.0) } else { (c, h) };
        OkLch {
            l,
            c,
            h: normalize_hue(h),
        }
    }
}

impl Srgb {
    /// Parses a hex color string like `"#9013fe"` or `"9013FE"` (case insensitive).
    ///
    /// Returns `ColorError::InvalidColorFormat` unless the input is exactly six
    /// hex digits after an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Srgb, ColorError> {
        let [r, g, b] = parse_hex_rgb8(hex)?;
        Ok(Srgb::from_rgb8(r, g, b))
    }

    /// Builds a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Srgb {
        Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Quantizes to 8-bit channels, clamping to [0, 1] first.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            quantize_channel(self.r),
            quantize_channel(self.g),
            quantize_channel(self.b),
        ]
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Returns a copy with every component clamped to [0, 1].
    pub fn clamped(self) -> Srgb {
        Srgb {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Parses `#rrggbb` / `rrggbb` into 8-bit channels.
pub fn parse_hex_rgb8(hex: &str) -> Result<[u8; 3], ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() {
        return Err(ColorError::InvalidColorFormat("empty color string".to_string()));
    }
    // Checked before slicing: `from_str_radix` accepts a leading '+', and
    // byte slicing would panic on multi-byte characters.
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(format!(
            "non-hex character {bad:?} in {hex:?}"
        )));
    }
    if digits.len() != 6 {
        return Err(ColorError::InvalidColorFormat(format!(
            "expected 6 hex digits, got {}",
            digits.len()
        )));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|e| {
            ColorError::InvalidColorFormat(format!("invalid channel in {hex:?}: {e}"))
        })
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Normalizes a hue angle to [0, 360). Non-finite input maps to 0.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

fn quantize_channel(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Decodes one gamma-encoded sRGB component in [0, 1] to linear light.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes one linear component with the sRGB transfer function.
fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes an 8-bit sRGB channel to linear light in [0, 1].
pub fn srgb_channel_to_linear(channel: u8) -> f64 {
    srgb_component_to_linear(channel as f64 / 255.0)
}

/// Encodes a linear-light value to an 8-bit sRGB channel, clamped and rounded.
pub fn linear_channel_to_srgb(linear: f64) -> u8 {
    quantize_channel(linear_component_to_srgb(linear.clamp(0.0, 1.0)))
}

/// Converts sRGB to linear RGB.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to sRGB. Not clamped; out-of-gamut input stays out of range.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}

/// Converts linear RGB to OKLab.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// Converts OKLab to linear RGB.
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let l_ = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let m_ = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let s_ = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Converts OKLab to OKLCh.
///
/// Hue is 0 when chroma is below [`ACHROMATIC_EPSILON`], avoiding
/// `atan2(0, 0)`.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let ch = (c.a * c.a + c.b * c.b).sqrt();
    let h = if ch < ACHROMATIC_EPSILON {
        0.0
    } else {
        normalize_hue(c.b.atan2(c.a).to_degrees())
    };
    OkLch { l: c.l, c: ch, h }
}

/// Converts OKLCh to OKLab.
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let h_rad = c.h.to_radians();
    OkLab {
        l: c.l,
        a: c.c * h_rad.cos(),
        b: c.c * h_rad.sin(),
    }
}

/// sRGB -> linear -> OKLab.
pub fn srgb_to_oklab(c: Srgb) -> OkLab {
    linear_to_oklab(srgb_to_linear(c))
}

/// OKLab -> linear -> sRGB, clamped to [0, 1].
pub fn oklab_to_srgb(c: OkLab) -> Srgb {
    linear_to_srgb(oklab_to_linear(c)).clamped()
}

/// sRGB -> OKLCh via the full chain.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(srgb_to_oklab(c))
}

/// OKLCh -> sRGB via the full chain, clamped to [0, 1].
pub fn oklch_to_srgb(c: OkLch) -> Srgb {
    oklab_to_srgb(oklch_to_oklab(c))
}

/// Parses a hex string straight to OKLCh.
pub fn parse_hex_to_oklch(hex: &str) -> Result<OkLch, ColorError> {
    Srgb::from_hex(hex).map(srgb_to_oklch)
}
