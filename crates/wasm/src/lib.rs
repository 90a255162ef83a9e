#![deny(unsafe_code)]
//! WASM bindings so a web page can compute gradients without its own color math.
//!
//! Every export takes and returns hex strings. Errors surface in JS as thrown
//! `Error`s carrying the engine's message.

use huepath_core::{
    interpolate_hex, random_color as draw_color, rotate_hue_default, ColorError, ColorSpace,
    ColorValue, Xorshift64,
};
use huepath_render::linear_gradient_css;
use wasm_bindgen::prelude::*;

fn to_js(e: ColorError) -> JsError {
    JsError::new(&e.to_string())
}

fn stops(
    start: &str,
    end: &str,
    space: &str,
    samples: usize,
) -> Result<Vec<ColorValue>, ColorError> {
    interpolate_hex(start, end, space.parse::<ColorSpace>()?, samples)
}

fn hex_stops(
    start: &str,
    end: &str,
    space: &str,
    samples: usize,
) -> Result<Vec<String>, ColorError> {
    Ok(stops(start, end, space, samples)?
        .iter()
        .map(ColorValue::to_hex)
        .collect())
}

fn css_gradient(
    start: &str,
    end: &str,
    space: &str,
    samples: usize,
) -> Result<String, ColorError> {
    Ok(linear_gradient_css(&stops(start, end, space, samples)?))
}

fn rotated(hex: &str, seed: u64) -> Result<String, ColorError> {
    let color = ColorValue::from_hex(hex)?;
    Ok(rotate_hue_default(color, &mut Xorshift64::new(seed)).to_hex())
}

/// `samples` hex stops from `start` to `end` blended in `space`.
#[wasm_bindgen]
pub fn interpolate(
    start: &str,
    end: &str,
    space: &str,
    samples: usize,
) -> Result<Vec<String>, JsError> {
    hex_stops(start, end, space, samples).map_err(to_js)
}

/// A CSS `linear-gradient(...)` value for the same stops as [`interpolate`].
#[wasm_bindgen(js_name = gradientCss)]
pub fn gradient_css(
    start: &str,
    end: &str,
    space: &str,
    samples: usize,
) -> Result<String, JsError> {
    css_gradient(start, end, space, samples).map_err(to_js)
}

/// A random color from `seed`, as hex. Out-of-gamut draws are clamped.
#[wasm_bindgen(js_name = randomColor)]
pub fn random_color(seed: u64) -> String {
    draw_color(&mut Xorshift64::new(seed)).to_hex()
}

/// `hex` with its hue rotated 120-240 degrees, offset drawn from `seed`.
#[wasm_bindgen(js_name = rotateHue)]
pub fn rotate_hue(hex: &str, seed: u64) -> Result<String, JsError> {
    rotated(hex, seed).map_err(to_js)
}
