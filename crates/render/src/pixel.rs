//! Pure-computation RGBA8 buffers for gradient strips.
//!
//! Always available (no feature gate) so the PNG snapshot path and any
//! in-browser `ImageData` path share the same conversion.

use huepath_core::{ColorError, ColorValue};

/// Index of the stop shown in pixel column `x` of a `width`-wide strip.
///
/// The first column shows the first stop and the last column the last stop;
/// columns in between pick the nearest evenly spaced stop.
pub fn stop_for_column(x: usize, width: usize, stops: usize) -> usize {
    if width <= 1 || stops <= 1 {
        return 0;
    }
    let pos = x.min(width - 1) as f64 * (stops - 1) as f64 / (width - 1) as f64;
    (pos.round() as usize).min(stops - 1)
}

/// Byte length of a `width` x `height` RGBA8 buffer.
///
/// Returns `ColorError::Io` if the size does not fit in `usize`.
pub fn rgba_len(width: usize, height: usize) -> Result<usize, ColorError> {
    width
        .checked_mul(height)
        .and_then(|px| px.checked_mul(4))
        .ok_or_else(|| ColorError::Io(format!("{width}x{height} RGBA buffer overflows usize")))
}

fn alloc_rgba(len: usize) -> Result<Vec<u8>, ColorError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|e| ColorError::Io(format!("cannot allocate {len} byte RGBA buffer: {e}")))?;
    Ok(buf)
}

/// Renders one horizontal gradient strip as RGBA8, `width * height * 4` bytes.
///
/// Returns `ColorError::InvalidSampleCount` if `stops` is empty, and
/// `ColorError::Io` if the buffer size overflows or cannot be allocated.
pub fn strip_to_rgba(
    stops: &[ColorValue],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, ColorError> {
    if stops.is_empty() {
        return Err(ColorError::InvalidSampleCount(0));
    }
    let mut buf = alloc_rgba(rgba_len(width, height)?)?;
    let mut row = alloc_rgba(rgba_len(width, 1)?)?;
    row.extend((0..width).flat_map(|x| {
        let [r, g, b] = stops[stop_for_column(x, width, stops.len())].rgb8();
        [r, g, b, 255u8]
    }));
    for _ in 0..height {
        buf.extend_from_slice(&row);
    }
    Ok(buf)
}

/// Stacks several strips vertically, each `band_height` pixels tall.
pub fn bands_to_rgba(
    bands: &[Vec<ColorValue>],
    width: usize,
    band_height: usize,
) -> Result<Vec<u8>, ColorError> {
    let height = bands
        .len()
        .checked_mul(band_height)
        .ok_or_else(|| ColorError::Io("image height overflows usize".into()))?;
    let mut buf = alloc_rgba(rgba_len(width, height)?)?;
    for stops in bands {
        buf.extend(strip_to_rgba(stops, width, band_height)?);
    }
    Ok(buf)
}
