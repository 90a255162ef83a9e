//! PNG snapshots of gradient bands.
//!
//! Feature-gated behind `png` (default on) so WASM builds can depend on this
//! crate without pulling in `image`. The pixel conversion lives in
//! [`crate::pixel`].

use huepath_core::{ColorError, ColorValue};
use std::path::Path;
use tracing::debug;

use crate::pixel::{bands_to_rgba, rgba_len};

/// Writes one horizontal band per stop sequence, stacked top to bottom.
///
/// Returns `ColorError::Io` if the dimensions overflow `u32` or the write
/// fails. Dimensions are checked before any pixels are allocated.
pub fn write_png(
    bands: &[Vec<ColorValue>],
    width: usize,
    band_height: usize,
    path: &Path,
) -> Result<(), ColorError> {
    let height = bands
        .len()
        .checked_mul(band_height)
        .ok_or_else(|| ColorError::Io("image height overflows".into()))?;
    let w = u32::try_from(width)
        .map_err(|_| ColorError::Io(format!("image width {width} exceeds u32")))?;
    let h = u32::try_from(height)
        .map_err(|_| ColorError::Io(format!("image height {height} exceeds u32")))?;
    rgba_len(width, height)?;
    let rgba = bands_to_rgba(bands, width, band_height)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| ColorError::Io("RGBA buffer size mismatch".into()))?;
    debug!(path = %path.display(), width = w, height = h, "writing gradient png");
    img.save(path).map_err(|e| ColorError::Io(e.to_string()))
}
