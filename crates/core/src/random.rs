//! Random colors sampled in OKLCh.
//!
//! Uniform sRGB sampling over-represents muddy, low-chroma colors. Sampling
//! lightness, chroma, and hue directly in OKLCh instead gives colors that
//! read as evenly spread. Entropy comes from a caller-supplied
//! [`UniformSource`], so a fixed seed reproduces the same colors.

use crate::color::OkLch;
use crate::prng::UniformSource;
use crate::value::ColorValue;
use tracing::trace;

/// Lightness of generated colors; readable on both light and dark backgrounds.
pub const RANDOM_LIGHTNESS: f64 = 0.7;
/// Lower chroma bound for [`random_color`].
pub const MIN_RANDOM_CHROMA: f64 = 0.1;
/// Upper chroma bound for [`random_color`].
pub const MAX_RANDOM_CHROMA: f64 = 0.5;
/// Default smallest hue rotation for [`rotate_hue_default`].
pub const DEFAULT_MIN_ROTATION: f64 = 120.0;
/// Default largest hue rotation for [`rotate_hue_default`].
pub const DEFAULT_MAX_ROTATION: f64 = 240.0;

/// A random color at L = 0.7 with chroma in [0.1, 0.5) and any hue.
///
/// High-chroma draws may fall outside the sRGB gamut; they keep their OKLCh
/// coordinates and are clamped only when viewed as sRGB.
pub fn random_color<R: UniformSource + ?Sized>(rng: &mut R) -> ColorValue {
    let c = rng.next_range(MIN_RANDOM_CHROMA, MAX_RANDOM_CHROMA);
    let h = rng.next_range(0.0, 360.0);
    trace!(c, h, "random color");
    ColorValue::from_oklch(OkLch::new(RANDOM_LIGHTNESS, c, h))
}

/// Rotates `color`'s hue by a random offset in [min_deg, max_deg).
///
/// Lightness and chroma are kept. The resulting hue is wrapped into [0, 360).
///
/// An achromatic seed (chroma below
/// [`ACHROMATIC_EPSILON`](crate::color::ACHROMATIC_EPSILON)) has no hue to
/// turn, so it comes back unchanged and reads back with hue 0. The draw is
/// still consumed.
pub fn rotate_hue<R: UniformSource + ?Sized>(
    color: ColorValue,
    min_deg: f64,
    max_deg: f64,
    rng: &mut R,
) -> ColorValue {
    let lch = color.oklch();
    let offset = rng.next_range(min_deg, max_deg);
    trace!(from = lch.h, offset, "rotating hue");
    ColorValue::from_oklch(OkLch::new(lch.l, lch.c, lch.h + offset))
}

/// [`rotate_hue`] with the 120..240 degree window.
pub fn rotate_hue_default<R: UniformSource + ?Sized>(
    color: ColorValue,
    rng: &mut R,
) -> ColorValue {
    rotate_hue(color, DEFAULT_MIN_ROTATION, DEFAULT_MAX_ROTATION, rng)
}

/// A random color and a hue-rotated companion, ready to use as two gradient stops.
pub fn companion_pair<R: UniformSource + ?Sized>(rng: &mut R) -> (ColorValue, ColorValue) {
    let seed = random_color(rng);
    let companion = rotate_hue_default(seed, rng);
    (seed, companion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::OkLab;
    use crate::interpolate::hue_delta;
    use crate::prng::Xorshift64;

    const EPSILON: f64 = 1e-9;

    /// Replays a fixed list of draws, cycling when exhausted.
    struct FixedSequence {
        values: Vec<f64>,
        next: usize,
    }

    impl FixedSequence {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl UniformSource for FixedSequence {
        fn next_f64(&mut self) -> f64 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }

    /// Clockwise rotation from `from` to `to`, in [0, 360).
    fn rotation(from: f64, to: f64) -> f64 {
        (to - from).rem_euclid(360.0)
    }

    #[test]
    fn random_color_uses_lower_bounds_for_zero_draws() {
        let mut rng = FixedSequence::new(&[0.0]);
        let lch = random_color(&mut rng).oklch();
        assert!((lch.l - RANDOM_LIGHTNESS).abs() < EPSILON);
        assert!((lch.c - MIN_RANDOM_CHROMA).abs() < EPSILON);
        assert!(lch.h.abs() < 1e-6 || (lch.h - 360.0).abs() < 1e-6, "h: {}", lch.h);
    }

    #[test]
    fn random_color_maps_draws_linearly() {
        let mut rng = FixedSequence::new(&[0.5, 0.25]);
        let lch = random_color(&mut rng).oklch();
        assert!((lch.c - 0.3).abs() < EPSILON, "c: {}", lch.c);
        assert!((lch.h - 90.0).abs() < 1e-6, "h: {}", lch.h);
    }

    #[test]
    fn random_color_stays_in_bounds() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..10_000 {
            let lch = random_color(&mut rng).oklch();
            assert!((lch.l - RANDOM_LIGHTNESS).abs() < EPSILON);
            assert!(
                lch.c >= MIN_RANDOM_CHROMA - EPSILON && lch.c < MAX_RANDOM_CHROMA + EPSILON,
                "chroma {}",
                lch.c
            );
            assert!(lch.h >= 0.0 && lch.h < 360.0, "hue {}", lch.h);
        }
    }

    #[test]
    fn random_color_is_reproducible_from_seed() {
        let mut a = Xorshift64::new(2024);
        let mut b = Xorshift64::new(2024);
        for _ in 0..100 {
            assert_eq!(random_color(&mut a), random_color(&mut b));
        }
    }

    #[test]
    fn rotate_hue_uses_window_edges() {
        let seed = ColorValue::from_oklch(OkLch::new(0.6, 0.2, 300.0));

        let low = rotate_hue_default(seed, &mut FixedSequence::new(&[0.0])).oklch();
        assert!((low.h - 60.0).abs() < 1e-6, "h: {}", low.h);

        let mid = rotate_hue_default(seed, &mut FixedSequence::new(&[0.5])).oklch();
        assert!((mid.h - 120.0).abs() < 1e-6, "h: {}", mid.h);
    }

    #[test]
    fn rotate_hue_respects_custom_window() {
        let seed = ColorValue::from_oklch(OkLch::new(0.5, 0.15, 10.0));
        let out = rotate_hue(seed, 30.0, 40.0, &mut FixedSequence::new(&[0.5])).oklch();
        assert!((out.h - 45.0).abs() < 1e-6, "h: {}", out.h);
    }

    #[test]
    fn rotate_hue_bounded_over_ten_thousand_trials() {
        let mut rng = Xorshift64::new(7);
        for trial in 0..10_000 {
            let seed = random_color(&mut rng);
            let before = seed.oklch();
            let after = rotate_hue_default(seed, &mut rng).oklch();

            let turned = rotation(before.h, after.h);
            assert!(
                (DEFAULT_MIN_ROTATION - 1e-6..=DEFAULT_MAX_ROTATION + 1e-6).contains(&turned),
                "trial {trial}: rotated {turned} degrees"
            );
            // Never lands within 120 degrees of the seed hue.
            assert!(hue_delta(before.h, after.h).abs() >= DEFAULT_MIN_ROTATION - 1e-6);
            assert!((after.l - before.l).abs() < EPSILON, "trial {trial}: L drifted");
            assert!((after.c - before.c).abs() < EPSILON, "trial {trial}: C drifted");
        }
    }

    #[test]
    fn rotate_hue_keeps_lightness_and_chroma_of_hex_seed() {
        let seed = ColorValue::from_hex("#9013fe").unwrap();
        let before = seed.oklch();
        let mut rng = Xorshift64::new(99);
        for _ in 0..100 {
            let after = rotate_hue_default(seed, &mut rng).oklch();
            assert!((after.l - before.l).abs() < EPSILON);
            assert!((after.c - before.c).abs() < EPSILON);
        }
    }

    #[test]
    fn rotating_an_achromatic_seed_is_a_no_op() {
        let gray = ColorValue::from_oklab(OkLab {
            l: 0.6,
            a: 0.0,
            b: 0.0,
        });
        let mut rng = FixedSequence::new(&[0.5, 0.0]);

        let out = rotate_hue_default(gray, &mut rng);
        assert_eq!(out, gray);
        assert_eq!(out.oklch().h, 0.0);
        // One draw was taken regardless.
        assert_eq!(rng.next, 1);
    }

    #[test]
    fn rotating_an_srgb_gray_keeps_its_hex() {
        let gray = ColorValue::from_hex("#808080").unwrap();
        let mut rng = Xorshift64::new(5);
        for _ in 0..100 {
            assert_eq!(rotate_hue_default(gray, &mut rng).to_hex(), "#808080");
        }
    }

    #[test]
    fn companion_pair_is_rotated_from_seed() {
        let mut rng = Xorshift64::new(11);
        let (seed, companion) = companion_pair(&mut rng);
        let turned = rotation(seed.oklch().h, companion.oklch().h);
        assert!((120.0 - 1e-6..=240.0 + 1e-6).contains(&turned), "{turned}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rotation_window_holds_for_any_seed(
                seed in any::<u64>(),
                l in 0.2_f64..0.9,
                c in 0.05_f64..0.4,
                h in 0.0_f64..360.0,
            ) {
                let color = ColorValue::from_oklch(OkLch::new(l, c, h));
                let mut rng = Xorshift64::new(seed);
                let out = rotate_hue_default(color, &mut rng).oklch();
                let turned = rotation(color.oklch().h, out.h);
                prop_assert!(
                    (120.0 - 1e-6..=240.0 + 1e-6).contains(&turned),
                    "rotated {turned}"
                );
                prop_assert!(out.h >= 0.0 && out.h < 360.0);
            }
        }
    }
}
