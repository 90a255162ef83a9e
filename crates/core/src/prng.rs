//! Uniform entropy sources for random color generation.
//!
//! Random generation never reaches for a global RNG; callers hand in a
//! [`UniformSource`]. [`Xorshift64`] is the stock implementation: seedable and
//! bit-reproducible across platforms.

/// A source of uniformly distributed `f64` values in [0, 1).
pub trait UniformSource {
    /// Returns the next value in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed value in [min, max).
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Xorshift64 PRNG with shifts (13, 7, 17). Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Replaces a zero seed, which is a fixed point of xorshift.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed. A seed of 0 is replaced by a
    /// fixed non-zero constant.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Seeds from the operating system's entropy via `rand`.
    #[cfg(feature = "entropy")]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl UniformSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` over 2^53, so every mantissa bit is used.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
