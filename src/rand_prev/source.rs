use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

use super::generator::DEF_MIN;

/// The single capability a random backend has to provide: a uniformly
/// distributed integer in `[0, bound)`.
///
/// `bound` must be strictly positive; a zero bound is a caller error and the
/// generator checks it before calling into the source.
pub trait UniformSource {
    /// Draw a uniformly distributed integer in `[0, bound)`
    fn next_bounded(&mut self, bound: i32) -> i32;
}

/// Fast, statistically uniform source backed by `StdRng`.
///
/// Suitable for games, demos and UI randomness.
pub struct StandardSource {
    rng: StdRng,
}

impl StandardSource {
    /// Create a new, entropy-seeded source
    pub fn new() -> Self {
        StandardSource {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a source with a fixed `seed` value
    pub fn seeded(seed: u64) -> Self {
        StandardSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StandardSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for StandardSource {
    fn next_bounded(&mut self, bound: i32) -> i32 {
        self.rng.gen_range(0..bound)
    }
}

/// Cryptographically secure source: a `u32` is read from a secure byte
/// stream and reduced into `[0, bound)` with rejection sampling, which
/// avoids the modulo bias of a naive `raw % bound`.
///
/// The final value is `min + (raw % bound) - 1`, with `min` defaulting to
/// [`DEF_MIN`] so the default configuration collapses to `[0, bound)`. The
/// `- 1` term is deliberate; [`CryptoSource::with_min`] applies the same
/// shifted reduction for non-default lower bounds.
pub struct CryptoSource<R: RngCore = OsRng> {
    rng: R,
    min: i32,
    buf: [u8; 4],
}

impl CryptoSource<OsRng> {
    /// Create a source reading from the operating system generator
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for CryptoSource<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> CryptoSource<R> {
    /// Create a source reading its bytes from the given generator
    pub fn with_rng(rng: R) -> Self {
        CryptoSource {
            rng,
            min: DEF_MIN,
            buf: [0u8; 4],
        }
    }

    /// Create a source with a custom `min` offset applied to its draws
    pub fn with_min(rng: R, min: i32) -> Self {
        CryptoSource {
            rng,
            min,
            buf: [0u8; 4],
        }
    }

    /// Read 4 bytes from the secure stream as a little-endian `u32`
    fn generate_u32(&mut self) -> u32 {
        self.rng.fill_bytes(&mut self.buf);
        u32::from_le_bytes(self.buf)
    }
}

impl<R: RngCore> UniformSource for CryptoSource<R> {
    fn next_bounded(&mut self, bound: i32) -> i32 {
        let bound = bound as u64;
        // Largest multiple of `bound` that fits in 32 bits; raw draws at or
        // past it would skew the modulo reduction and are re-drawn.
        let limit = (1u64 << 32) / bound * bound;

        let mut raw = self.generate_u32() as u64;
        while raw >= limit {
            raw = self.generate_u32() as u64;
        }

        self.min + (raw % bound) as i32 - 1
    }
}
