//! Deterministic pseudo-random number generation.
//!
//! Generation never threads one random stream through many records.
//! Instead each unit of work (a profile, a record, an email) builds a fresh
//! [`SplitMix64`] from a derived seed and drops it afterwards, which keeps
//! every derivation a pure function of its key.
//!
//! Callers only depend on the narrow [`RecordRng`] capability set, which is
//! implemented for every [`rand::RngCore`], so any rand generator can stand
//! in for `SplitMix64` in tests.

use rand::{RngCore, SeedableRng};

/// Increment added to the state on every draw (the 64-bit golden ratio).
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Draws used by the generator: uniform `u64` (from [`RngCore`]), unit
/// interval floats and bounded indices.
pub trait RecordRng: RngCore {
    /// Uniform float in `[0, 1)` built from the top 53 bits of a draw.
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// `floor(next_unit() * n)`, always `< n` for `n > 0`. Returns 0 for `n == 0`.
    #[inline]
    fn next_below(&mut self, n: usize) -> usize {
        let index = (self.next_unit() * n as f64) as usize;
        index.min(n.saturating_sub(1))
    }

    /// `true` with probability `p`: draws once and compares against `p`.
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }
}

impl<R: RngCore + ?Sized> RecordRng for R {}

/// SplitMix64 generator: a single 64-bit state advanced by [`GOLDEN_GAMMA`]
/// and passed through two xor-shift/multiply rounds.
///
/// This PRNG is NOT cryptographically secure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator whose state is exactly `seed`.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Current state.
    pub const fn state(&self) -> u64 {
        self.state
    }
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    /// Unlike the default, the state is the seed itself, so
    /// `seed_from_u64(s)` and `SplitMix64::new(s)` are interchangeable.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
