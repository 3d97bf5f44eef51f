//! Seedable random sources for the generators.
//!
//! `MersenneRandom` wraps a 32-bit Mersenne Twister (MT19937) so that a seed
//! typed into the page reproduces the exact same draws on every run and every
//! browser. Fresh seeds come from the `rand` crate's `SmallRng`, whose entropy
//! is sourced from `getrandom` (browser crypto API or OS).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// 2^32 as a float, used to map raw draws into [0, 1).
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Source of random numbers consumed by generators.
pub trait Random {
    /// Returns an integer in `[min, max]`.
    ///
    /// Callers must ensure `max >= min`; other inputs are not rejected and
    /// give results outside the bounds.
    fn int(&mut self, min: i64, max: i64) -> i64;

    /// Returns a float in `[min, max)`.
    fn float(&mut self, min: f64, max: f64) -> f64;

    /// Returns a float in `[0, 1)`.
    fn random(&mut self) -> f64;
}

/// Standard 32-bit Mersenne Twister (`init_genrand` / `genrand_int32`).
#[derive(Clone)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Seed the generator with `init_genrand`.
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    fn twist(&mut self) {
        for k in 0..N {
            let y = (self.state[k] & UPPER_MASK) | (self.state[(k + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            self.state[k] = self.state[(k + M) % N] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Next float in [0, 1) with 32-bit resolution (`genrand_real2`).
    #[inline(always)]
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

/// Mersenne Twister backed [`Random`] used for every generation request.
pub struct MersenneRandom {
    mt: Mt19937,
}

impl MersenneRandom {
    /// Create from a signed seed, as produced by [`crate::hash::hash`].
    /// The bits are reinterpreted as unsigned before seeding.
    pub fn new(seed: i32) -> Self {
        Self {
            mt: Mt19937::new(seed as u32),
        }
    }
}

impl Random for MersenneRandom {
    fn int(&mut self, min: i64, max: i64) -> i64 {
        let range = max.wrapping_sub(min).wrapping_add(1);
        let raw = i64::from(self.mt.next_u32());
        // An empty range leaves nothing to reduce into; fall back to `min`.
        let offset = raw.checked_rem(range).unwrap_or(0);
        min.wrapping_add(offset)
    }

    fn float(&mut self, min: f64, max: f64) -> f64 {
        min + self.mt.next_unit() * (max - min)
    }

    fn random(&mut self) -> f64 {
        self.mt.next_unit()
    }
}

/// Draw a fresh seed from system entropy (browser crypto.getRandomValues or OS).
pub fn fresh_seed() -> i32 {
    SmallRng::from_os_rng().random::<i32>()
}
