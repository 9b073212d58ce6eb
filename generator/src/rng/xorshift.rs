//! xorshift64* random number generator
//!
//! Fast, deterministic PRNG with a hashed seed, uniform doubles built by
//! mantissa injection, and Box–Muller normal samples served in pairs.
//!
//! # Algorithm
//!
//! Seeding runs Thomas Wang's 64-bit hash over the seed to produce the
//! working state. Each draw advances the state with a 12/25/27 xorshift and
//! multiplies by `2685821657736338717` (the xorshift* finisher). The top
//! 52 bits of the product become the mantissa of a double in `[1, 2)`, and
//! subtracting one gives a value in `[0, 1)`.
//!
//! # Determinism
//!
//! Same seed → same sequence, bit for bit, across processes and across
//! conforming implementations in other languages. This is NOT a
//! cryptographic generator.

use std::f64::consts::PI;

use tracing::debug;

use super::seed::{initial_state, Seed};
use super::state::{format_state, parse_state, write_state, StateParseError};

/// Odd multiplier applied to the xorshift output
const XORSHIFT_STAR_MULTIPLIER: u64 = 2_685_821_657_736_338_717;

/// Biased exponent of 1.0, shifted into place
const ONE_EXPONENT_BITS: u64 = 0x3FF << 52;

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use random_generator_core_rs::RandomGenerator;
///
/// let mut rng = RandomGenerator::with_seed(12345);
/// let value = rng.random();
/// let gaussian = rng.random_normal();
/// assert!((0.0..1.0).contains(&value));
/// assert!(gaussian.is_finite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RandomGenerator {
    /// Seed as supplied by the caller
    seed: Seed,

    /// Working register, advanced by every uniform draw
    state: u64,

    /// Second Box–Muller sample awaiting the next normal draw
    last_random_normal: Option<f64>,
}

impl RandomGenerator {
    /// Create a generator seeded with [`Seed::DEFAULT`]
    pub fn new() -> Self {
        Self::with_seed(Seed::DEFAULT)
    }

    /// Create a generator with an explicit seed
    ///
    /// # Example
    /// ```
    /// use random_generator_core_rs::{RandomGenerator, Seed};
    ///
    /// let a = RandomGenerator::with_seed(42);
    /// let b = RandomGenerator::with_seed(Seed::from_parts(42, 0));
    /// assert_eq!(a, b);
    /// ```
    pub fn with_seed(seed: impl Into<Seed>) -> Self {
        let seed = seed.into();
        Self {
            seed,
            state: initial_state(seed),
            last_random_normal: None,
        }
    }

    /// Rebuild a generator from already-validated parts (checkpoint restore)
    pub(crate) fn from_parts(seed: Seed, state: u64, last_random_normal: Option<f64>) -> Self {
        Self {
            seed,
            state,
            last_random_normal,
        }
    }

    /// Seed the generator was last seeded with
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Reseed the generator
    ///
    /// The working state is re-derived from the seed. A pending normal
    /// sample is NOT discarded and will be returned by the next call to
    /// [`random_normal`](Self::random_normal).
    pub fn set_seed(&mut self, seed: impl Into<Seed>) {
        let seed = seed.into();
        self.seed = seed;
        self.state = initial_state(seed);
        debug!(seed = seed.as_u64(), state = self.state, "reseeded random generator");
    }

    /// Current working state as an integer
    pub fn raw_state(&self) -> u64 {
        self.state
    }

    /// Pending cached normal sample, if any
    pub fn pending_normal(&self) -> Option<f64> {
        self.last_random_normal
    }

    /// Current working state as `0x` + 16 lowercase hex digits
    ///
    /// # Example
    /// ```
    /// use random_generator_core_rs::RandomGenerator;
    ///
    /// let rng = RandomGenerator::new();
    /// assert_eq!(rng.get_state(), "0x0c2ea4bab1fa6908");
    /// ```
    pub fn get_state(&self) -> String {
        format_state(self.state)
    }

    /// Write the state text into a bounded, NUL-terminated buffer
    ///
    /// See [`write_state`](super::state::write_state) for truncation rules.
    pub fn write_state(&self, buf: &mut [u8]) -> usize {
        write_state(self.state, buf)
    }

    /// Replace the working state with a parsed hex string
    ///
    /// The state is left untouched on error. Unlike seeding, a zero state
    /// is accepted as-is.
    ///
    /// # Example
    /// ```
    /// use random_generator_core_rs::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::new();
    /// rng.set_state("0xff").unwrap();
    /// assert_eq!(rng.raw_state(), 255);
    /// assert!(rng.set_state("0x1234zz").is_err());
    /// assert_eq!(rng.raw_state(), 255);
    /// ```
    pub fn set_state(&mut self, text: &str) -> Result<(), StateParseError> {
        match parse_state(text) {
            Ok(state) => {
                self.state = state;
                debug!(state = state, "imported random generator state");
                Ok(())
            }
            Err(err) => {
                debug!(input = text, error = %err, "rejected random generator state");
                Err(err)
            }
        }
    }

    /// Advance the state and return the raw xorshift* output
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(XORSHIFT_STAR_MULTIPLIER)
    }

    /// Generate a uniform f64 in `[0.0, 1.0)`
    ///
    /// The top 52 bits of the xorshift* output are injected as the mantissa
    /// of a double in `[1.0, 2.0)` and 1.0 is subtracted.
    pub fn random(&mut self) -> f64 {
        let r = self.next_u64();
        f64::from_bits(ONE_EXPONENT_BITS | (r >> 12)) - 1.0
    }

    /// Generate a uniform integer in `[1, max]`
    ///
    /// Computed as `floor(random() * max) + 1`.
    pub fn random_int(&mut self, max: i64) -> i64 {
        ((self.random() * max as f64).floor() as i64).saturating_add(1)
    }

    /// Generate a uniform integer in `[min, max]` (both inclusive)
    ///
    /// # Panics
    /// Panics if min > max
    ///
    /// # Example
    /// ```
    /// use random_generator_core_rs::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::new();
    /// let roll = rng.random_range(1, 6);
    /// assert!((1..=6).contains(&roll));
    /// ```
    pub fn random_range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min <= max, "min must not exceed max");

        // i128 keeps the span exact for bounds as wide as the whole i64 range
        let span = (max as i128 - min as i128 + 1) as f64;
        let offset = (self.random() * span).floor() as i128;
        (min as i128 + offset).min(max as i128) as i64
    }

    /// Generate a standard normal sample (mean 0, standard deviation 1)
    ///
    /// Samples are produced in pairs by the Box–Muller transform. The first
    /// call draws two uniforms and caches the second sample; the next call
    /// returns the cached sample without touching the state.
    pub fn random_normal(&mut self) -> f64 {
        if let Some(cached) = self.last_random_normal.take() {
            return cached;
        }

        let a = self.random();
        let b = self.random();
        // 1 - a lies in (0, 1], so the logarithm is finite
        let r = (-2.0 * (1.0 - a).ln()).sqrt();
        let phi = 2.0 * PI * (1.0 - b);
        self.last_random_normal = Some(r * phi.cos());
        r * phi.sin()
    }

    /// Generate a normal sample with the given standard deviation and mean
    pub fn random_normal_with(&mut self, sigma: f64, mu: f64) -> f64 {
        mu + self.random_normal() * sigma
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}
