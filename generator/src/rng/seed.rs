//! Seed values and seed-to-state hashing
//!
//! A seed is a plain 64-bit value that can also be handled as two 32-bit
//! halves. The generator never draws from the seed directly: the working
//! state is derived from it with Thomas Wang's 64-bit integer hash.

use serde::{Deserialize, Serialize};

/// 64-bit generator seed
///
/// # Example
/// ```
/// use random_generator_core_rs::Seed;
///
/// let seed = Seed::from_parts(0xCBBF7A44, 0x0139408D);
/// assert_eq!(seed, Seed::DEFAULT);
/// assert_eq!(seed.as_u64(), 0x0139_408D_CBBF_7A44);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u64);

impl Seed {
    /// Seed used by freshly constructed generators
    pub const DEFAULT: Seed = Seed::from_parts(0xCBBF_7A44, 0x0139_408D);

    /// Build a seed from its low and high 32-bit words
    pub const fn from_parts(lo: u32, hi: u32) -> Self {
        Seed(((hi as u64) << 32) | lo as u64)
    }

    /// Low 32 bits
    pub const fn lo(self) -> u32 {
        self.0 as u32
    }

    /// High 32 bits
    pub const fn hi(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Full 64-bit seed value
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::DEFAULT
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed(value)
    }
}

impl From<Seed> for u64 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

/// Thomas Wang's 64-bit avalanche hash
///
/// Every step is a bijection on `u64`, so exactly one input hashes to zero.
pub fn wang_hash64(key: u64) -> u64 {
    let mut key = (!key).wrapping_add(key << 21);
    key ^= key >> 24;
    key = key.wrapping_add(key << 3).wrapping_add(key << 8);
    key ^= key >> 14;
    key = key.wrapping_add(key << 2).wrapping_add(key << 4);
    key ^= key >> 28;
    key.wrapping_add(key << 31)
}

/// Derive a nonzero working state from a seed
///
/// Zero is a fixed point of the xorshift update, so the hash is re-applied
/// until it leaves zero.
pub(crate) fn initial_state(seed: Seed) -> u64 {
    let mut state = wang_hash64(seed.as_u64());
    while state == 0 {
        state = wang_hash64(state);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The single seed whose first hash is zero
    const ZERO_PREIMAGE: u64 = 0x7FFF_FBFF_FFDF_FFFF;

    #[test]
    fn test_parts_round_trip() {
        let seed = Seed::from_parts(0xDEAD_BEEF, 0x0123_4567);
        assert_eq!(seed.lo(), 0xDEAD_BEEF);
        assert_eq!(seed.hi(), 0x0123_4567);
        assert_eq!(Seed::from(seed.as_u64()), seed);
    }

    #[test]
    fn test_default_seed_value() {
        assert_eq!(Seed::default().as_u64(), 88172645463325252);
    }

    #[test]
    fn test_hash_of_zero() {
        assert_eq!(wang_hash64(0), 0x77CF_A1EE_F01B_CA90);
    }

    #[test]
    fn test_zero_preimage_is_rehashed() {
        assert_eq!(wang_hash64(ZERO_PREIMAGE), 0);
        assert_eq!(initial_state(Seed::from(ZERO_PREIMAGE)), wang_hash64(0));
    }

    #[test]
    fn test_default_initial_state() {
        assert_eq!(initial_state(Seed::DEFAULT), 0x0C2E_A4BA_B1FA_6908);
    }
}
