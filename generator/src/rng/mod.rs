//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm with a hashed seed for fast, reproducible
//! uniform and normal draws. The state can be exported as text and restored
//! later to resume a stream mid-way.

pub mod seed;
pub mod state;
mod xorshift;

pub use seed::{wang_hash64, Seed};
pub use state::{format_state, parse_state, StateParseError, STATE_STRING_LEN};
pub use xorshift::RandomGenerator;
