//! Random Generator Core - Rust Engine
//!
//! Deterministic, reseedable pseudo-random number generator with
//! inspectable and restorable state.
//!
//! # Architecture
//!
//! - **rng**: Seeding, xorshift64* draws, Box–Muller normals, state text
//! - **checkpoint**: Snapshot/restore of a generator mid-stream
//! - **config**: JSON configuration for building generators
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, bit for bit
//! 2. Seeding never leaves a zero working state
//! 3. Every cached normal sample is handed out exactly once
//!
//! Generators are plain values owned by their caller; there is no global
//! instance and no internal locking.

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, GeneratorSnapshot};
pub use config::{ConfigError, GeneratorConfig, SeedConfig};
pub use rng::{RandomGenerator, Seed, StateParseError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn random_generator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyRandomGenerator>()?;
    Ok(())
}
