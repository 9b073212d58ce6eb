//! PyO3 wrapper for RandomGenerator
//!
//! Exposes the generator to Python with the same surface the scripting
//! layer offers: optional integer ranges on `random` and a scaled
//! `random_normal`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::{RandomGenerator as RustRandomGenerator, Seed};

/// Python wrapper for the Rust random generator
///
/// # Example (from Python)
///
/// ```python
/// from random_generator._core import RandomGenerator
///
/// rng = RandomGenerator()           # default seed
/// rng = RandomGenerator(12345)      # single 64-bit seed
/// rng = RandomGenerator(0xCBBF7A44, 0x0139408D)  # lo, hi words
///
/// x = rng.random()                  # [0, 1)
/// die = rng.random(6)               # 1..=6
/// n = rng.random(10, 20)            # 10..=20
/// z = rng.random_normal(2.0, 5.0)   # sigma, mu
///
/// saved = rng.get_state()
/// rng.set_state(saved)
/// ```
#[pyclass(name = "RandomGenerator")]
pub struct PyRandomGenerator {
    inner: RustRandomGenerator,
}

/// Combine the optional Python seed arguments into a seed
fn seed_from_args(first: u64, hi: Option<u32>) -> PyResult<Seed> {
    match hi {
        None => Ok(Seed::from(first)),
        Some(hi) => {
            let lo = u32::try_from(first).map_err(|_| {
                PyValueError::new_err(format!(
                    "Low seed word {} does not fit in 32 bits",
                    first
                ))
            })?;
            Ok(Seed::from_parts(lo, hi))
        }
    }
}

#[pymethods]
impl PyRandomGenerator {
    #[new]
    #[pyo3(signature = (seed=None, hi=None))]
    fn new(seed: Option<u64>, hi: Option<u32>) -> PyResult<Self> {
        let inner = match seed {
            Some(first) => RustRandomGenerator::with_seed(seed_from_args(first, hi)?),
            None => RustRandomGenerator::new(),
        };
        Ok(PyRandomGenerator { inner })
    }

    /// Get the seed as `(lo, hi)` 32-bit words
    fn get_seed(&self) -> (u32, u32) {
        let seed = self.inner.seed();
        (seed.lo(), seed.hi())
    }

    #[pyo3(signature = (seed, hi=None))]
    fn set_seed(&mut self, seed: u64, hi: Option<u32>) -> PyResult<()> {
        self.inner.set_seed(seed_from_args(seed, hi)?);
        Ok(())
    }

    /// Uniform value in [0, 1), or an integer in [1, low] / [low, high]
    #[pyo3(signature = (low=None, high=None))]
    fn random(&mut self, low: Option<i64>, high: Option<i64>) -> PyResult<f64> {
        match (low, high) {
            (None, _) => Ok(self.inner.random()),
            (Some(max), None) => Ok(self.inner.random_int(max) as f64),
            (Some(min), Some(max)) if min <= max => Ok(self.inner.random_range(min, max) as f64),
            (Some(min), Some(max)) => Err(PyValueError::new_err(format!(
                "Lower bound {} exceeds upper bound {}",
                min, max
            ))),
        }
    }

    #[pyo3(signature = (sigma=1.0, mu=0.0))]
    fn random_normal(&mut self, sigma: f64, mu: f64) -> f64 {
        self.inner.random_normal_with(sigma, mu)
    }

    fn get_state(&self) -> String {
        self.inner.get_state()
    }

    /// Restore a state string produced by `get_state`
    ///
    /// Raises ValueError on malformed input; the state is left unchanged.
    fn set_state(&mut self, state: &str) -> PyResult<()> {
        self.inner
            .set_state(state)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }
}
