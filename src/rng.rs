//! Injectable randomness.
//!
//! Both generators take their random draws through [`RandomSource`] rather
//! than an ambient RNG, so tests can script the exact sequence and assert
//! exact outputs.

use rand::Rng;

/// Source of uniform random draws in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by the thread-local `rand` generator.
#[derive(Clone, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, wrapping around when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "ScriptedRandom needs at least one value");
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
