// src/demo/counter.rs

use thiserror::Error;

/// Errors raised by [`Counter`] updates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    /// `increment_by` was given a negative amount.
    #[error("Increment value cannot be negative")]
    NegativeIncrement,
}

/// A non-negative tally driven from the demo menu.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    count: i64,
}

impl Counter {
    /// A counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one.
    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Adds `n`.
    ///
    /// # Errors
    /// Returns [`CounterError::NegativeIncrement`] if `n` is negative; the count is unchanged.
    pub fn increment_by(&mut self, n: i64) -> Result<(), CounterError> {
        if n < 0 {
            return Err(CounterError::NegativeIncrement);
        }
        self.count += n;
        Ok(())
    }

    /// Sets the count back to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// The current value.
    pub fn count(&self) -> i64 {
        self.count
    }
}
