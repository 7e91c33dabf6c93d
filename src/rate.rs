//! Non-negative instantaneous rates (C1).

use std::fmt;

use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::time::Time;

/// A non-negative rate: expected firings per unit time.
///
/// A zero rate means the owning process cannot fire; sampling a waiting
/// time from a zero rate yields `Time::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rate(f64);

impl Rate {
    /// The rate of a process that never fires.
    pub const ZERO: Rate = Rate(0.0);

    /// Construct a rate, rejecting negative or non-finite values.
    pub fn new(value: f64) -> Result<Rate> {
        if value.is_nan() || value < 0.0 {
            Err(Error::NegativeRate(value))
        } else {
            Ok(Rate(value))
        }
    }

    /// The raw `f64` value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this rate is exactly zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Sample a waiting interval from an exponential distribution with this
    /// rate. Delegates to the random source's derivation; a zero rate
    /// yields `Time::INFINITY`.
    pub fn sample_interval(self, random: &mut dyn RandomSource) -> Time {
        random.next_exponential(self)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
