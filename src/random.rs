//! The random-source contract (§6) and a default implementation.
//!
//! The engine only needs a uniform `[0, 1)` source; everything else
//! (exponential waiting times, threshold sampling) is derived from it so
//! that swapping in a different generator changes nothing about the
//! algorithms, only the stream of numbers they consume.

use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::rate::Rate;
use crate::time::Time;

/// A reproducible source of uniform deviates.
///
/// A single instance is shared by the engine and any client-side samplers
/// so that a fixed seed and a fixed order of operations reproduce a
/// simulation bit-for-bit.
pub trait RandomSource {
    /// Draw a uniform deviate in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Draw a waiting interval from an exponential distribution with the
    /// given rate. A zero rate yields `Time::INFINITY` rather than
    /// dividing by zero.
    ///
    /// The default derivation uses inverse-CDF sampling:
    /// `-ln(1 - u) / rate`, which only needs [`next_f64`](Self::next_f64).
    fn next_exponential(&mut self, rate: Rate) -> Time {
        if rate.value() <= 0.0 {
            return Time::INFINITY;
        }
        let u = self.next_f64();
        // `u` is in [0, 1); `1.0 - u` is therefore in (0, 1], keeping ln finite.
        Time::new(-(1.0 - u).ln() / rate.value())
    }
}

/// A [`RandomSource`] backed by `rand`'s `StdRng`, seeded deterministically.
///
/// Grounded on the seeded-`StdRng` pattern used for reproducible simulation
/// environments in this domain.
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Construct a generator seeded from a fixed 64-bit seed. Same seed,
    /// same stream, every time.
    pub fn seeded(seed: u64) -> StdRandomSource {
        StdRandomSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Construct a generator seeded from the operating system's entropy
    /// source. Not reproducible; intended for exploratory use only.
    pub fn from_entropy() -> StdRandomSource {
        StdRandomSource {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn next_f64(&mut self) -> f64 {
        // `next_u64() >> 11` keeps the 53 bits of mantissa precision a
        // `f64` in `[0, 1)` can hold, avoiding the rounding-to-1.0 edge
        // case a naive `next_u64() as f64 / u64::MAX as f64` can hit.
        (self.rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// A lighter-weight [`RandomSource`] for hot loops (property tests, large
/// Monte Carlo runs) where `SmallRng`'s non-cryptographic guarantees are an
/// acceptable trade for speed.
pub struct FastRandomSource {
    rng: SmallRng,
}

impl FastRandomSource {
    /// Construct a generator seeded from a fixed 64-bit seed.
    pub fn seeded(seed: u64) -> FastRandomSource {
        FastRandomSource {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for FastRandomSource {
    fn next_f64(&mut self) -> f64 {
        (self.rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = StdRandomSource::seeded(42);
        let mut b = StdRandomSource::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn uniform_stays_in_unit_interval() {
        let mut r = StdRandomSource::seeded(7);
        for _ in 0..10_000 {
            let u = r.next_f64();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn zero_rate_yields_infinite_wait() {
        let mut r = StdRandomSource::seeded(1);
        assert_eq!(r.next_exponential(Rate::ZERO), Time::INFINITY);
    }

    #[test]
    fn exponential_mean_matches_inverse_rate() {
        let mut r = StdRandomSource::seeded(99);
        let rate = Rate::new(2.0).unwrap();
        let n = 200_000;
        let sum: f64 = (0..n).map(|_| r.next_exponential(rate).value()).sum();
        let mean = sum / n as f64;
        // Expected mean is 1/rate = 0.5; allow generous statistical slack.
        assert!((mean - 0.5).abs() < 0.01, "mean was {mean}");
    }
}
