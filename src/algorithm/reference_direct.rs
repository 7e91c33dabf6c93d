//! The reference direct-method algorithm (C8a): the naive Gillespie
//! direct method, re-summing every process's rate and re-scanning the
//! full process list on every step. No internal state between steps;
//! useful as a correctness oracle for the optimized variants.

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::process::Process;
use crate::random::RandomSource;
use crate::rate::Rate;
use crate::time::Time;
use crate::tolerance::ge_tolerant;

/// The unoptimized direct method: sums rates and scans the process list
/// from scratch on every call to [`ReferenceDirect::next_event`].
#[derive(Debug, Default)]
pub struct ReferenceDirect;

impl ReferenceDirect {
    /// A fresh reference-direct algorithm instance. Carries no state.
    pub fn new() -> ReferenceDirect {
        ReferenceDirect
    }
}

impl<P: Process> Algorithm<P> for ReferenceDirect {
    fn next_event(
        &mut self,
        processes: &[P],
        last_time: Time,
        random: &mut dyn RandomSource,
    ) -> Result<Event<P>> {
        let total: f64 = processes.iter().map(|p| p.rate().value()).sum();
        if total <= 0.0 {
            return Err(Error::NonPositiveTotalRate(total));
        }
        let u = random.next_f64();
        let threshold = u * total;
        let mut cumulative = 0.0;
        let mut selected = processes.len() - 1;
        for (i, p) in processes.iter().enumerate() {
            cumulative += p.rate().value();
            if ge_tolerant(cumulative, threshold) {
                selected = i;
                break;
            }
        }
        let proc = processes[selected].clone();
        let total_rate = Rate::new(total)?;
        let interval = total_rate.sample_interval(random);
        Ok(Event::scheduled(proc, last_time + interval))
    }

    /// No internal state to update: the next call to `next_event` re-reads
    /// everything from `processes` directly.
    fn update_state(
        &mut self,
        _event: &Event<P>,
        _dependents: &[P],
        _random: &mut dyn RandomSource,
    ) -> Result<()> {
        Ok(())
    }
}
