//! The dynamic rate aggregator (C7b): maintains `total_rate = sum(rate(p))`
//! incrementally, with a partial/full refresh policy that bounds both
//! floating-point drift and amortized update cost.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::process::{Process, ProcessIndex};
use crate::rate::Rate;

/// Incrementally-maintained total rate over a fixed process set.
///
/// Partial updates accumulate floating-point drift; the age and
/// process-count thresholds bound both the drift and the amortized cost
/// of eventually re-summing everything from scratch.
pub struct RateAggregator {
    total_rate: f64,
    cache: HashMap<ProcessIndex, f64>,
    /// Process index -> position in the `processes` slice every caller is
    /// expected to keep passing back, mirroring `SystemCore`'s locator.
    /// Built once at construction so a partial update can index straight
    /// into the slice for only the touched processes instead of rebuilding
    /// a full index->process map on every call.
    locator: HashMap<ProcessIndex, usize>,
    age: u64,
    age_threshold: u64,
    proc_threshold: usize,
}

impl RateAggregator {
    /// Build an aggregator over `processes`, computing the initial total
    /// and thresholds from the process count `N`:
    /// `age_threshold = min(1_000_000, 100 * N)`, `proc_threshold = N / 2`.
    pub fn new<P: Process>(processes: &[P]) -> RateAggregator {
        let n = processes.len();
        let mut cache = HashMap::with_capacity(n);
        let mut locator = HashMap::with_capacity(n);
        let mut total_rate = 0.0;
        for (pos, p) in processes.iter().enumerate() {
            let r = p.rate().value();
            cache.insert(p.index(), r);
            locator.insert(p.index(), pos);
            total_rate += r;
        }
        RateAggregator {
            total_rate,
            cache,
            locator,
            age: 0,
            age_threshold: (100 * n as u64).min(1_000_000),
            proc_threshold: n / 2,
        }
    }

    /// The current total rate across all processes.
    pub fn total_rate(&self) -> Rate {
        Rate::new(self.total_rate.max(0.0)).unwrap_or(Rate::ZERO)
    }

    /// Number of partial updates applied since the last full refresh.
    pub fn age(&self) -> u64 {
        self.age
    }

    /// After an event fired `event_proc` with dependents `dependents`,
    /// update the aggregated total. Performs a partial update (touching
    /// only `{event_proc} ∪ dependents`) when `age < age_threshold` and
    /// `dependents.len() < proc_threshold`; otherwise performs a full
    /// refresh over every process, which also resets `age` to zero.
    ///
    /// Fails with `Error::UnknownProcess` if `event_proc` or any of
    /// `dependents` is not a process this aggregator was built over: per
    /// spec §7 a reference to an unknown process is a fatal contract
    /// violation, not something to skip silently.
    pub fn update<P: Process>(&mut self, processes: &[P], event_proc: ProcessIndex, dependents: &[ProcessIndex]) -> Result<()> {
        if self.age < self.age_threshold && (dependents.len() as u64) < self.proc_threshold as u64 {
            self.partial_update(processes, event_proc, dependents)
        } else {
            self.full_refresh(processes);
            Ok(())
        }
    }

    fn partial_update<P: Process>(&mut self, processes: &[P], event_proc: ProcessIndex, dependents: &[ProcessIndex]) -> Result<()> {
        let mut touched = Vec::with_capacity(dependents.len() + 1);
        touched.push(event_proc);
        touched.extend_from_slice(dependents);
        for idx in touched {
            let pos = *self.locator.get(&idx).ok_or(Error::UnknownProcess(idx))?;
            let new_rate = processes[pos].rate().value();
            let old_rate = self.cache.get(&idx).copied().unwrap_or(0.0);
            self.total_rate += new_rate - old_rate;
            self.cache.insert(idx, new_rate);
        }
        self.age += 1;
        Ok(())
    }

    /// Re-sum every process's rate from scratch, rebuilding the cache and
    /// resetting the drift-age counter.
    pub fn full_refresh<P: Process>(&mut self, processes: &[P]) {
        self.cache.clear();
        self.total_rate = 0.0;
        for p in processes {
            let r = p.rate().value();
            self.cache.insert(p.index(), r);
            self.total_rate += r;
        }
        debug!(total_rate = self.total_rate, "rate aggregator full refresh");
        self.age = 0;
    }
}
