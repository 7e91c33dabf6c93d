//! The self-promoting priority list (C7c): rate-weighted random selection
//! that bubbles the selected entry one position toward the head, so
//! frequently-selected (higher-rate) processes migrate toward the front
//! and shorten the expected scan over time.

use crate::error::{Error, Result};
use crate::process::Process;
use crate::rate::Rate;
use crate::tolerance::ge_tolerant;

/// A mutable ordered list of processes used for rate-weighted selection.
/// Membership never changes after construction; only the order does.
pub struct PriorityList<P: Process> {
    entries: Vec<P>,
}

impl<P: Process> PriorityList<P> {
    /// Build a priority list over `processes`, in the given initial order.
    pub fn new(processes: Vec<P>) -> PriorityList<P> {
        PriorityList { entries: processes }
    }

    /// Number of processes in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no processes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The processes in their current order.
    pub fn entries(&self) -> &[P] {
        &self.entries
    }

    /// Select a process using uniform deviate `u` in `[0, 1)` and the
    /// caller-supplied `total_rate` (must be positive). Walks the list
    /// accumulating rates, selecting the first process whose cumulative
    /// sum is `>= u * total_rate` under tolerant comparison; promotes the
    /// selected entry one position toward the head.
    ///
    /// Per the scan-exhaustion open question (spec §9), if the tolerant
    /// scan never crosses the threshold (pathological rate distributions
    /// under floating-point noise), selection falls through to the last
    /// element rather than failing.
    pub fn select(&mut self, u: f64, total_rate: Rate) -> Result<&P> {
        if total_rate.value() <= 0.0 {
            return Err(Error::NonPositiveTotalRate(total_rate.value()));
        }
        if self.entries.is_empty() {
            return Err(Error::SelectionFailed);
        }
        let threshold = u * total_rate.value();
        let mut cumulative = 0.0;
        let mut selected = self.entries.len() - 1;
        for (i, p) in self.entries.iter().enumerate() {
            cumulative += p.rate().value();
            if ge_tolerant(cumulative, threshold) {
                selected = i;
                break;
            }
        }
        if selected > 0 {
            self.entries.swap(selected, selected - 1);
            selected -= 1;
        }
        Ok(&self.entries[selected])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessIndex;

    #[derive(Clone)]
    struct Stub {
        idx: ProcessIndex,
        rate: Rate,
    }

    impl Process for Stub {
        fn index(&self) -> ProcessIndex {
            self.idx
        }
        fn rate(&self) -> Rate {
            self.rate
        }
    }

    fn stub(n: u64, rate: f64) -> Stub {
        Stub {
            idx: ProcessIndex(n),
            rate: Rate::new(rate).unwrap(),
        }
    }

    #[test]
    fn selection_fails_on_non_positive_total() {
        let mut list = PriorityList::new(vec![stub(0, 1.0)]);
        assert!(matches!(
            list.select(0.5, Rate::ZERO),
            Err(Error::NonPositiveTotalRate(_))
        ));
    }

    #[test]
    fn selecting_first_entry_is_a_no_op_promotion() {
        let mut list = PriorityList::new(vec![stub(0, 10.0), stub(1, 1.0)]);
        let total = Rate::new(11.0).unwrap();
        let selected = list.select(0.0, total).unwrap().index();
        assert_eq!(selected, ProcessIndex(0));
        assert_eq!(list.entries()[0].index(), ProcessIndex(0));
    }

    #[test]
    fn selecting_a_later_entry_promotes_it_one_slot() {
        let mut list = PriorityList::new(vec![stub(0, 1.0), stub(1, 1.0), stub(2, 8.0)]);
        let total = Rate::new(10.0).unwrap();
        // threshold = 0.95 * 10 = 9.5, crosses only after index 2 (cumsum 10).
        let selected = list.select(0.95, total).unwrap().index();
        assert_eq!(selected, ProcessIndex(2));
        assert_eq!(list.entries()[1].index(), ProcessIndex(2));
    }

    #[test]
    fn selection_is_unbiased_over_many_trials() {
        use crate::random::StdRandomSource;
        let mut list = PriorityList::new(vec![stub(0, 2000.0), stub(1, 3000.0), stub(2, 4000.0)]);
        let total = Rate::new(9000.0).unwrap();
        let mut r = StdRandomSource::seeded(123);
        let mut counts = [0u64; 3];
        let trials = 300_000;
        for _ in 0..trials {
            use crate::random::RandomSource;
            let u = r.next_f64();
            let idx = list.select(u, total).unwrap().index().0 as usize;
            counts[idx] += 1;
        }
        let freqs = [
            counts[0] as f64 / trials as f64,
            counts[1] as f64 / trials as f64,
            counts[2] as f64 / trials as f64,
        ];
        assert!((freqs[0] - 2.0 / 9.0).abs() < 0.01, "{freqs:?}");
        assert!((freqs[1] - 3.0 / 9.0).abs() < 0.01, "{freqs:?}");
        assert!((freqs[2] - 4.0 / 9.0).abs() < 0.01, "{freqs:?}");
    }
}
