//! Property tests for the invariants listed in spec.md §8 that aren't
//! already covered as end-to-end scenarios: heap ordering under arbitrary
//! mutation sequences, and the rate aggregator's bounded drift.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use stochsim::aggregator::RateAggregator;
use stochsim::event::Event;
use stochsim::heap::IndexedEventHeap;
use stochsim::process::{Process, ProcessIndex};
use stochsim::random::StdRandomSource;
use stochsim::rate::Rate;

#[derive(Clone)]
struct Mutable {
    idx: ProcessIndex,
    rate: Rc<Cell<f64>>,
}

impl Process for Mutable {
    fn index(&self) -> ProcessIndex {
        self.idx
    }
    fn rate(&self) -> Rate {
        Rate::new(self.rate.get()).unwrap()
    }
}

fn proc(n: u64, rate: f64) -> Mutable {
    Mutable {
        idx: ProcessIndex(n),
        rate: Rc::new(Cell::new(rate)),
    }
}

proptest! {
    /// After any sequence of "pop root, resample it, rekey" mutations, the
    /// heap satisfies parent <= each child, pointwise.
    #[test]
    fn heap_stays_ordered_after_arbitrary_replay(
        seed in any::<u64>(),
        steps in 1usize..300,
        process_count in 2usize..40,
    ) {
        let mut random = StdRandomSource::seeded(seed);
        let processes: Vec<Mutable> = (0..process_count as u64).map(|n| proc(n, 1.0)).collect();
        let mut heap = IndexedEventHeap::new();
        for p in &processes {
            heap.insert(Event::first(p.clone(), &mut random)).unwrap();
        }
        for _ in 0..steps {
            let root = heap.peek().unwrap().clone();
            let replaced = root.next(&mut random);
            heap.update(replaced).unwrap();
            prop_assert!(heap.is_ordered());
        }
    }

    /// The aggregator's running total never drifts from a direct
    /// recomputation by more than `epsilon * N`.
    #[test]
    fn aggregator_drift_is_bounded(
        seed in any::<u64>(),
        process_count in 2usize..60,
        updates in 1usize..400,
    ) {
        let mut random = StdRandomSource::seeded(seed);
        let processes: Vec<Mutable> = (0..process_count as u64)
            .map(|n| proc(n, 1.0 + n as f64 * 0.1))
            .collect();
        let mut aggregator = RateAggregator::new(&processes);
        for _ in 0..updates {
            let idx = (random.next_f64() * process_count as f64) as usize % process_count;
            processes[idx].rate.set(random.next_f64() * 10.0);
            aggregator.update(&processes, ProcessIndex(idx as u64), &[]).unwrap();
        }
        let direct_sum: f64 = processes.iter().map(|p| p.rate().value()).sum();
        let epsilon = 1e-6;
        prop_assert!((aggregator.total_rate().value() - direct_sum).abs() <= epsilon * process_count as f64);
    }

    /// Rates are never negative for any reachable agent-population state:
    /// a non-negative population under a non-negative rate constant
    /// always yields a non-negative rate.
    #[test]
    fn rate_is_never_negative(population in 0i64..1_000_000, k in 0.0f64..100.0) {
        let p = proc(0, k * population as f64);
        prop_assert!(p.rate().value() >= 0.0);
    }
}
