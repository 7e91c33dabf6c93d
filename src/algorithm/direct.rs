//! The optimized direct-method algorithm (C8b): Gillespie's direct method
//! driven by a dynamically-maintained total rate ([`RateAggregator`]) and
//! a self-promoting selection list ([`PriorityList`]), instead of
//! re-summing and re-scanning the whole process set on every step.

use crate::aggregator::RateAggregator;
use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::event::Event;
use crate::priority_list::PriorityList;
use crate::process::Process;
use crate::random::RandomSource;
use crate::time::Time;

/// The optimized direct method (C8b).
pub struct Direct<P: Process> {
    aggregator: RateAggregator,
    priority_list: PriorityList<P>,
}

impl<P: Process> Direct<P> {
    /// Build a direct-method algorithm over a fixed process set. Process
    /// membership must not change for the lifetime of this value: both
    /// the aggregator and the priority list assume a stable set.
    pub fn new(processes: &[P]) -> Direct<P> {
        Direct {
            aggregator: RateAggregator::new(processes),
            priority_list: PriorityList::new(processes.to_vec()),
        }
    }

    /// The current aggregated total rate.
    pub fn total_rate(&self) -> crate::rate::Rate {
        self.aggregator.total_rate()
    }
}

impl<P: Process> Algorithm<P> for Direct<P> {
    fn next_event(
        &mut self,
        _processes: &[P],
        last_time: Time,
        random: &mut dyn RandomSource,
    ) -> Result<Event<P>> {
        let total_rate = self.aggregator.total_rate();
        let u = random.next_f64();
        let selected = self.priority_list.select(u, total_rate)?.clone();
        let interval = total_rate.sample_interval(random);
        Ok(Event::scheduled(selected, last_time + interval))
    }

    /// Only the aggregator needs updating: the priority list is
    /// self-adjusting via [`PriorityList::select`].
    fn update_state(
        &mut self,
        event: &Event<P>,
        dependents: &[P],
        _random: &mut dyn RandomSource,
    ) -> Result<()> {
        let dep_indices: Vec<_> = dependents.iter().map(Process::index).collect();
        self.aggregator
            .update(self.priority_list.entries(), event.process_index(), &dep_indices)?;
        Ok(())
    }
}
