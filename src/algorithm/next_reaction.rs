//! The next-reaction algorithm (C8c): Gibson-Bruck's method, driven by an
//! [`IndexedEventHeap`] holding one scheduled event per process.

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::heap::IndexedEventHeap;
use crate::process::Process;
use crate::random::RandomSource;
use crate::time::Time;

/// The Gibson-Bruck next-reaction method (C8c).
pub struct NextReaction<P: Process> {
    heap: IndexedEventHeap<P>,
}

impl<P: Process> NextReaction<P> {
    /// Build a next-reaction algorithm, seeding the heap with
    /// [`Event::first`] for every process.
    pub fn new(processes: &[P], random: &mut dyn RandomSource) -> Result<NextReaction<P>> {
        let mut heap = IndexedEventHeap::new();
        for p in processes {
            heap.insert(Event::first(p.clone(), random))?;
        }
        Ok(NextReaction { heap })
    }

    /// Read-only access to the underlying heap, chiefly for tests and
    /// diagnostics.
    pub fn heap(&self) -> &IndexedEventHeap<P> {
        &self.heap
    }
}

impl<P: Process> Algorithm<P> for NextReaction<P> {
    /// Returns the heap root without popping it: the step's semantics
    /// leave the heap fully populated, one entry per process, for the
    /// lifetime of the simulation.
    fn next_event(
        &mut self,
        _processes: &[P],
        _last_time: Time,
        _random: &mut dyn RandomSource,
    ) -> Result<Event<P>> {
        self.heap.peek().cloned().ok_or(Error::SelectionFailed)
    }

    fn update_state(
        &mut self,
        event: &Event<P>,
        dependents: &[P],
        random: &mut dyn RandomSource,
    ) -> Result<()> {
        let refreshed = event.next(random);
        self.heap.update(refreshed)?;
        for d in dependents {
            let current = self
                .heap
                .find(d.index())
                .cloned()
                .ok_or(Error::UnknownProcess(d.index()))?;
            let retimed = current.update_from_event(event, random)?;
            self.heap.update(retimed)?;
        }
        Ok(())
    }
}
