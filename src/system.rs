//! The system container (C6): an insertion-ordered collection of
//! processes plus the dependency graph between them, tracking event
//! count and the last applied event.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::event::Event;
use crate::graph::DependencyGraph;
use crate::process::{Process, ProcessIndex};
use crate::time::Time;

/// The process set, the dependency graph, and the two mutable fields
/// (`event_count`, `last_event`) that every `System` implementation needs.
///
/// Process membership is fixed after construction: the rate aggregator
/// and the next-reaction heap both assume a stable process set, so this
/// type exposes no way to add or remove a process once built.
pub struct SystemCore<P: Process> {
    processes: Vec<P>,
    locator: HashMap<ProcessIndex, usize>,
    graph: DependencyGraph,
    event_count: u64,
    last_event: Option<Event<P>>,
}

impl<P: Process> SystemCore<P> {
    /// Build a system core from a process collection and a set of
    /// dependency links. Rejects duplicate process indices and self-links
    /// (the latter via [`DependencyGraph::link`]).
    pub fn new(
        processes: Vec<P>,
        links: impl IntoIterator<Item = (ProcessIndex, ProcessIndex)>,
    ) -> Result<SystemCore<P>> {
        let mut locator = HashMap::with_capacity(processes.len());
        for (i, p) in processes.iter().enumerate() {
            if locator.insert(p.index(), i).is_some() {
                return Err(Error::DuplicateProcessIndex(p.index()));
            }
        }
        let mut graph = DependencyGraph::new();
        for (pred, succ) in links {
            graph.link(pred, succ)?;
        }
        Ok(SystemCore {
            processes,
            locator,
            graph,
            event_count: 0,
            last_event: None,
        })
    }

    /// The process registered under `index`, if any.
    pub fn process(&self, index: ProcessIndex) -> Option<&P> {
        self.locator.get(&index).map(|&i| &self.processes[i])
    }

    /// Number of processes in this system.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Whether `index` names a process in this system.
    pub fn contains_process(&self, index: ProcessIndex) -> bool {
        self.locator.contains_key(&index)
    }

    /// A read-only, insertion-ordered view of every process.
    pub fn processes(&self) -> &[P] {
        &self.processes
    }

    /// The dependency graph.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// The processes whose rates may change when `p` fires, excluding `p`
    /// itself.
    pub fn successors(&self, p: ProcessIndex) -> &[ProcessIndex] {
        self.graph.successors(p)
    }

    /// Total number of events applied so far.
    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    /// The most recently applied event, if any.
    pub fn last_event(&self) -> Option<&Event<P>> {
        self.last_event.as_ref()
    }

    /// The time of the most recently applied event, or `Time::ZERO` before
    /// the first event.
    pub fn last_event_time(&self) -> Time {
        self.last_event.as_ref().map(Event::time).unwrap_or(Time::ZERO)
    }

    fn record(&mut self, event: Event<P>) {
        self.event_count += 1;
        self.last_event = Some(event);
    }
}

/// The system container's public surface (C6), split into a stable core
/// (membership, graph, counters) and a client-supplied hook that applies
/// an event's domain semantics.
///
/// Rust has no subclassing, so the per-process domain behavior is a
/// required trait method (`apply_event`) with the invariant-checking
/// dispatch (`update_state`) provided as a default method on top of it:
/// the template-method pattern, expressed with a trait instead of
/// inheritance.
pub trait System<P: Process> {
    /// Access the shared core state.
    fn core(&self) -> &SystemCore<P>;

    /// Mutably access the shared core state.
    fn core_mut(&mut self) -> &mut SystemCore<P>;

    /// Apply an already-validated event's domain semantics: mutate
    /// populations, recompute the rates of the fired process and its
    /// dependents. Invoked with `last_event()` already set to `event`.
    fn apply_event(&mut self, event: &Event<P>);

    /// The process registered under `index`, if any.
    fn process(&self, index: ProcessIndex) -> Option<&P> {
        self.core().process(index)
    }

    /// Number of processes in this system.
    fn process_count(&self) -> usize {
        self.core().process_count()
    }

    /// Whether `index` names a process in this system.
    fn contains_process(&self, index: ProcessIndex) -> bool {
        self.core().contains_process(index)
    }

    /// A read-only, insertion-ordered view of every process.
    fn processes(&self) -> &[P] {
        self.core().processes()
    }

    /// The processes whose rates may change when `p` fires.
    fn successors(&self, p: ProcessIndex) -> &[ProcessIndex] {
        self.core().successors(p)
    }

    /// Total number of events applied so far.
    fn event_count(&self) -> u64 {
        self.core().event_count()
    }

    /// The most recently applied event, if any.
    fn last_event(&self) -> Option<&Event<P>> {
        self.core().last_event()
    }

    /// The time of the most recently applied event, or `Time::ZERO` before
    /// the first event.
    fn last_event_time(&self) -> Time {
        self.core().last_event_time()
    }

    /// Validate and apply `event`: the new event time must strictly exceed
    /// the last event time, and the event's process must belong to this
    /// system. On success, increments the event count, records the event,
    /// then delegates to [`System::apply_event`].
    fn update_state(&mut self, event: Event<P>) -> Result<()> {
        let last = self.last_event_time();
        if event.time().value() <= last.value() {
            return Err(Error::NonMonotonicTime {
                new: event.time(),
                last,
            });
        }
        if !self.contains_process(event.process_index()) {
            return Err(Error::UnknownProcess(event.process_index()));
        }
        debug!(
            process = %event.process_index(),
            time = %event.time(),
            event_count = self.event_count() + 1,
            "applying event"
        );
        self.core_mut().record(event.clone());
        self.apply_event(&event);
        Ok(())
    }
}
