//! The three event-selection algorithms (C8a/b/c), unified behind one
//! trait so a driver can be generic over which method is running.
//!
//! `Algorithm` gives a single `advance()` driver one call site for all
//! three methods instead of three separate hand-rolled loops.

pub mod direct;
pub mod next_reaction;
pub mod reference_direct;

use crate::error::Result;
use crate::event::Event;
use crate::process::Process;
use crate::random::RandomSource;
use crate::time::Time;

/// An event-selection algorithm: picks the next event to fire and, after
/// the system has applied it, updates whatever internal index the
/// algorithm maintains.
pub trait Algorithm<P: Process> {
    /// Select the next event to fire, given the system's current process
    /// set and the time of its last applied event (`Time::ZERO` before the
    /// first event). Does not mutate the system; the caller applies the
    /// returned event via [`crate::system::System::update_state`].
    fn next_event(
        &mut self,
        processes: &[P],
        last_time: Time,
        random: &mut dyn RandomSource,
    ) -> Result<Event<P>>;

    /// After `event` has been applied to the system (rates of `event`'s
    /// process and `dependents` have just been recomputed), update this
    /// algorithm's internal index accordingly.
    fn update_state(
        &mut self,
        event: &Event<P>,
        dependents: &[P],
        random: &mut dyn RandomSource,
    ) -> Result<()>;
}

/// One full simulation step: ask the algorithm for the next event, apply
/// it to the system, then let the algorithm re-index using the system's
/// dependency graph. Returns the applied event.
///
/// This is the "data flow per step" described in spec §2, expressed as a
/// free function so it works uniformly across all three algorithms and
/// any `System` implementation.
pub fn advance<P, S, A>(system: &mut S, algorithm: &mut A, random: &mut dyn RandomSource) -> Result<Event<P>>
where
    P: Process,
    S: crate::system::System<P>,
    A: Algorithm<P>,
{
    let event = algorithm.next_event(system.processes(), system.last_event_time(), random)?;
    system.update_state(event.clone())?;
    let dependents: Vec<P> = system
        .successors(event.process_index())
        .iter()
        .filter_map(|&idx| system.process(idx).cloned())
        .collect();
    algorithm.update_state(&event, &dependents, random)?;
    Ok(event)
}
