//! Immutable event records and their retiming operations (C3).

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::process::{Process, ProcessIndex};
use crate::random::RandomSource;
use crate::rate::Rate;
use crate::time::Time;

/// An immutable `(process, rate-at-scheduling, scheduled-time)` triple.
///
/// "Updates" never mutate an `Event` in place; they return a fresh record,
/// which the caller is responsible for replacing in whatever index holds
/// it (the heap, a log, ...).
///
/// Natural ordering is chronological on `time`; ties break by higher rate
/// first, then by lower process index first. This is load-bearing for
/// [`crate::heap::IndexedEventHeap`] and must not change.
#[derive(Debug, Clone)]
pub struct Event<P: Process> {
    proc: P,
    rate: Rate,
    time: Time,
}

impl<P: Process> Event<P> {
    /// Build the first scheduled event for a freshly-constructed process:
    /// samples a waiting interval from the process's current rate, starting
    /// at `Time::ZERO`.
    pub fn first(proc: P, random: &mut dyn RandomSource) -> Event<P> {
        let rate = proc.rate();
        let interval = rate.sample_interval(random);
        Event {
            proc,
            rate,
            time: Time::ZERO + interval,
        }
    }

    /// Build an event directly from a process, its externally-computed
    /// scheduled time, and the process's rate at the instant of
    /// scheduling. Used by the direct-method algorithms, which compute the
    /// scheduled time from an aggregated total rate rather than by
    /// resampling a single process's exponential.
    pub fn scheduled(proc: P, time: Time) -> Event<P> {
        let rate = proc.rate();
        Event { proc, rate, time }
    }

    /// The process this event fires.
    pub fn process(&self) -> &P {
        &self.proc
    }

    /// Convenience accessor for the process's index.
    pub fn process_index(&self) -> ProcessIndex {
        self.proc.index()
    }

    /// The rate that was in effect when this event was scheduled. May
    /// differ from the process's current rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The absolute time at which this event is scheduled to fire.
    pub fn time(&self) -> Time {
        self.time
    }

    /// After this event's own process has just fired, resample a fresh
    /// waiting interval starting from `self.time()`, using the process's
    /// *current* rate (which the system's update hook may have just
    /// changed).
    pub fn next(&self, random: &mut dyn RandomSource) -> Event<P> {
        let rate = self.proc.rate();
        let interval = rate.sample_interval(random);
        Event {
            proc: self.proc.clone(),
            rate,
            time: self.time + interval,
        }
    }

    /// A *different* process fired at `linked_time <= self.time()`,
    /// changing this event's process's rate. Retime this event under the
    /// Gibson-Bruck rule, preserving the unelapsed fraction of the random
    /// quantile across the rate change.
    ///
    /// Fails if `linked_time > self.time()`: that would mean retiming into
    /// the past, which is an ordering bug at the call site.
    pub fn update(&self, linked_time: Time, random: &mut dyn RandomSource) -> Result<Event<P>> {
        if linked_time.value() > self.time.value() {
            return Err(Error::LinkedTimeAfterSelf {
                linked: linked_time,
                dependent: self.time,
            });
        }
        let new_rate = self.proc.rate();
        let new_time = if new_rate.is_zero() {
            Time::INFINITY
        } else if self.rate.is_zero() {
            linked_time + new_rate.sample_interval(random)
        } else {
            let ratio = self.rate.value() / new_rate.value();
            linked_time + ratio * (self.time.value() - linked_time.value())
        };
        Ok(Event {
            proc: self.proc.clone(),
            rate: new_rate,
            time: new_time,
        })
    }

    /// Convenience dispatcher: if `linked_event` fires the same process as
    /// `self`, delegate to [`Event::next`]; otherwise retime against its
    /// scheduled time via [`Event::update`].
    pub fn update_from_event(
        &self,
        linked_event: &Event<P>,
        random: &mut dyn RandomSource,
    ) -> Result<Event<P>> {
        if linked_event.process_index() == self.process_index() {
            Ok(self.next(random))
        } else {
            self.update(linked_event.time(), random)
        }
    }
}

impl<P: Process> PartialEq for Event<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Process> Eq for Event<P> {}

impl<P: Process> PartialOrd for Event<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Process> Ord for Event<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.time.value().partial_cmp(&other.time.value()) {
            Some(Ordering::Equal) => {}
            Some(o) => return o,
            None => panic!("event time was uncomparable, likely NaN"),
        }
        // Higher rate sorts first: compare in reverse.
        match other.rate.value().partial_cmp(&self.rate.value()) {
            Some(Ordering::Equal) => {}
            Some(o) => return o,
            None => panic!("event rate was uncomparable, likely NaN"),
        }
        self.proc.index().cmp(&other.proc.index())
    }
}
