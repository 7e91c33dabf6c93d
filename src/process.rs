//! The process contract (C4): the interface every concrete process kind
//! (birth/death/transition/decay/capacity-capped, etc.) must satisfy. The
//! engine never down-casts a `Process`; domain-specific state and
//! population updates belong entirely to the client's `System::apply_event`.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::rate::Rate;

/// A process's globally-unique identity within one system.
///
/// Assigned by the client at construction, in whatever order the client
/// chooses, and stable for the process's lifetime. Kept as a distinct
/// newtype (rather than a bare `usize`) so indices can never be silently
/// confused with heap positions, vector lengths, or other counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessIndex(pub u64);

impl fmt::Display for ProcessIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProcessIndex {
    fn from(value: u64) -> ProcessIndex {
        ProcessIndex(value)
    }
}

/// An elementary event type with an instantaneous non-negative firing
/// rate.
///
/// Implementors recompute `rate()` from whatever external state (agent
/// populations, clocks, capacity counters) their rate law depends on;
/// the engine only ever reads the current value.
pub trait Process: Clone {
    /// This process's stable index within its owning system.
    fn index(&self) -> ProcessIndex;

    /// This process's current instantaneous rate.
    fn rate(&self) -> Rate;
}

/// Equality and hashing consistent with `index()`, independent of any
/// mutable rate state a concrete process may carry.
///
/// Implementors of `Process` are expected to also derive or hand-write
/// `PartialEq`/`Eq`/`Hash` that forwards to `index()`; this helper makes
/// it mechanical.
pub fn index_eq<P: Process>(a: &P, b: &P) -> bool {
    a.index() == b.index()
}

/// Hash a process by its index alone, matching [`index_eq`].
pub fn hash_index<P: Process, H: Hasher>(p: &P, state: &mut H) {
    p.index().hash(state);
}
