//! Error taxonomy for the simulation engine.
//!
//! Every violation the engine can detect is a fatal logic error: none of
//! these are meant to be caught and retried. A caller that sees one of
//! these considers the whole simulation corrupted (spec: "no silent
//! recovery and no rollback").

use thiserror::Error;

use crate::process::ProcessIndex;
use crate::time::Time;

/// Errors raised by the simulation engine.
///
/// Grouped by the three kinds from the failure-semantics design: contract
/// violations, ordering violations, and internal invariant breaches.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A rate or population value was negative.
    #[error("negative rate: {0}")]
    NegativeRate(f64),

    /// A process index was registered twice in the same system.
    #[error("duplicate process index: {0}")]
    DuplicateProcessIndex(ProcessIndex),

    /// A dependency link named a process as its own successor.
    #[error("process {0} cannot depend on itself")]
    SelfLink(ProcessIndex),

    /// An event referenced a process the system does not contain.
    #[error("unknown process index: {0}")]
    UnknownProcess(ProcessIndex),

    /// A linked event's time is later than the time of the event it is
    /// retiming, which would imply retiming into the past.
    #[error("linked event time {linked} is after dependent event time {dependent}")]
    LinkedTimeAfterSelf { linked: Time, dependent: Time },

    /// A new event's time did not strictly exceed the system's last event
    /// time.
    #[error("event time {new} does not exceed last event time {last}")]
    NonMonotonicTime { new: Time, last: Time },

    /// The indexed event heap's parent/child ordering was violated.
    #[error("heap ordering violated at position {0}")]
    HeapOrderViolation(usize),

    /// The heap already holds an entry for this process.
    #[error("process {0} already present in heap")]
    DuplicateHeapEntry(ProcessIndex),

    /// The rate-weighted selection scan fell off the end of an empty list.
    #[error("process selection failed: list is empty")]
    SelectionFailed,

    /// The total rate supplied to a selection routine was not positive.
    #[error("total rate must be positive, got {0}")]
    NonPositiveTotalRate(f64),

    /// A process's rate was read before it had ever been assigned.
    #[error("process rate has not been assigned for process {0}")]
    RateNotAssigned(ProcessIndex),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
