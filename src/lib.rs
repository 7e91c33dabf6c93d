/* Copyright © 2018 Gianmarco Garrisi

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>. */

//! Exact stochastic simulation of coupled discrete-event processes.
//!
//! This crate implements the engine behind the Gillespie family of exact
//! stochastic simulation algorithms: a *system* of processes, each with an
//! instantaneous non-negative firing rate, is advanced one event at a
//! time. At each step an algorithm selects which process fires next and
//! when, the system applies that event (mutating client-side state and
//! recomputing affected rates), and the algorithm re-indexes using the
//! set of processes the dependency graph marks as affected.
//!
//! Three algorithms are provided, all implementing the same
//! [`algorithm::Algorithm`] trait:
//!
//! - [`algorithm::reference_direct::ReferenceDirect`]: the naive direct
//!   method; re-sums every rate and re-scans the process list on every
//!   step. A correctness oracle for the optimized variants.
//! - [`algorithm::direct::Direct`]: the direct method driven by a
//!   dynamically-maintained total rate and a self-promoting selection
//!   list.
//! - [`algorithm::next_reaction::NextReaction`]: the Gibson-Bruck
//!   next-reaction method, driven by an indexed min-heap of per-process
//!   scheduled events.
//!
//! # What this crate does not do
//!
//! The domain model of "agents" (populations of discrete species) and
//! concrete process kinds (birth, death, transition, decay,
//! capacity-capped...) are *client* code: this crate specifies only the
//! [`process::Process`] contract those clients must satisfy. Likewise out
//! of scope: random-number generation beyond the [`random::RandomSource`]
//! contract and its default implementation, and tau-leaping / spatial /
//! distributed simulation methods.
//!
//! # Example
//!
//! ```
//! use stochsim::algorithm::{next_reaction::NextReaction, Algorithm};
//! use stochsim::process::{Process, ProcessIndex};
//! use stochsim::random::StdRandomSource;
//! use stochsim::rate::Rate;
//! use stochsim::time::Time;
//!
//! #[derive(Clone)]
//! struct Decay {
//!     idx: ProcessIndex,
//!     rate: Rate,
//! }
//!
//! impl Process for Decay {
//!     fn index(&self) -> ProcessIndex { self.idx }
//!     fn rate(&self) -> Rate { self.rate }
//! }
//!
//! let procs = vec![
//!     Decay { idx: ProcessIndex(0), rate: Rate::new(1.0).unwrap() },
//!     Decay { idx: ProcessIndex(1), rate: Rate::new(2.0).unwrap() },
//! ];
//! let mut random = StdRandomSource::seeded(42);
//! let mut algorithm = NextReaction::new(&procs, &mut random).unwrap();
//! let event = algorithm.next_event(&procs, Time::ZERO, &mut random).unwrap();
//! assert!(event.time().value() > 0.0);
//! ```

pub mod aggregator;
pub mod algorithm;
pub mod error;
pub mod event;
pub mod graph;
pub mod heap;
pub mod priority_list;
pub mod process;
pub mod random;
pub mod rate;
pub mod system;
pub mod time;
pub mod tolerance;

pub use algorithm::Algorithm;
pub use error::{Error, Result};
pub use event::Event;
pub use graph::DependencyGraph;
pub use process::{Process, ProcessIndex};
pub use random::RandomSource;
pub use rate::Rate;
pub use system::{System, SystemCore};
pub use time::Time;
