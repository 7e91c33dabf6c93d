//! Client-side fixtures for the end-to-end scenarios in `spec.md` §8.
//!
//! These are example collaborators, not part of the library's public
//! surface: a population of discrete "agents" plus a handful of
//! fixed-rate-law process kinds (decay, birth, death, transition,
//! capacity-capped), wired up behind the engine's `Process` and
//! `System` contracts.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use stochsim::event::Event;
use stochsim::process::{Process, ProcessIndex};
use stochsim::rate::Rate;
use stochsim::system::{System, SystemCore};

/// Shared, mutable agent populations, indexed by a small integer id the
/// process kinds below close over.
#[derive(Clone)]
pub struct Populations(Rc<RefCell<Vec<i64>>>);

impl Populations {
    pub fn new(initial: Vec<i64>) -> Populations {
        Populations(Rc::new(RefCell::new(initial)))
    }

    pub fn get(&self, agent: usize) -> i64 {
        self.0.borrow()[agent]
    }

    pub fn add(&self, agent: usize, delta: i64) {
        self.0.borrow_mut()[agent] += delta;
    }
}

/// The rate law and firing action of one process kind.
#[derive(Clone)]
pub enum Kind {
    /// `A -> A + A` at rate `k * count(A)`.
    Birth { agent: usize, k: f64 },
    /// `A -> ∅` at rate `k * count(A)`.
    Death { agent: usize, k: f64 },
    /// `A -> B` at rate `k * count(A)`.
    Transition { from: usize, to: usize, k: f64 },
    /// First-order decay of `agent`, at rate `k * count(agent)`. Firing
    /// removes one unit.
    Decay { agent: usize, k: f64 },
    /// Wraps a base rate law, zeroing it out once the summed population
    /// across `subset` reaches `capacity`.
    CapacityCapped {
        base_rate: f64,
        subset: Vec<usize>,
        capacity: u64,
    },
}

/// A process over a shared [`Populations`] table.
#[derive(Clone)]
pub struct AgentProcess {
    idx: ProcessIndex,
    kind: Kind,
    populations: Populations,
}

impl AgentProcess {
    pub fn new(idx: u64, kind: Kind, populations: Populations) -> AgentProcess {
        AgentProcess {
            idx: ProcessIndex(idx),
            kind,
            populations,
        }
    }
}

impl Process for AgentProcess {
    fn index(&self) -> ProcessIndex {
        self.idx
    }

    fn rate(&self) -> Rate {
        let value = match &self.kind {
            Kind::Birth { agent, k } | Kind::Death { agent, k } | Kind::Decay { agent, k } => {
                *k * self.populations.get(*agent) as f64
            }
            Kind::Transition { from, k, .. } => *k * self.populations.get(*from) as f64,
            Kind::CapacityCapped {
                base_rate,
                subset,
                capacity,
            } => {
                let total: i64 = subset.iter().map(|&a| self.populations.get(a)).sum();
                if (total as u64) < *capacity {
                    *base_rate
                } else {
                    0.0
                }
            }
        };
        Rate::new(value.max(0.0)).unwrap_or(Rate::ZERO)
    }
}

/// A `System` over [`AgentProcess`]es: applying an event mutates the
/// shared population table according to the fired process's kind.
pub struct AgentSystem {
    core: SystemCore<AgentProcess>,
}

impl AgentSystem {
    pub fn new(
        processes: Vec<AgentProcess>,
        links: impl IntoIterator<Item = (ProcessIndex, ProcessIndex)>,
    ) -> stochsim::Result<AgentSystem> {
        Ok(AgentSystem {
            core: SystemCore::new(processes, links)?,
        })
    }
}

impl System<AgentProcess> for AgentSystem {
    fn core(&self) -> &SystemCore<AgentProcess> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SystemCore<AgentProcess> {
        &mut self.core
    }

    fn apply_event(&mut self, event: &Event<AgentProcess>) {
        match &event.process().kind {
            Kind::Birth { agent, .. } => event.process().populations.add(*agent, 1),
            Kind::Death { agent, .. } => event.process().populations.add(*agent, -1),
            Kind::Transition { from, to, .. } => {
                event.process().populations.add(*from, -1);
                event.process().populations.add(*to, 1);
            }
            Kind::Decay { agent, .. } => event.process().populations.add(*agent, -1),
            Kind::CapacityCapped { .. } => {
                // The capacity gate has no firing action of its own in
                // these fixtures; it only ever zeroes out a base rate.
            }
        }
    }
}
