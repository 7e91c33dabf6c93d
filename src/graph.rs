//! The bidirectional dependency graph between processes (C5): when a
//! predecessor fires, the rates of its successors may have changed.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::process::ProcessIndex;

/// Directed edges between processes, kept as two multivalued mappings in
/// lock-step: `forward[p]` holds `p`'s successors, `reverse[q]` holds
/// `q`'s predecessors. No transitive closure is ever computed; the graph
/// is consulted shallowly, once per fired event.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    forward: HashMap<ProcessIndex, Vec<ProcessIndex>>,
    reverse: HashMap<ProcessIndex, Vec<ProcessIndex>>,
}

impl DependencyGraph {
    /// An empty graph.
    pub fn new() -> DependencyGraph {
        DependencyGraph::default()
    }

    /// Add the edge `predecessor -> successor` (and its mirror in
    /// `reverse`). Self-links are rejected: a process may never be its
    /// own successor.
    pub fn link(&mut self, predecessor: ProcessIndex, successor: ProcessIndex) -> Result<()> {
        if predecessor == successor {
            return Err(Error::SelfLink(predecessor));
        }
        let fwd = self.forward.entry(predecessor).or_default();
        if !fwd.contains(&successor) {
            fwd.push(successor);
        }
        let rev = self.reverse.entry(successor).or_default();
        if !rev.contains(&predecessor) {
            rev.push(predecessor);
        }
        Ok(())
    }

    /// Remove every edge touching `p`, in both directions.
    pub fn remove(&mut self, p: ProcessIndex) {
        if let Some(successors) = self.forward.remove(&p) {
            for s in successors {
                if let Some(rev) = self.reverse.get_mut(&s) {
                    rev.retain(|&q| q != p);
                }
            }
        }
        if let Some(predecessors) = self.reverse.remove(&p) {
            for q in predecessors {
                if let Some(fwd) = self.forward.get_mut(&q) {
                    fwd.retain(|&s| s != p);
                }
            }
        }
    }

    /// The successors of `p`: the processes whose rates may change when
    /// `p` fires. Excludes `p` itself.
    pub fn successors(&self, p: ProcessIndex) -> &[ProcessIndex] {
        self.forward.get(&p).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The predecessors of `p`.
    pub fn predecessors(&self, p: ProcessIndex) -> &[ProcessIndex] {
        self.reverse.get(&p).map(Vec::as_slice).unwrap_or(&[])
    }
}
