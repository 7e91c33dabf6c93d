//! The indexed event heap (C7a): a min-heap of events, one per process,
//! keyed by the event's natural ordering, augmented with an O(1)
//! process-index -> heap-position locator that is kept consistent through
//! every swap. This is what lets next-reaction rekey a process's event in
//! `O(log n)` instead of a linear scan.
//!
//! Positions are stored 0-indexed internally (idiomatic for a Rust `Vec`),
//! with the root at position 0 and children of `i` at `2i + 1` and `2i + 2`.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::event::Event;
use crate::process::{Process, ProcessIndex};

/// A min-heap of events ordered by [`Event`]'s natural ordering, with O(1)
/// lookup by process index.
pub struct IndexedEventHeap<P: Process> {
    heap: Vec<Event<P>>,
    locator: HashMap<ProcessIndex, usize>,
}

impl<P: Process> IndexedEventHeap<P> {
    /// An empty heap.
    pub fn new() -> IndexedEventHeap<P> {
        IndexedEventHeap {
            heap: Vec::new(),
            locator: HashMap::new(),
        }
    }

    /// Number of events currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap holds no events.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert a new event. Fails if the heap already contains an entry for
    /// this event's process.
    pub fn insert(&mut self, event: Event<P>) -> Result<()> {
        let idx = event.process_index();
        if self.locator.contains_key(&idx) {
            return Err(Error::DuplicateHeapEntry(idx));
        }
        let pos = self.heap.len();
        self.heap.push(event);
        self.locator.insert(idx, pos);
        self.sift_up(pos);
        Ok(())
    }

    /// The root event: the earliest-scheduled event in the heap.
    pub fn peek(&self) -> Option<&Event<P>> {
        self.heap.first()
    }

    /// O(1) lookup of the event currently scheduled for `proc`.
    pub fn find(&self, proc: ProcessIndex) -> Option<&Event<P>> {
        self.locator.get(&proc).map(|&pos| &self.heap[pos])
    }

    /// Replace the node for `event`'s process with `event`, re-establishing
    /// heap order. Sifts both down and up at the affected position: only
    /// one direction will actually move the node, but doing both is cheap
    /// and robust to either direction of rate change.
    pub fn update(&mut self, event: Event<P>) -> Result<()> {
        let idx = event.process_index();
        let pos = *self
            .locator
            .get(&idx)
            .ok_or(Error::UnknownProcess(idx))?;
        self.heap[pos] = event;
        let pos = self.sift_down(pos);
        self.sift_up(pos);
        Ok(())
    }

    /// Remove and return the event scheduled for `proc`. Swaps with the
    /// last node, drops it, and re-heapifies at the vacated position. May
    /// shrink the backing storage if the live/allocated ratio drops below
    /// half.
    pub fn remove(&mut self, proc: ProcessIndex) -> Result<Event<P>> {
        let pos = self
            .locator
            .remove(&proc)
            .ok_or(Error::UnknownProcess(proc))?;
        let last = self.heap.len() - 1;
        self.heap.swap(pos, last);
        let removed = self.heap.pop().expect("heap non-empty: we just removed `proc`");
        if pos < self.heap.len() {
            self.locator.insert(self.heap[pos].process_index(), pos);
            let pos = self.sift_down(pos);
            self.sift_up(pos);
        }
        if self.heap.capacity() > self.heap.len() * 2 {
            self.heap.shrink_to(self.heap.len().max(1) * 2);
        }
        Ok(removed)
    }

    /// Debug check: every parent is `<=` both of its children. Returns the
    /// offending position on the first violation found.
    pub fn validate_order(&self) -> Result<()> {
        for pos in 0..self.heap.len() {
            for child in [2 * pos + 1, 2 * pos + 2] {
                if child < self.heap.len() && self.heap[child] < self.heap[pos] {
                    return Err(Error::HeapOrderViolation(pos));
                }
            }
        }
        Ok(())
    }

    /// Convenience boolean form of [`IndexedEventHeap::validate_order`].
    pub fn is_ordered(&self) -> bool {
        self.validate_order().is_ok()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.locator.insert(self.heap[a].process_index(), a);
        self.locator.insert(self.heap[b].process_index(), b);
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos] < self.heap[parent] {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) -> usize {
        loop {
            let left = 2 * pos + 1;
            let right = 2 * pos + 2;
            let mut smallest = pos;
            if left < self.heap.len() && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == pos {
                return pos;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}

impl<P: Process> Default for IndexedEventHeap<P> {
    fn default() -> Self {
        IndexedEventHeap::new()
    }
}
