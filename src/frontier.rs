/*
Frontier structures for Dijkstra.

Two flavors, selectable per run:

Lazy: a BTreeSet of (distance, vertex, sequence id). A relaxation tries to remove the
vertex's previous entry under sequence id 0 before inserting the improved one. Entries
are inserted with fresh ids, so that removal almost never hits and stale entries pile up
until the staleness check in the engine discards them on extraction.

DecreaseKey: an addressable binary heap keyed by slot. A relaxation lowers the key in
place, so every entry in the heap is current.

Both extract in (distance, vertex key) order.
*/

use orx_priority_queue::*;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::graph::{Slot, VertexId};

pub type Distance = i64;

pub trait Frontier {
    fn push(&mut self, slot: Slot, vertex: VertexId, distance: Distance);

    /// `vertex` improved from `old` (None when it was unreached) to `new`.
    fn relax(&mut self, slot: Slot, vertex: VertexId, old: Option<Distance>, new: Distance);

    fn pop_min(&mut self) -> Option<(Distance, Slot)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    distance: Distance,
    vertex: VertexId,
    seq: u64,
    // Never decides ordering, seq is unique per entry.
    slot: Slot,
}

#[derive(Debug, Default)]
pub struct LazyFrontier {
    entries: BTreeSet<Entry>,
    next_seq: u64,
}

impl LazyFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LazyFrontier {
    fn push(&mut self, slot: Slot, vertex: VertexId, distance: Distance) {
        self.entries.insert(Entry {
            distance,
            vertex,
            seq: self.next_seq,
            slot,
        });
        self.next_seq += 1;
    }

    fn relax(&mut self, slot: Slot, vertex: VertexId, old: Option<Distance>, new: Distance) {
        if let Some(old) = old {
            // Only matches an entry that was pushed first; the rest stay behind as stale.
            self.entries.remove(&Entry {
                distance: old,
                vertex,
                seq: 0,
                slot,
            });
        }
        self.push(slot, vertex, new);
    }

    fn pop_min(&mut self) -> Option<(Distance, Slot)> {
        self.entries.pop_first().map(|e| (e.distance, e.slot))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug)]
pub struct DecreaseKeyFrontier {
    pq: BinaryHeapWithMap<Slot, (Distance, VertexId)>,
}

impl DecreaseKeyFrontier {
    pub fn new() -> Self {
        Self {
            pq: BinaryHeapWithMap::new(),
        }
    }
}

impl Default for DecreaseKeyFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier for DecreaseKeyFrontier {
    fn push(&mut self, slot: Slot, vertex: VertexId, distance: Distance) {
        self.pq.decrease_key_or_push(&slot, (distance, vertex));
    }

    fn relax(&mut self, slot: Slot, vertex: VertexId, _old: Option<Distance>, new: Distance) {
        self.pq.decrease_key_or_push(&slot, (new, vertex));
    }

    fn pop_min(&mut self) -> Option<(Distance, Slot)> {
        self.pq.pop().map(|(slot, (distance, _))| (distance, slot))
    }

    fn len(&self) -> usize {
        self.pq.len()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    #[default]
    Lazy,
    DecreaseKey,
}

impl FromStr for FrontierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lazy" => Ok(FrontierKind::Lazy),
            "decrease-key" => Ok(FrontierKind::DecreaseKey),
            _ => Err(format!(
                "Frontier not found for input string: {}, possible options are: (\"lazy\", \"decrease-key\")",
                s
            )),
        }
    }
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontierKind::Lazy => write!(f, "lazy"),
            FrontierKind::DecreaseKey => write!(f, "decrease-key"),
        }
    }
}
