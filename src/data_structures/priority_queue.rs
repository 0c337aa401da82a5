use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::data_structures::Frontier;

/// A frontier backed by a binary heap with lazy deletion
///
/// `remove` only retires the vertex's live record; the superseded heap entry stays
/// behind and is discarded when it surfaces in `extract_min`. The heap orders
/// `Reverse((distance, vertex))`, which gives the same tie-breaking as the ordered set.
#[derive(Debug)]
pub struct LazyFrontier<W>
where
    W: Ord + Copy + Debug,
{
    /// The underlying binary heap, possibly holding stale entries
    heap: BinaryHeap<Reverse<(W, usize)>>,

    /// The distance each vertex is currently published with, if any
    live: Vec<Option<W>>,

    /// Number of live pairs
    len: usize,
}

impl<W> LazyFrontier<W>
where
    W: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty frontier sized for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        LazyFrontier {
            heap: BinaryHeap::with_capacity(vertices),
            live: vec![None; vertices],
            len: 0,
        }
    }
}

impl<W> Default for LazyFrontier<W>
where
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Frontier<W> for LazyFrontier<W>
where
    W: Ord + Copy + Debug,
{
    fn insert(&mut self, distance: W, vertex: usize) {
        if vertex >= self.live.len() {
            self.live.resize(vertex + 1, None);
        }
        debug_assert!(
            self.live[vertex].is_none(),
            "vertex {} already in frontier",
            vertex
        );
        if self.live[vertex].replace(distance).is_none() {
            self.len += 1;
        }
        self.heap.push(Reverse((distance, vertex)));
    }

    fn extract_min(&mut self) -> Option<(W, usize)> {
        while let Some(Reverse((distance, vertex))) = self.heap.pop() {
            if self.live[vertex] == Some(distance) {
                self.live[vertex] = None;
                self.len -= 1;
                return Some((distance, vertex));
            }
        }
        None
    }

    fn remove(&mut self, distance: W, vertex: usize) -> bool {
        match self.live.get_mut(vertex) {
            Some(slot) if *slot == Some(distance) => {
                *slot = None;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}
