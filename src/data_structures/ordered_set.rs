use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::data_structures::Frontier;

/// A frontier backed by an ordered set of `(distance, vertex)` pairs
///
/// Decrease-key is expressed as `remove(old) + insert(new)`, both `O(log n)`.
#[derive(Debug, Clone)]
pub struct OrderedFrontier<W>
where
    W: Ord + Copy + Debug,
{
    pairs: BTreeSet<(W, usize)>,
}

impl<W> OrderedFrontier<W>
where
    W: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        OrderedFrontier {
            pairs: BTreeSet::new(),
        }
    }
}

impl<W> Default for OrderedFrontier<W>
where
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Frontier<W> for OrderedFrontier<W>
where
    W: Ord + Copy + Debug,
{
    fn insert(&mut self, distance: W, vertex: usize) {
        let inserted = self.pairs.insert((distance, vertex));
        debug_assert!(inserted, "pair ({:?}, {}) already present", distance, vertex);
    }

    fn extract_min(&mut self) -> Option<(W, usize)> {
        self.pairs.pop_first()
    }

    fn remove(&mut self, distance: W, vertex: usize) -> bool {
        self.pairs.remove(&(distance, vertex))
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_by_distance_then_vertex() {
        let mut frontier = OrderedFrontier::new();
        frontier.insert(5u32, 0);
        frontier.insert(2, 7);
        frontier.insert(2, 3);
        frontier.insert(9, 1);

        assert_eq!(frontier.extract_min(), Some((2, 3)));
        assert_eq!(frontier.extract_min(), Some((2, 7)));
        assert_eq!(frontier.extract_min(), Some((5, 0)));
        assert_eq!(frontier.extract_min(), Some((9, 1)));
        assert_eq!(frontier.extract_min(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn decrease_key_by_remove_and_reinsert() {
        let mut frontier = OrderedFrontier::new();
        frontier.insert(10u64, 1);
        frontier.insert(4, 2);

        assert!(frontier.remove(10, 1));
        frontier.insert(3, 1);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.extract_min(), Some((3, 1)));
    }

    #[test]
    fn remove_requires_exact_pair() {
        let mut frontier = OrderedFrontier::new();
        frontier.insert(6u8, 4);
        assert!(!frontier.remove(5, 4));
        assert!(!frontier.remove(6, 3));
        assert_eq!(frontier.len(), 1);
    }
}
