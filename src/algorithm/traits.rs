use std::fmt::Debug;
use num_traits::PrimInt;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// `distances[v]` is the shortest distance from `source` to `v`, or
/// [`infinity()`](Self::infinity) (`W::max_value()`) when `v` is unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Debug,
{
    /// Distances from source to each vertex
    pub distances: Vec<W>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: PrimInt + Debug,
{
    /// The sentinel stored for unreachable vertices
    pub fn infinity() -> W {
        W::max_value()
    }

    /// Returns the distance to `vertex`, or `None` if it is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|&d| d != Self::infinity())
    }

    /// Returns true if `vertex` is reachable from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Returns the number of reachable vertices, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|&&d| d != Self::infinity())
            .count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    /// Compute shortest distances from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_hide_the_sentinel() {
        let result = ShortestPathResult {
            distances: vec![0u32, u32::MAX, 7],
            source: 0,
        };
        assert_eq!(result.distance(0), Some(0));
        assert_eq!(result.distance(1), None);
        assert_eq!(result.distance(2), Some(7));
        assert_eq!(result.distance(3), None);
        assert!(!result.is_reachable(1));
        assert_eq!(result.reachable_count(), 2);
        assert_eq!(ShortestPathResult::<u32>::infinity(), u32::MAX);
    }
}
