use std::fmt::Debug;
use num_traits::PrimInt;

/// Trait representing a weighted directed graph with positional vertices `0..n`
///
/// A stored weight of `W::zero()` means the edge is absent.
pub trait Graph<W>: Debug
where
    W: PrimInt + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the stored weight from `from` to `to`, `0` meaning "no edge"
    ///
    /// # Panics
    ///
    /// Panics if either vertex is outside `0..vertex_count()`.
    fn weight_of(&self, from: usize, to: usize) -> W;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }
        let weight = self.weight_of(from, to);
        (weight != W::zero()).then_some(weight)
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges<'a>(&'a self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + 'a>
    where
        W: 'a,
    {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            (0..self.vertex_count())
                .filter_map(move |to| self.edge_weight(vertex, to).map(|w| (to, w))),
        )
    }

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .map(|v| self.outgoing_edges(v).count())
            .sum()
    }
}
