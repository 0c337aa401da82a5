use std::fmt::Debug;
use log::debug;
use num_traits::PrimInt;

use crate::graph::Graph;
use crate::{Error, GraphDefect, Result};

/// An immutable, validated N×N weight matrix stored row-major
///
/// The matrix owns a private copy of its weights, so a run can never observe a
/// mutation made by the caller. A stored weight of `0` means "no edge".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<W>
where
    W: PrimInt + Debug,
{
    /// Number of vertices (the matrix dimension)
    vertex_count: usize,

    /// Row-major weights, `weights[from * vertex_count + to]`
    weights: Vec<W>,
}

impl<W> AdjacencyMatrix<W>
where
    W: PrimInt + Debug,
{
    /// Builds a matrix from its rows, copying the weights
    ///
    /// Fails with [`Error::InvalidGraph`] if there are no rows, if any row length
    /// differs from the number of rows, or if any weight is negative.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[W]>,
    {
        let n = rows.len();
        if n == 0 {
            return Err(GraphDefect::Empty.into());
        }

        let mut weights = Vec::with_capacity(cell_count(n)?);
        for (from, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(GraphDefect::RaggedRow {
                    row: from,
                    len: row.len(),
                    expected: n,
                }
                .into());
            }
            if let Some(to) = row.iter().position(|&w| w < W::zero()) {
                return Err(GraphDefect::NegativeWeight { from, to }.into());
            }
            weights.extend_from_slice(row);
        }

        debug!("Built {}x{} adjacency matrix", n, n);
        Ok(AdjacencyMatrix {
            vertex_count: n,
            weights,
        })
    }

    /// Builds a matrix with `vertex_count` vertices from a directed edge list
    ///
    /// Every edge must have both endpoints in range and a weight of at least 1; an
    /// explicit zero weight is rejected rather than silently read as "no edge".
    /// When the same `(from, to)` pair appears twice the last weight wins.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        if vertex_count == 0 {
            return Err(GraphDefect::Empty.into());
        }

        let mut weights = vec![W::zero(); cell_count(vertex_count)?];
        let mut added = 0usize;
        for (from, to, weight) in edges {
            if from >= vertex_count || to >= vertex_count {
                return Err(GraphDefect::EdgeOutOfRange {
                    from,
                    to,
                    vertex_count,
                }
                .into());
            }
            if weight < W::zero() {
                return Err(GraphDefect::NegativeWeight { from, to }.into());
            }
            if weight == W::zero() {
                return Err(GraphDefect::ZeroWeightEdge { from, to }.into());
            }
            weights[from * vertex_count + to] = weight;
            added += 1;
        }

        debug!(
            "Built {}x{} adjacency matrix from {} edges",
            vertex_count, vertex_count, added
        );
        Ok(AdjacencyMatrix {
            vertex_count,
            weights,
        })
    }

    /// Maps a signed, caller-provided index to a vertex of this graph
    ///
    /// Negative indices and indices `>= vertex_count()` fail with
    /// [`Error::InvalidSource`].
    pub fn resolve_source(&self, raw: i64) -> Result<usize> {
        usize::try_from(raw)
            .ok()
            .filter(|&vertex| vertex < self.vertex_count)
            .ok_or(Error::InvalidSource {
                index: raw,
                vertex_count: self.vertex_count,
            })
    }

    /// Returns the outgoing weights of `vertex`, one entry per target
    ///
    /// # Panics
    ///
    /// Panics if `vertex >= vertex_count()`.
    pub fn row(&self, vertex: usize) -> &[W] {
        let start = vertex * self.vertex_count;
        &self.weights[start..start + self.vertex_count]
    }
}

/// Number of cells in an `n`×`n` matrix, failing instead of overflowing
fn cell_count(n: usize) -> Result<usize> {
    n.checked_mul(n)
        .ok_or(Error::InvalidGraph(GraphDefect::TooLarge { vertex_count: n }))
}

impl<W> Graph<W> for AdjacencyMatrix<W>
where
    W: PrimInt + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn weight_of(&self, from: usize, to: usize) -> W {
        self.row(from)[to]
    }
}

impl<W> TryFrom<Vec<Vec<W>>> for AdjacencyMatrix<W>
where
    W: PrimInt + Debug,
{
    type Error = Error;

    fn try_from(rows: Vec<Vec<W>>) -> Result<Self> {
        AdjacencyMatrix::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let rows: Vec<Vec<u32>> = vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0]];
        let err = AdjacencyMatrix::try_from(rows).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidGraph(GraphDefect::RaggedRow {
                row: 2,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn rejects_wide_rectangle() {
        let err = AdjacencyMatrix::from_rows(&[[0u8, 1, 2], [0, 0, 0]]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGraph(GraphDefect::RaggedRow { row: 0, len: 3, expected: 2 })
        ));
    }

    #[test]
    fn rejects_empty_matrix() {
        let rows: Vec<Vec<u64>> = Vec::new();
        assert_eq!(
            AdjacencyMatrix::from_rows(&rows).unwrap_err(),
            Error::InvalidGraph(GraphDefect::Empty)
        );
        assert_eq!(
            AdjacencyMatrix::<u64>::from_edges(0, Vec::new()).unwrap_err(),
            Error::InvalidGraph(GraphDefect::Empty)
        );
    }

    #[test]
    fn rejects_negative_weights() {
        let err = AdjacencyMatrix::from_rows(&[[0i32, 3], [-1, 0]]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidGraph(GraphDefect::NegativeWeight { from: 1, to: 0 })
        );
    }

    #[test]
    fn exposes_weights_and_edges() {
        let graph = AdjacencyMatrix::from_rows(&[[0u32, 7, 0], [0, 0, 2], [5, 0, 0]]).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.weight_of(0, 1), 7);
        assert_eq!(graph.weight_of(0, 2), 0);
        assert_eq!(graph.edge_weight(2, 0), Some(5));
        assert_eq!(graph.edge_weight(0, 2), None);
        assert_eq!(graph.edge_weight(0, 9), None);
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 1));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.outgoing_edges(1).collect::<Vec<_>>(), vec![(2, 2)]);
        assert_eq!(graph.outgoing_edges(7).count(), 0);
        assert_eq!(graph.row(2), &[5, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn weight_of_out_of_range_panics() {
        let graph = AdjacencyMatrix::from_rows(&[[0u32, 1], [1, 0]]).unwrap();
        graph.weight_of(0, 2);
    }

    #[test]
    fn from_edges_matches_rows() {
        let from_edges =
            AdjacencyMatrix::from_edges(4, vec![(0, 1, 4u32), (0, 2, 1), (2, 1, 2), (1, 3, 1)])
                .unwrap();
        let from_rows = AdjacencyMatrix::from_rows(&[
            [0u32, 4, 1, 0],
            [0, 0, 0, 1],
            [0, 2, 0, 0],
            [0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(from_edges, from_rows);
    }

    #[test]
    fn from_edges_last_weight_wins() {
        let graph = AdjacencyMatrix::from_edges(2, vec![(0, 1, 9u16), (0, 1, 3)]).unwrap();
        assert_eq!(graph.weight_of(0, 1), 3);
    }

    #[test]
    fn from_edges_rejects_bad_edges() {
        assert_eq!(
            AdjacencyMatrix::from_edges(2, vec![(0, 2, 1u32)]).unwrap_err(),
            Error::InvalidGraph(GraphDefect::EdgeOutOfRange {
                from: 0,
                to: 2,
                vertex_count: 2
            })
        );
        assert_eq!(
            AdjacencyMatrix::from_edges(2, vec![(1, 0, 0u32)]).unwrap_err(),
            Error::InvalidGraph(GraphDefect::ZeroWeightEdge { from: 1, to: 0 })
        );
        assert_eq!(
            AdjacencyMatrix::from_edges(2, vec![(1, 0, -4i64)]).unwrap_err(),
            Error::InvalidGraph(GraphDefect::NegativeWeight { from: 1, to: 0 })
        );
    }

    #[test]
    fn from_edges_rejects_overflowing_dimension() {
        let vertex_count = usize::MAX / 2;
        assert_eq!(
            AdjacencyMatrix::<u32>::from_edges(vertex_count, Vec::new()).unwrap_err(),
            Error::InvalidGraph(GraphDefect::TooLarge { vertex_count })
        );
    }

    #[test]
    fn resolve_source_bounds() {
        let graph = AdjacencyMatrix::from_rows(&[[0u32; 4]; 4]).unwrap();
        assert_eq!(graph.resolve_source(0), Ok(0));
        assert_eq!(graph.resolve_source(3), Ok(3));
        assert_eq!(
            graph.resolve_source(4),
            Err(Error::InvalidSource {
                index: 4,
                vertex_count: 4
            })
        );
        assert_eq!(
            graph.resolve_source(-1),
            Err(Error::InvalidSource {
                index: -1,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn caller_mutation_does_not_leak_into_view() {
        let mut rows = vec![vec![0u32, 1], vec![0, 0]];
        let graph = AdjacencyMatrix::from_rows(&rows).unwrap();
        rows[0][1] = 50;
        assert_eq!(graph.weight_of(0, 1), 1);
    }
}
