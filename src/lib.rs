//! Matrix SSSP - single-source shortest path distances over dense adjacency matrices
//!
//! The graph is a square matrix of non-negative integer weights where a weight of `0`
//! means "no edge". Consequently every real edge has weight `>= 1`; a zero-cost edge
//! cannot be expressed in this representation.
//!
//! Distances are computed with Dijkstra's algorithm over an ordered frontier of
//! `(distance, vertex)` pairs. Ties are broken by the smaller vertex index, so a run
//! is fully deterministic. Unreachable vertices keep the infinite sentinel, which is
//! the maximum value of the weight type.
//!
//! ```
//! use matrix_sssp::{AdjacencyMatrix, Dijkstra, ShortestPathAlgorithm};
//!
//! let graph = AdjacencyMatrix::from_rows(&[
//!     [0u32, 4, 1, 0],
//!     [0, 0, 0, 1],
//!     [0, 2, 0, 0],
//!     [0, 0, 0, 0],
//! ]).unwrap();
//!
//! let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
//! assert_eq!(result.distances, vec![0, 3, 1, 4]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::FrontierKind;
/// Re-export main types for convenient use
pub use graph::matrix::AdjacencyMatrix;

/// Structural problems detected while building a graph view
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphDefect {
    #[error("matrix has no vertices")]
    Empty,

    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("negative weight on edge from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("edge from {from} to {to} leaves the vertex range 0..{vertex_count}")]
    EdgeOutOfRange {
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("{vertex_count} vertices do not fit in an adjacency matrix")]
    TooLarge { vertex_count: usize },

    #[error("edge from {from} to {to} has weight 0, which is reserved for \"no edge\"")]
    ZeroWeightEdge { from: usize, to: usize },
}

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] GraphDefect),

    #[error("Invalid source vertex {index}: graph has {vertex_count} vertices")]
    InvalidSource { index: i64, vertex_count: usize },
}

impl Error {
    /// Builds an `InvalidSource` error for an unsigned index
    pub(crate) fn invalid_source(index: usize, vertex_count: usize) -> Self {
        Error::InvalidSource {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            vertex_count,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
