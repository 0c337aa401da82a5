use std::fmt::Debug;
use log::{debug, trace, warn};
use num_traits::PrimInt;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{Frontier, FrontierKind, LazyFrontier, OrderedFrontier};
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm over a dense adjacency matrix
///
/// The engine holds configuration only. Distances, processed flags and the frontier
/// are created fresh for every call, so one instance (and one graph) can serve many
/// runs, including runs on different threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    /// Frontier implementation used by each run
    frontier: FrontierKind,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using the ordered frontier
    pub fn new() -> Self {
        Dijkstra {
            frontier: FrontierKind::Ordered,
        }
    }

    /// Set the frontier implementation
    pub fn with_frontier(mut self, kind: FrontierKind) -> Self {
        self.frontier = kind;
        self
    }

    /// Returns the configured frontier implementation
    pub fn frontier_kind(&self) -> FrontierKind {
        self.frontier
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::invalid_source(source, n));
        }

        let distances = match self.frontier {
            FrontierKind::Ordered => relax_from(graph, source, OrderedFrontier::new()),
            FrontierKind::Lazy => relax_from(graph, source, LazyFrontier::with_capacity(n)),
        };

        Ok(ShortestPathResult { distances, source })
    }
}

/// Runs the relaxation loop from `source`, which must be a valid vertex
///
/// Vertices move Unvisited -> Frontier -> Processed. Once processed, a vertex's
/// distance is final and it is never relaxed again.
fn relax_from<W, G, F>(graph: &G, source: usize, mut frontier: F) -> Vec<W>
where
    W: PrimInt + Debug,
    G: Graph<W>,
    F: Frontier<W>,
{
    let n = graph.vertex_count();
    let infinity = W::max_value();

    let mut distances = vec![infinity; n];
    let mut processed = vec![false; n];
    distances[source] = W::zero();
    frontier.insert(W::zero(), source);

    let mut extractions = 0usize;
    let mut improvements = 0usize;

    while let Some((dist_u, u)) = frontier.extract_min() {
        debug_assert_eq!(dist_u, distances[u], "frontier out of sync for vertex {}", u);
        processed[u] = true;
        extractions += 1;
        trace!("Processed vertex {} at distance {:?}", u, dist_u);

        // Unreachable vertices never enter the frontier
        if dist_u == infinity {
            continue;
        }

        for v in 0..n {
            if v == u || processed[v] {
                continue;
            }
            let weight = graph.weight_of(u, v);
            if weight == W::zero() {
                continue;
            }

            let candidate = match dist_u.checked_add(&weight) {
                Some(candidate) if candidate < infinity => candidate,
                _ => {
                    warn!(
                        "Discarding relaxation {} -> {}: {:?} + {:?} does not fit below the infinite sentinel",
                        u, v, dist_u, weight
                    );
                    continue;
                }
            };

            if candidate < distances[v] {
                if distances[v] != infinity {
                    let removed = frontier.remove(distances[v], v);
                    debug_assert!(removed, "vertex {} missing from frontier", v);
                }
                trace!("Vertex {} improved {:?} -> {:?} via {}", v, distances[v], candidate, u);
                distances[v] = candidate;
                frontier.insert(candidate, v);
                improvements += 1;
            }
        }
    }

    debug!(
        "Dijkstra from {} on {} vertices: {} extractions, {} improvements",
        source, n, extractions, improvements
    );
    distances
}
