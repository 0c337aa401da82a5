use std::fmt::Debug;
use log::debug;
use num_traits::PrimInt;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Brute-force relaxation of every edge until nothing changes
///
/// Runs in `O(n * m)` and is meant as a reference to check faster algorithms against.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::invalid_source(source, n));
        }

        let infinity = W::max_value();
        let mut distances = vec![infinity; n];
        distances[source] = W::zero();

        let mut rounds = 0;
        for _ in 1..n {
            rounds += 1;
            let mut changed = false;
            for u in 0..n {
                if distances[u] == infinity {
                    continue;
                }
                for (v, weight) in graph.outgoing_edges(u) {
                    if let Some(candidate) = distances[u].checked_add(&weight) {
                        if candidate < infinity && candidate < distances[v] {
                            distances[v] = candidate;
                            changed = true;
                        }
                    }
                }
            }
            if !changed {
                break;
            }
        }

        debug!("Bellman-Ford from {} settled after {} rounds", source, rounds);
        Ok(ShortestPathResult { distances, source })
    }
}
