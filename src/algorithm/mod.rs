pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
