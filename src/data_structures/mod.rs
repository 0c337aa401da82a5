pub mod frontier;
pub mod ordered_set;
pub mod priority_queue;

pub use frontier::{Frontier, FrontierKind};
pub use ordered_set::OrderedFrontier;
pub use priority_queue::LazyFrontier;
