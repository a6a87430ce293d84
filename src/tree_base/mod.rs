pub mod balance;
pub mod deletion;
pub mod iter;
mod macros;
pub mod node;
pub mod tree;
pub mod tree_stats;

use std::fmt::Debug;

/// Bounds every key type must satisfy: a total order, plus `Clone` for
/// successor copies and rebuilds and `Debug` for logging and rendering.
pub trait TreeKey: Ord + Clone + Debug {}

impl<T> TreeKey for T where T: Ord + Clone + Debug {}
