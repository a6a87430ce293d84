//! A binary search tree over totally ordered keys.
//!
//! [`Tree`] is built height-balanced from any collection of keys (duplicates
//! dropped), supports insertion, deletion and lookup, and can be rebuilt into
//! balanced shape on demand with [`Tree::rebalance`]. Mutations never
//! rebalance on their own.
//!
//! ```
//! use balanced_bst::{Tree, TraversalOrder};
//!
//! let mut tree = Tree::new(vec![5, 3, 3, 8, 1]);
//! assert_eq!(tree.keys(), vec![1, 3, 5, 8]);
//! assert!(tree.is_balanced());
//!
//! tree.delete(&3);
//! let keys: Vec<i32> = tree.iter(TraversalOrder::InOrder).map(|n| *n.key()).collect();
//! assert_eq!(keys, vec![1, 5, 8]);
//! ```

pub mod bst_set;
pub mod error;
pub mod tree_base;

pub use bst_set::BstSet;
pub use error::{Result, TreeError};
pub use tree_base::{
    balance::BalanceCheck,
    deletion::{DeletionResult, DeletionResultFlags},
    iter::{Traversal, TraversalOrder},
    node::Node,
    tree::Tree,
    tree_stats::TreeStats,
    TreeKey,
};
