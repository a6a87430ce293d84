use crate::tree_base::{
    iter::{Traversal, TraversalOrder},
    tree::Tree,
    TreeKey,
};

/// Ordered set of unique keys backed by a [`Tree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BstSet<K: TreeKey> {
    _tree: Tree<K>,
}

impl<K: TreeKey> BstSet<K> {
    pub fn new() -> Self {
        Self {
            _tree: Tree::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self._tree.is_empty()
    }

    pub fn len(&self) -> usize {
        self._tree.len()
    }

    pub fn contains(&self, key: &K) -> bool {
        self._tree.contains(key)
    }

    /// Returns `true` if `key` was not already present.
    pub fn insert(&mut self, key: K) -> bool {
        self._tree.insert_new(key)
    }

    /// Returns `true` if `key` was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self._tree.delete_with_result(key).is_removed()
    }

    pub fn first(&self) -> Option<&K> {
        self._tree.min()
    }

    pub fn last(&self) -> Option<&K> {
        self._tree.max()
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        Traversal::new(self._tree.root(), TraversalOrder::InOrder).map(|n| n.key())
    }

    pub fn is_balanced(&self) -> bool {
        self._tree.is_balanced()
    }

    pub fn rebalance(&mut self) {
        self._tree.rebalance();
    }

    pub fn as_tree(&self) -> &Tree<K> {
        &self._tree
    }
}

impl<K: TreeKey> Default for BstSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TreeKey> FromIterator<K> for BstSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            _tree: Tree::new(iter),
        }
    }
}

impl<K: TreeKey> From<Tree<K>> for BstSet<K> {
    fn from(tree: Tree<K>) -> Self {
        Self { _tree: tree }
    }
}
