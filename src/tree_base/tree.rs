use std::{cmp::Ordering, fmt};

use crate::error::Result;

use super::{
    balance::BalanceCheck,
    deletion::{DeletionResult, DeletionResultFlags},
    iter::{LevelOrderIter, Traversal, TraversalOrder},
    macros::require_callback,
    node::{Link, Node},
    tree_stats::{subtree_height, TreeStats},
    TreeKey,
};

/// Binary search tree that is balanced on construction and on demand via
/// [`Tree::rebalance`]. Insertion and deletion never restructure the tree.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<K: TreeKey> {
    root_: Link<K>,
    size_: usize,
}

/// Construction
impl<K: TreeKey> Tree<K> {
    /// Builds a height-balanced tree from `items`, dropping duplicates.
    pub fn new<I: IntoIterator<Item = K>>(items: I) -> Self {
        let mut keys: Vec<K> = items.into_iter().collect();
        keys.sort();
        keys.dedup();

        log::debug!("Tree::new with {} unique keys", keys.len());

        Self {
            root_: Self::build_recursive(&keys),
            size_: keys.len(),
        }
    }

    pub fn empty() -> Self {
        Self {
            root_: None,
            size_: 0,
        }
    }

    // `keys` must be sorted and free of duplicates.
    fn build_recursive(keys: &[K]) -> Link<K> {
        if keys.is_empty() {
            return None;
        }

        let mid = (keys.len() - 1) / 2;
        let mut node = Node::new(keys[mid].clone());
        node.left = Self::build_recursive(&keys[..mid]);
        node.right = Self::build_recursive(&keys[mid + 1..]);

        Some(Box::new(node))
    }
}

/// Access functions to the item count
impl<K: TreeKey> Tree<K> {
    pub fn len(&self) -> usize {
        self.size_
    }

    pub fn is_empty(&self) -> bool {
        self.root_.is_none()
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.root_.as_deref()
    }

    pub fn get_stats(&self) -> TreeStats {
        TreeStats::collect(self.root())
    }
}

/// Insertion and deletion
impl<K: TreeKey> Tree<K> {
    /// Places `key` in the first empty slot found by descent. An existing key
    /// leaves the tree unchanged. Never rebalances.
    pub fn insert(&mut self, key: K) {
        self.insert_new(key);
    }

    /// Same as [`Tree::insert`], returning whether `key` was absent.
    pub fn insert_new(&mut self, key: K) -> bool {
        let inserted = Self::insert_recursive(&mut self.root_, key);
        if inserted {
            self.size_ += 1;
        }
        inserted
    }

    fn insert_recursive(link: &mut Link<K>, key: K) -> bool {
        match link {
            None => {
                log::trace!("Tree::insert placed {:?}", key);
                *link = Some(Box::new(Node::new(key)));
                true
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_recursive(&mut node.left, key),
                Ordering::Greater => Self::insert_recursive(&mut node.right, key),
                Ordering::Equal => {
                    log::trace!("Tree::insert ignored duplicate {:?}", key);
                    false
                }
            },
        }
    }

    /// Removes `key` if present. A missing key is a silent no-op.
    pub fn delete(&mut self, key: &K) {
        self.delete_with_result(key);
    }

    /// Same as [`Tree::delete`], reporting which removal case ran.
    pub fn delete_with_result(&mut self, key: &K) -> DeletionResult {
        let result = Self::delete_recursive(&mut self.root_, key);
        if result.is_removed() {
            self.size_ -= 1;
        }

        log::debug!(
            "Tree::delete({:?}) -> {:?}, size {}",
            key,
            result.flags,
            self.size_
        );

        result
    }

    fn delete_recursive(link: &mut Link<K>, key: &K) -> DeletionResult {
        let Some(node) = link.as_mut() else {
            return DeletionResult::new(DeletionResultFlags::NotFound);
        };

        match key.cmp(&node.key) {
            Ordering::Less => return Self::delete_recursive(&mut node.left, key),
            Ordering::Greater => return Self::delete_recursive(&mut node.right, key),
            Ordering::Equal => {}
        }

        if node.left.is_some() {
            if let Some(right) = node.right.as_deref() {
                // in-order successor takes this node's place
                let successor = right.min_node().key.clone();
                Self::delete_recursive(&mut node.right, &successor);
                node.key = successor;
                return DeletionResult::new(DeletionResultFlags::TwoChildren);
            }
        }

        let flags = if node.is_leaf() {
            DeletionResultFlags::Leaf
        } else {
            DeletionResultFlags::OneChild
        };
        let child = node.left.take().or_else(|| node.right.take());
        *link = child;

        DeletionResult::new(flags)
    }

    /// Collects every key in order and rebuilds the tree by midpoint
    /// selection, restoring balance regardless of prior mutations.
    pub fn rebalance(&mut self) {
        let mut keys = self.keys();
        keys.dedup();

        log::debug!(
            "Tree::rebalance {} keys, height {:?} -> {:?}",
            keys.len(),
            self.root().map(subtree_height),
            keys.len().checked_ilog2()
        );

        self.root_ = Self::build_recursive(&keys);
        self.size_ = keys.len();
    }
}

/// Lookup and shape queries
impl<K: TreeKey> Tree<K> {
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        let mut curr = self.root();
        while let Some(node) = curr {
            curr = match key.cmp(&node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub fn min(&self) -> Option<&K> {
        self.root().map(|n| n.min_node().key())
    }

    pub fn max(&self) -> Option<&K> {
        self.root().map(|n| n.max_node().key())
    }

    /// Height of the subtree holding `key`, where a leaf has height 0.
    /// `None` if `key` is absent.
    pub fn height(&self, key: &K) -> Option<usize> {
        self.find(key).map(subtree_height)
    }

    /// Number of edges from the root to the node holding `key`.
    /// `None` if `key` is absent.
    pub fn depth(&self, key: &K) -> Option<usize> {
        let mut curr = self.root();
        let mut depth = 0;
        while let Some(node) = curr {
            curr = match key.cmp(&node.key) {
                Ordering::Equal => return Some(depth),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        None
    }

    pub fn balance_check(&self) -> BalanceCheck {
        BalanceCheck::of(self.root())
    }

    /// True if no node's child subtrees differ in height by more than one.
    pub fn is_balanced(&self) -> bool {
        self.balance_check().is_balanced()
    }
}

/// Traversals
impl<K: TreeKey> Tree<K> {
    pub fn iter(&self, order: TraversalOrder) -> Traversal<'_, K> {
        Traversal::new(self.root(), order)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Vec<K> {
        self.iter(TraversalOrder::InOrder)
            .map(|n| n.key.clone())
            .collect()
    }

    pub fn traverse<F>(&self, order: TraversalOrder, callback: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<K>),
    {
        match order {
            TraversalOrder::LevelOrder => self.level_order(callback),
            TraversalOrder::PreOrder => self.pre_order(callback),
            TraversalOrder::InOrder => self.in_order(callback),
            TraversalOrder::PostOrder => self.post_order(callback),
        }
    }

    pub fn level_order<F>(&self, callback: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<K>),
    {
        let mut f = require_callback!(callback, "level_order");
        LevelOrderIter::new(self.root()).for_each(|n| f(n));
        Ok(())
    }

    pub fn pre_order<F>(&self, callback: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<K>),
    {
        let mut f = require_callback!(callback, "pre_order");
        Self::pre_order_recursive(self.root(), &mut f);
        Ok(())
    }

    pub fn in_order<F>(&self, callback: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<K>),
    {
        let mut f = require_callback!(callback, "in_order");
        Self::in_order_recursive(self.root(), &mut f);
        Ok(())
    }

    pub fn post_order<F>(&self, callback: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<K>),
    {
        let mut f = require_callback!(callback, "post_order");
        Self::post_order_recursive(self.root(), &mut f);
        Ok(())
    }

    fn pre_order_recursive<F: FnMut(&Node<K>)>(node: Option<&Node<K>>, f: &mut F) {
        if let Some(n) = node {
            f(n);
            Self::pre_order_recursive(n.left(), f);
            Self::pre_order_recursive(n.right(), f);
        }
    }

    fn in_order_recursive<F: FnMut(&Node<K>)>(node: Option<&Node<K>>, f: &mut F) {
        if let Some(n) = node {
            Self::in_order_recursive(n.left(), f);
            f(n);
            Self::in_order_recursive(n.right(), f);
        }
    }

    fn post_order_recursive<F: FnMut(&Node<K>)>(node: Option<&Node<K>>, f: &mut F) {
        if let Some(n) = node {
            Self::post_order_recursive(n.left(), f);
            Self::post_order_recursive(n.right(), f);
            f(n);
        }
    }
}

/// Debug
impl<K: TreeKey> Tree<K> {
    /// Branch drawing of the tree, right subtree above its parent and left
    /// subtree below. Empty for an empty tree.
    pub fn pretty_print(&self) -> String {
        self.to_string()
    }

    fn pretty_print_node(
        f: &mut impl fmt::Write,
        node: &Node<K>,
        prefix: &str,
        is_left: bool,
    ) -> fmt::Result {
        if let Some(right) = node.right() {
            let child_prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
            Self::pretty_print_node(f, right, &child_prefix, false)?;
        }

        writeln!(
            f,
            "{}{}{:?}",
            prefix,
            if is_left { "└── " } else { "┌── " },
            node.key
        )?;

        if let Some(left) = node.left() {
            let child_prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
            Self::pretty_print_node(f, left, &child_prefix, true)?;
        }

        Ok(())
    }

    fn print_node(f: &mut fmt::Formatter<'_>, node: &Node<K>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }

        writeln!(
            f,
            "node {:?} left {:?} right {:?}",
            node.key,
            node.left().map(|n| &n.key),
            node.right().map(|n| &n.key)
        )?;

        for child in [node.left(), node.right()].into_iter().flatten() {
            Self::print_node(f, child, depth + 1)?;
        }

        Ok(())
    }
}

impl<K: TreeKey> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size {}", self.size_)?;
        if let Some(root) = self.root() {
            Self::print_node(f, root, 0)?;
        }

        Ok(())
    }
}

/// Display
impl<K: TreeKey> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => Self::pretty_print_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

impl<K: TreeKey> Default for Tree<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: TreeKey> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<K: TreeKey> From<Vec<K>> for Tree<K> {
    fn from(items: Vec<K>) -> Self {
        Self::new(items)
    }
}

impl<K: TreeKey> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
