use super::TreeKey;

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single tree node. Each node exclusively owns both of its subtrees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K: TreeKey> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K: TreeKey> Node<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Leftmost node of the subtree rooted here.
    pub fn min_node(&self) -> &Node<K> {
        let mut curr = self;
        while let Some(left) = curr.left.as_deref() {
            curr = left;
        }
        curr
    }

    /// Rightmost node of the subtree rooted here.
    pub fn max_node(&self) -> &Node<K> {
        let mut curr = self;
        while let Some(right) = curr.right.as_deref() {
            curr = right;
        }
        curr
    }
}
