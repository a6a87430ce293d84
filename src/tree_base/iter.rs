use std::collections::VecDeque;

use super::{node::Node, TreeKey};

/// Visit order for [`Tree::iter`](super::tree::Tree::iter) and the callback traversals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    LevelOrder,
    PreOrder,
    InOrder,
    PostOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::LevelOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TraversalOrder::LevelOrder => "level_order",
            TraversalOrder::PreOrder => "pre_order",
            TraversalOrder::InOrder => "in_order",
            TraversalOrder::PostOrder => "post_order",
        }
    }
}

/// Breadth-first, FIFO order.
#[derive(Clone, Debug)]
pub struct LevelOrderIter<'a, K: TreeKey> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K: TreeKey> LevelOrderIter<'a, K> {
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K: TreeKey> Iterator for LevelOrderIter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

/// Node, then left subtree, then right subtree.
#[derive(Clone, Debug)]
pub struct PreOrderIter<'a, K: TreeKey> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K: TreeKey> PreOrderIter<'a, K> {
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K: TreeKey> Iterator for PreOrderIter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// Left subtree, then node, then right subtree. Yields keys in ascending order.
#[derive(Clone, Debug)]
pub struct InOrderIter<'a, K: TreeKey> {
    stack: Vec<&'a Node<K>>,
    curr: Option<&'a Node<K>>,
}

impl<'a, K: TreeKey> InOrderIter<'a, K> {
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: Vec::new(),
            curr: root,
        }
    }
}

impl<'a, K: TreeKey> Iterator for InOrderIter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.curr {
            self.stack.push(node);
            self.curr = node.left();
        }
        let node = self.stack.pop()?;
        self.curr = node.right();
        Some(node)
    }
}

/// Left subtree, then right subtree, then node.
#[derive(Clone, Debug)]
pub struct PostOrderIter<'a, K: TreeKey> {
    // (node, children already scheduled)
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K: TreeKey> PostOrderIter<'a, K> {
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, K: TreeKey> Iterator for PostOrderIter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

/// Any of the four traversals, chosen at runtime.
#[derive(Clone, Debug)]
pub enum Traversal<'a, K: TreeKey> {
    LevelOrder(LevelOrderIter<'a, K>),
    PreOrder(PreOrderIter<'a, K>),
    InOrder(InOrderIter<'a, K>),
    PostOrder(PostOrderIter<'a, K>),
}

impl<'a, K: TreeKey> Traversal<'a, K> {
    pub fn new(root: Option<&'a Node<K>>, order: TraversalOrder) -> Self {
        match order {
            TraversalOrder::LevelOrder => Traversal::LevelOrder(LevelOrderIter::new(root)),
            TraversalOrder::PreOrder => Traversal::PreOrder(PreOrderIter::new(root)),
            TraversalOrder::InOrder => Traversal::InOrder(InOrderIter::new(root)),
            TraversalOrder::PostOrder => Traversal::PostOrder(PostOrderIter::new(root)),
        }
    }
}

impl<'a, K: TreeKey> Iterator for Traversal<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::LevelOrder(it) => it.next(),
            Traversal::PreOrder(it) => it.next(),
            Traversal::InOrder(it) => it.next(),
            Traversal::PostOrder(it) => it.next(),
        }
    }
}
