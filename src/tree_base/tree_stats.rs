use super::{iter::PreOrderIter, node::Node, TreeKey};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub size: usize,
    pub leaves: usize,
    pub inner_nodes: usize,
    /// Edge count of the longest root-to-leaf path; `None` for an empty tree.
    pub height: Option<usize>,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn collect<K: TreeKey>(root: Option<&Node<K>>) -> Self {
        let mut stats = Self::new();
        for node in PreOrderIter::new(root) {
            stats.size += 1;
            if node.is_leaf() {
                stats.leaves += 1;
            } else {
                stats.inner_nodes += 1;
            }
        }
        stats.height = root.map(subtree_height);
        stats
    }

    pub fn nodes(&self) -> usize {
        self.inner_nodes + self.leaves
    }

    /// Height of a midpoint-built tree holding the same number of keys.
    pub fn ideal_height(&self) -> Option<usize> {
        if self.size == 0 {
            None
        } else {
            Some(self.size.ilog2() as usize)
        }
    }
}

/// Height of the subtree rooted at `node`, where a leaf has height 0.
pub(crate) fn subtree_height<K: TreeKey>(node: &Node<K>) -> usize {
    let lh = node.left().map_or(0, |l| subtree_height(l) + 1);
    let rh = node.right().map_or(0, |r| subtree_height(r) + 1);
    lh.max(rh)
}

#[cfg(test)]
#[test]
fn test_tree_stats() {
    let mut root = Node::new(2);
    root.left = Some(Box::new(Node::new(1)));
    root.right = Some(Box::new(Node::new(3)));

    let stats = TreeStats::collect(Some(&root));
    assert_eq!(stats.size, 3);
    assert_eq!(stats.nodes(), 3);
    assert_eq!(stats.leaves, 2);
    assert_eq!(stats.inner_nodes, 1);
    assert_eq!(stats.height, Some(1));
    assert_eq!(stats.ideal_height(), Some(1));

    let empty = TreeStats::collect::<i32>(None);
    assert_eq!(empty, TreeStats::new());
    assert_eq!(empty.ideal_height(), None);
}
