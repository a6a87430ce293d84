use super::node::Node;
use super::TreeKey;

/// Result of the post-order balance check. Absent subtrees count as height 0,
/// so a leaf reports `Balanced(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceCheck {
    Balanced(usize),
    Unbalanced,
}

impl BalanceCheck {
    pub fn is_balanced(&self) -> bool {
        matches!(self, BalanceCheck::Balanced(_))
    }

    /// Checks `node` and its descendants, stopping at the first subtree whose
    /// child heights differ by more than one.
    pub fn of<K: TreeKey>(node: Option<&Node<K>>) -> Self {
        let Some(n) = node else {
            return BalanceCheck::Balanced(0);
        };

        let lh = match Self::of(n.left()) {
            BalanceCheck::Balanced(h) => h,
            BalanceCheck::Unbalanced => return BalanceCheck::Unbalanced,
        };
        let rh = match Self::of(n.right()) {
            BalanceCheck::Balanced(h) => h,
            BalanceCheck::Unbalanced => return BalanceCheck::Unbalanced,
        };

        if lh.abs_diff(rh) > 1 {
            log::trace!("BalanceCheck: node {:?} unbalanced ({} vs {})", n.key(), lh, rh);
            return BalanceCheck::Unbalanced;
        }

        BalanceCheck::Balanced(lh.max(rh) + 1)
    }
}
