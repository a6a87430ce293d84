use bitmask_enum::bitmask;

/// Which case of removal ran for a deleted key.
#[bitmask(u8)]
pub enum DeletionResultFlags {
    NotFound = 1,
    Leaf = 2,
    OneChild = 4,
    TwoChildren = 8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeletionResult {
    pub flags: DeletionResultFlags,
}

impl DeletionResult {
    pub fn new(flags: DeletionResultFlags) -> Self {
        Self { flags }
    }

    pub fn has(&self, flag: DeletionResultFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn is_removed(&self) -> bool {
        !self.has(DeletionResultFlags::NotFound)
    }
}

#[cfg(test)]
#[test]
fn test_deletion_result_flags() {
    let missing = DeletionResult::new(DeletionResultFlags::NotFound);
    assert!(!missing.is_removed());
    assert!(!missing.has(DeletionResultFlags::Leaf));
    assert!(!missing.has(DeletionResultFlags::TwoChildren));

    let inner = DeletionResult::new(DeletionResultFlags::TwoChildren);
    assert!(inner.is_removed());
    assert!(inner.has(DeletionResultFlags::TwoChildren));
    assert!(!inner.has(DeletionResultFlags::Leaf));
}
