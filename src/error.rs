use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A traversal was invoked without a callback.
    #[error("invalid argument: {0} requires a callback")]
    InvalidArgument(&'static str),
}

#[cfg(test)]
#[test]
fn test_error_display() {
    assert_eq!(
        TreeError::InvalidArgument("in_order").to_string(),
        "invalid argument: in_order requires a callback"
    );
}
