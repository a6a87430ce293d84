/// Unwraps an optional traversal callback, returning
/// `TreeError::InvalidArgument` from the enclosing function when it is absent.
macro_rules! require_callback {
    ($callback:ident, $op:expr) => {
        match $callback {
            Some(f) => f,
            None => {
                log::debug!("Tree::{} called without a callback", $op);
                return Err($crate::error::TreeError::InvalidArgument($op));
            }
        }
    };
}

pub(crate) use require_callback;
