//! Utility macros shared across the crate.

/// A macro for early returns with an error if a condition is not met.
///
/// Similar to `assert!`, but returns an error instead of panicking.
///
/// # Example
///
/// ```ignore
/// ensure!(!self.closed, EncodeError::StreamClosed);
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
