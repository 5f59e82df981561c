use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FibonacciError {
    /// A bounded sequence was asked for a value after emitting all `limit` of them.
    #[error("Sequence exhausted after {limit} values")]
    Exhausted { limit: usize },
    #[error("Negative Fibonacci index: {0}")]
    NegativeIndex(i64),
    #[error("Unknown strategy: {0:?}")]
    UnknownStrategy(String),
}

/// Converts a signed index into one every strategy accepts.
///
/// # Example
/// ```
/// use fibonacci_strategies::{checked_index, FibonacciError};
/// assert_eq!(checked_index(12), Ok(12));
/// assert_eq!(checked_index(-1), Err(FibonacciError::NegativeIndex(-1)));
/// ```
pub fn checked_index(n: i64) -> Result<usize, FibonacciError> {
    usize::try_from(n).map_err(|_| FibonacciError::NegativeIndex(n))
}
