use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use tracing::debug;

use crate::error::FibonacciError;
use crate::golden_ratio::GoldenRatio;
use crate::math::{matrix_pow, Matrix};
use crate::memo::MemoizedRecursive;
use crate::sequence::{BoundedScan, InfiniteScan};

/// Computes F(n) exactly.
///
/// Implementations may keep state between calls (a cache, for instance), hence `&mut self`.
/// None of them are meant to be shared across threads without outside synchronization.
pub trait ExactFibonacci {
    fn calculate(&mut self, n: usize) -> BigUint;
}

/// Approximates F(n) in machine arithmetic, with a bounded range of exactness.
pub trait ApproximateFibonacci {
    fn approximate(&self, n: usize) -> u64;
}

// Function to compute Fibonacci(n-1) and Fibonacci(n) using matrix exponentiation
pub fn fibonacci_pair(n: usize) -> (BigUint, BigUint) {
    if n == 0 {
        // F(-1) = 1 keeps the recurrence F(1) = F(0) + F(-1) intact
        return (BigUint::one(), BigUint::zero());
    }

    let result_matrix = matrix_pow(&Matrix::step(), n);

    (result_matrix.d, result_matrix.b) // F(n-1) and F(n)
}

/// F(n) as the (0, 1) entry of `[[1, 1], [1, 0]]^n`.
///
/// O(log n) big-integer multiplications, the fastest exact strategy for large `n`.
///
/// # Example
/// ```
/// use fibonacci_strategies::MatrixPower;
/// use num_bigint::BigUint;
/// assert_eq!(MatrixPower.calculate(50), BigUint::from(12_586_269_025u64));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MatrixPower;

impl MatrixPower {
    pub fn calculate(&self, n: usize) -> BigUint {
        if n <= 1 {
            return BigUint::from(n);
        }
        debug!(n, "matrix power");
        matrix_pow(&Matrix::step(), n).b
    }
}

impl ExactFibonacci for MatrixPower {
    fn calculate(&mut self, n: usize) -> BigUint {
        MatrixPower::calculate(self, n)
    }
}

/// Identifier for one of the five strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Memoized,
    Matrix,
    Bounded,
    Infinite,
    GoldenRatio,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Memoized,
        Strategy::Matrix,
        Strategy::Bounded,
        Strategy::Infinite,
        Strategy::GoldenRatio,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Memoized => "memoized",
            Strategy::Matrix => "matrix",
            Strategy::Bounded => "bounded",
            Strategy::Infinite => "infinite",
            Strategy::GoldenRatio => "golden-ratio",
        }
    }

    pub fn is_exact(&self) -> bool {
        !matches!(self, Strategy::GoldenRatio)
    }

    /// A fresh instance of the strategy, or `None` for the approximation.
    pub fn exact(&self) -> Option<Box<dyn ExactFibonacci>> {
        match self {
            Strategy::Memoized => Some(Box::new(MemoizedRecursive::new())),
            Strategy::Matrix => Some(Box::new(MatrixPower)),
            Strategy::Bounded => Some(Box::new(BoundedScan)),
            Strategy::Infinite => Some(Box::new(InfiniteScan)),
            Strategy::GoldenRatio => None,
        }
    }

    pub fn approximate(&self) -> Option<Box<dyn ApproximateFibonacci>> {
        match self {
            Strategy::GoldenRatio => Some(Box::new(GoldenRatio::new())),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = FibonacciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| FibonacciError::UnknownStrategy(s.to_string()))
    }
}

/// `values[i] / values[i - 1]` as a float; tends to φ as `i` grows.
///
/// Returns `None` when `i` is 0, out of range, or the divisor is zero.
pub fn adjacent_ratio(values: &[BigUint], i: usize) -> Option<f64> {
    let previous = values.get(i.checked_sub(1)?)?;
    if previous.is_zero() {
        return None;
    }
    Some(values.get(i)?.to_f64()? / previous.to_f64()?)
}

/// Sum of the first `n` values; equals F(n + 1) - 1 when `values` starts at F(0).
pub fn prefix_sum(values: &[BigUint], n: usize) -> BigUint {
    values.iter().take(n).sum()
}
