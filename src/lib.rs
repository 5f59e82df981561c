//! # Fibonacci Strategies Library
//!
//! This library computes Fibonacci numbers over arbitrary-precision integers with five distinct
//! strategies, to show the asymptotic and numeric tradeoffs between them. Every exact strategy
//! agrees with every other one for every index; the closed-form approximation agrees with them
//! up to a documented index and drifts beyond it.
//!
//! ## Key Features
//! - **Matrix Exponentiation**: O(log n) big-integer multiplications for a single F(n).
//! - **Memoization**: A per-instance, grow-only table filled bottom-up.
//! - **Lazy Sequences**: Bounded and unbounded producers driven by an explicit cursor.
//! - **Closed Form**: Binet's formula in `f64`, exact up to F(70).
//!
//! ## Overview of Functions
//!
//! ### Errors
//! - `FibonacciError`: Enum covering exhaustion of a bounded sequence, negative indices handed in
//!   through [`checked_index`], and unknown strategy identifiers.
//!
//! ### Fibonacci Computation Approaches
//!
//! #### `MemoizedRecursive`
//! Keeps every value it has computed, indexed by position. A request past the end of the table
//! extends it iteratively, so no request recurses.
//!
//! #### `MatrixPower`
//! Raises `[[1, 1], [1, 0]]` to the n-th power by squaring and reads F(n) off the result.
//! Asymptotically the fastest exact method; operand size still grows linearly with `n`.
//!
//! #### `BoundedSequence`
//! An iterator over the first `limit` Fibonacci numbers. Once drained it stays drained;
//! `next_value` then reports `FibonacciError::Exhausted`.
//!
//! #### `InfiniteSequence` and `take_while_lazy`
//! A producer that never runs out, paired with a combinator that stops pulling at the first value
//! a predicate rejects.
//!
//! #### `GoldenRatio`
//! round((φⁿ − (−φ)⁻ⁿ) / √5) in double precision. Silently inexact past n = 70.
//!
//! #### `Strategy`
//! Names each approach and hands out a boxed [`ExactFibonacci`] or [`ApproximateFibonacci`].
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_strategies::{ExactFibonacci, Strategy};
//! use num_bigint::BigUint;
//! let mut matrix = "matrix".parse::<Strategy>().unwrap().exact().unwrap();
//! assert_eq!(matrix.calculate(99), BigUint::parse_bytes(b"218922995834555169026", 10).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod fibonacci;
pub mod golden_ratio;
pub mod math;
pub mod memo;
pub mod sequence;

pub use error::{checked_index, FibonacciError};
pub use fibonacci::{ApproximateFibonacci, ExactFibonacci, MatrixPower, Strategy};
pub use golden_ratio::GoldenRatio;
pub use memo::{MemoCache, MemoizedRecursive};
pub use sequence::{
    new_bounded_sequence, new_infinite_sequence, take_while_lazy, BoundedSequence,
    InfiniteSequence,
};
