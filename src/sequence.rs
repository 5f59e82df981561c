use std::iter::FusedIterator;
use std::mem;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::error::FibonacciError;
use crate::fibonacci::ExactFibonacci;

/// Position within the Fibonacci sequence: `a` is emitted next, `b` right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    a: BigUint,
    b: BigUint,
    position: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor {
            a: BigUint::zero(),
            b: BigUint::one(),
            position: 0,
        }
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// F(position), the value the next emission returns.
    pub fn peek(&self) -> &BigUint {
        &self.a
    }

    /// Number of values emitted so far.
    pub fn position(&self) -> usize {
        self.position
    }

    // (a, b) <- (b, a + b)
    pub fn advance(&mut self) {
        let next = &self.a + &self.b;
        self.a = mem::replace(&mut self.b, next);
        self.position += 1;
    }

    /// Returns the current value and moves past it.
    pub fn emit(&mut self) -> BigUint {
        let next = &self.a + &self.b;
        let current = mem::replace(&mut self.a, mem::replace(&mut self.b, next));
        self.position += 1;
        current
    }
}

/// The first `limit` Fibonacci numbers, produced on demand.
///
/// The cursor is consumed as values are pulled and cannot be rewound. [`into_vec`]
/// takes the sequence by value, so it can only be drained once.
///
/// # Example
/// ```
/// use fibonacci_strategies::sequence::BoundedSequence;
/// use num_bigint::BigUint;
/// let fibs: Vec<BigUint> = BoundedSequence::new(10).collect();
/// assert_eq!(fibs[9], BigUint::from(34u32));
/// ```
///
/// [`into_vec`]: BoundedSequence::into_vec
#[derive(Debug, Clone)]
pub struct BoundedSequence {
    cursor: Cursor,
    limit: usize,
}

impl BoundedSequence {
    pub fn new(limit: usize) -> Self {
        BoundedSequence {
            cursor: Cursor::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn emitted(&self) -> usize {
        self.cursor.position()
    }

    pub fn has_next(&self) -> bool {
        self.cursor.position() < self.limit
    }

    /// Pulls the next value, failing once `limit` values have been emitted.
    pub fn next_value(&mut self) -> Result<BigUint, FibonacciError> {
        if !self.has_next() {
            debug!(limit = self.limit, "bounded sequence exhausted");
            return Err(FibonacciError::Exhausted { limit: self.limit });
        }
        Ok(self.cursor.emit())
    }

    /// Drains the remaining values in order.
    pub fn into_vec(self) -> Vec<BigUint> {
        self.collect()
    }
}

impl Iterator for BoundedSequence {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        self.next_value().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit - self.cursor.position();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundedSequence {}

impl FusedIterator for BoundedSequence {}

pub fn new_bounded_sequence(limit: usize) -> BoundedSequence {
    BoundedSequence::new(limit)
}

/// Anything that hands out one value per call, forever.
pub trait Producer {
    type Item;

    fn get(&mut self) -> Self::Item;
}

/// The unbounded Fibonacci sequence starting at F(0).
///
/// Termination is the consumer's job; see [`take_while_lazy`].
#[derive(Debug, Clone, Default)]
pub struct InfiniteSequence {
    cursor: Cursor,
}

impl InfiniteSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self) -> BigUint {
        self.cursor.emit()
    }

    /// Number of values pulled so far.
    pub fn pulled(&self) -> usize {
        self.cursor.position()
    }
}

impl Producer for InfiniteSequence {
    type Item = BigUint;

    fn get(&mut self) -> BigUint {
        InfiniteSequence::get(self)
    }
}

impl Iterator for InfiniteSequence {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        Some(self.get())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for InfiniteSequence {}

/// Each call returns a fresh producer with its own cursor.
pub fn new_infinite_sequence() -> InfiniteSequence {
    InfiniteSequence::new()
}

/// Pulls values until `predicate` first rejects one.
///
/// The rejected value is the last one pulled; the producer is never asked for another.
///
/// # Example
/// ```
/// use fibonacci_strategies::sequence::{new_infinite_sequence, take_while_lazy};
/// use num_bigint::BigUint;
/// let mut fibs = new_infinite_sequence();
/// let small = take_while_lazy(&mut fibs, |v| *v < BigUint::from(10u32));
/// assert_eq!(small.len(), 7);
/// ```
pub fn take_while_lazy<P, F>(producer: &mut P, mut predicate: F) -> Vec<P::Item>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    let mut accepted = Vec::new();
    loop {
        let value = producer.get();
        if !predicate(&value) {
            trace!(accepted = accepted.len(), "take_while stopped");
            return accepted;
        }
        accepted.push(value);
    }
}

/// Exact F(n) by draining a bounded sequence of length `n + 1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoundedScan;

impl ExactFibonacci for BoundedScan {
    fn calculate(&mut self, n: usize) -> BigUint {
        BoundedSequence::new(n + 1).last().unwrap_or_default()
    }
}

/// Exact F(n) by pulling `n + 1` values from a fresh infinite sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct InfiniteScan;

impl ExactFibonacci for InfiniteScan {
    fn calculate(&mut self, n: usize) -> BigUint {
        let mut producer = new_infinite_sequence();
        for _ in 0..n {
            producer.cursor.advance();
        }
        producer.get()
    }
}
