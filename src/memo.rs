use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::fibonacci::ExactFibonacci;

/// Index-ordered table of every Fibonacci value computed so far.
///
/// Entry `i` holds F(i). The table only ever grows; nothing is evicted.
#[derive(Debug, Default, Clone)]
pub struct MemoCache {
    table: Vec<BigUint>,
}

impl MemoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, n: usize) -> Option<&BigUint> {
        self.table.get(n)
    }

    pub fn contains(&self, n: usize) -> bool {
        n < self.table.len()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    // Fill the table upward from its current end until index n is present
    fn fill_to(&mut self, n: usize) {
        if self.table.is_empty() {
            self.table.push(BigUint::zero());
        }
        if self.table.len() == 1 {
            self.table.push(BigUint::one());
        }
        self.table.reserve((n + 1).saturating_sub(self.table.len()));
        for i in self.table.len()..=n {
            let next = &self.table[i - 1] + &self.table[i - 2];
            self.table.push(next);
        }
    }
}

/// Memoized Fibonacci computed bottom-up.
///
/// Each instance owns its cache. A cold call for F(n) fills indices `0..=n` iteratively, so
/// stack depth stays constant regardless of `n`; later calls for any index up to the highest
/// one requested are table lookups.
///
/// # Example
/// ```
/// use fibonacci_strategies::MemoizedRecursive;
/// use num_bigint::BigUint;
/// let mut fib = MemoizedRecursive::new();
/// assert_eq!(fib.calculate(10), BigUint::from(55u32));
/// assert_eq!(fib.cache().len(), 11);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoizedRecursive {
    memo: MemoCache,
}

impl MemoizedRecursive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculate(&mut self, n: usize) -> BigUint {
        if n <= 1 {
            return BigUint::from(n);
        }
        if !self.memo.contains(n) {
            debug!(n, cached = self.memo.len(), "extending memo table");
            self.memo.fill_to(n);
        }
        self.memo.table[n].clone()
    }

    pub fn cache(&self) -> &MemoCache {
        &self.memo
    }
}

impl ExactFibonacci for MemoizedRecursive {
    fn calculate(&mut self, n: usize) -> BigUint {
        MemoizedRecursive::calculate(self, n)
    }
}
