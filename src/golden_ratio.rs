//! Closed-form (Binet) approximation of F(n) in `f64`.
//!
//! The result is exact only while F(n) fits in the 53-bit mantissa with rounding error below
//! one half, i.e. up to [`GOLDEN_RATIO_EXACT_MAX`]. Past that the answer drifts silently, and once
//! φⁿ overflows the conversion saturates at `u64::MAX`. Use an [`ExactFibonacci`] strategy when
//! exactness matters.
//!
//! [`ExactFibonacci`]: crate::fibonacci::ExactFibonacci

use tracing::warn;

pub use crate::config::limits::GOLDEN_RATIO_EXACT_MAX;
use crate::fibonacci::ApproximateFibonacci;

/// φ = (1 + √5) / 2
pub fn phi() -> f64 {
    (1.0 + 5f64.sqrt()) / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenRatio {
    phi: f64,
    sqrt5: f64,
}

impl Default for GoldenRatio {
    fn default() -> Self {
        GoldenRatio {
            phi: phi(),
            sqrt5: 5f64.sqrt(),
        }
    }
}

impl GoldenRatio {
    pub fn new() -> Self {
        Self::default()
    }

    /// round((φⁿ − (−φ)⁻ⁿ) / √5)
    ///
    /// # Example
    /// ```
    /// use fibonacci_strategies::golden_ratio::GoldenRatio;
    /// assert_eq!(GoldenRatio::new().calculate(50), 12_586_269_025);
    /// ```
    pub fn calculate(&self, n: usize) -> u64 {
        if n > GOLDEN_RATIO_EXACT_MAX {
            warn!(n, max = GOLDEN_RATIO_EXACT_MAX, "golden ratio approximation past exact range");
        }
        let n = n as f64;
        let value = (self.phi.powf(n) - (-self.phi).powf(-n)) / self.sqrt5;
        // float-to-int `as` saturates, so overflow lands on u64::MAX
        value.round() as u64
    }
}

impl ApproximateFibonacci for GoldenRatio {
    fn approximate(&self, n: usize) -> u64 {
        self.calculate(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ten_values() {
        let golden = GoldenRatio::new();
        let values: Vec<u64> = (0..10).map(|n| golden.calculate(n)).collect();
        assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn phi_value() {
        assert!((phi() - 1.618_033_988_749_895).abs() < 1e-15);
        assert!((phi() * phi() - phi() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn huge_index_saturates_instead_of_failing() {
        assert_eq!(GoldenRatio::new().calculate(5_000), u64::MAX);
    }
}
