use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::trace;

// Matrix structure for 2x2 matrices, laid out as [[a, b], [c, d]]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    pub a: BigUint,
    pub b: BigUint,
    pub c: BigUint,
    pub d: BigUint,
}

impl Matrix {
    pub fn identity() -> Self {
        Matrix {
            a: BigUint::one(),
            b: BigUint::zero(),
            c: BigUint::zero(),
            d: BigUint::one(),
        }
    }

    /// The Fibonacci step matrix `[[1, 1], [1, 0]]`.
    ///
    /// `step()^n == [[F(n+1), F(n)], [F(n), F(n-1)]]`, with `step()^0` the identity.
    pub fn step() -> Self {
        Matrix {
            a: BigUint::one(),
            b: BigUint::one(),
            c: BigUint::one(),
            d: BigUint::zero(),
        }
    }
}

// Matrix multiplication for 2x2 matrices
pub fn matrix_mult(m1: &Matrix, m2: &Matrix) -> Matrix {
    Matrix {
        a: &m1.a * &m2.a + &m1.b * &m2.c,
        b: &m1.a * &m2.b + &m1.b * &m2.d,
        c: &m1.c * &m2.a + &m1.d * &m2.c,
        d: &m1.c * &m2.b + &m1.d * &m2.d,
    }
}

pub fn matrix_square(m: &Matrix) -> Matrix {
    matrix_mult(m, m)
}

/// Raises `base` to `exp` by recursive squaring.
///
/// An odd exponent peels off one factor and lands on an even one, which halves, so the
/// recursion is O(log n) deep and performs O(log n) multiplications.
pub fn matrix_pow(base: &Matrix, exp: usize) -> Matrix {
    trace!(exp, "matrix_pow");
    match exp {
        0 => Matrix::identity(),
        1 => base.clone(),
        _ if exp % 2 == 0 => matrix_square(&matrix_pow(base, exp / 2)),
        _ => matrix_mult(base, &matrix_pow(base, exp - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(a: u32, b: u32, c: u32, d: u32) -> Matrix {
        Matrix {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
        }
    }

    #[test]
    fn zeroth_power_is_identity() {
        assert_eq!(matrix_pow(&Matrix::step(), 0), Matrix::identity());
    }

    #[test]
    fn first_power_is_base() {
        assert_eq!(matrix_pow(&Matrix::step(), 1), Matrix::step());
    }

    #[test]
    fn identity_is_neutral() {
        let m = small(2, 3, 5, 7);
        assert_eq!(matrix_mult(&m, &Matrix::identity()), m);
        assert_eq!(matrix_mult(&Matrix::identity(), &m), m);
    }

    #[test]
    fn product_of_small_matrices() {
        let m1 = small(1, 2, 3, 4);
        let m2 = small(5, 6, 7, 8);
        assert_eq!(matrix_mult(&m1, &m2), small(19, 22, 43, 50));
    }

    #[test]
    fn step_powers_hold_fibonacci_numbers() {
        // step^10 == [[F(11), F(10)], [F(10), F(9)]]
        assert_eq!(matrix_pow(&Matrix::step(), 10), small(89, 55, 55, 34));
        // odd exponent path
        assert_eq!(matrix_pow(&Matrix::step(), 7), small(21, 13, 13, 8));
    }
}
