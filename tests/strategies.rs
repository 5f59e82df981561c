use fibonacci_strategies::config::limits::GOLDEN_RATIO_EXACT_MAX;
use fibonacci_strategies::fibonacci::prefix_sum;
use fibonacci_strategies::math::{matrix_pow, Matrix};
use fibonacci_strategies::{
    checked_index, new_bounded_sequence, new_infinite_sequence, take_while_lazy,
    ExactFibonacci, FibonacciError, GoldenRatio, MatrixPower, MemoizedRecursive, Strategy,
};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use proptest::prelude::*;

#[test]
fn exact_strategies_agree_up_to_200() {
    let mut memoized = MemoizedRecursive::new();
    let drained = new_bounded_sequence(201).into_vec();
    for n in 0..=200 {
        let expected = MatrixPower.calculate(n);
        assert_eq!(memoized.calculate(n), expected, "memoized, n = {n}");
        assert_eq!(drained[n], expected, "bounded, n = {n}");
        // (n+1)-th value of a sequence of limit n+1
        assert_eq!(new_bounded_sequence(n + 1).last(), Some(expected));
    }
}

#[test]
fn f50_from_every_exact_strategy() {
    let expected = BigUint::from(12_586_269_025u64);
    for strategy in Strategy::ALL {
        if let Some(mut exact) = strategy.exact() {
            assert_eq!(exact.calculate(50), expected, "{strategy}");
        }
    }
    assert_eq!(matrix_pow(&Matrix::step(), 50).b, expected);
}

#[test]
fn bounded_sequence_of_ten_then_exhausted() {
    let mut seq = new_bounded_sequence(10);
    let drained: Vec<_> = (0..10).map(|_| seq.next_value()).collect();
    assert!(drained.iter().all(Result::is_ok));
    assert_eq!(seq.next_value(), Err(FibonacciError::Exhausted { limit: 10 }));
}

#[test]
fn infinite_take_while_below_100() {
    let mut producer = new_infinite_sequence();
    let below = take_while_lazy(&mut producer, |v| *v < BigUint::from(100u32));
    let expected: Vec<BigUint> = [0u32, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]
        .into_iter()
        .map(BigUint::from)
        .collect();
    assert_eq!(below, expected);
    assert_eq!(producer.pulled(), 13);
}

#[test]
fn golden_ratio_exact_in_low_range() {
    let golden = GoldenRatio::new();
    let mut matrix = MatrixPower;
    for n in 0..=GOLDEN_RATIO_EXACT_MAX {
        let exact = ExactFibonacci::calculate(&mut matrix, n).to_u64().unwrap();
        assert_eq!(golden.calculate(n), exact, "n = {n}");
    }
}

#[test]
fn golden_ratio_high_range_is_only_close() {
    // Past the exact range the approximation is allowed to drift; only the relative error is
    // bounded while the value still fits in a u64.
    let golden = GoldenRatio::new();
    for n in 71..=90 {
        let exact = MatrixPower.calculate(n).to_f64().unwrap();
        let approx = golden.calculate(n) as f64;
        assert!(((approx - exact) / exact).abs() < 1e-12, "n = {n}");
    }
}

#[test]
fn negative_index_is_rejected() {
    assert_eq!(checked_index(-7), Err(FibonacciError::NegativeIndex(-7)));
    let n = checked_index(7).unwrap();
    assert_eq!(MatrixPower.calculate(n), BigUint::from(13u32));
}

proptest! {
    #[test]
    fn recurrence_holds(n in 2usize..2_000) {
        let mut memoized = MemoizedRecursive::new();
        let sum = memoized.calculate(n - 1) + memoized.calculate(n - 2);
        prop_assert_eq!(memoized.calculate(n), sum.clone());
        prop_assert_eq!(MatrixPower.calculate(n), sum);
    }

    #[test]
    fn prefix_sum_is_next_minus_one(n in 0usize..500) {
        let values = new_bounded_sequence(n).into_vec();
        prop_assert_eq!(
            prefix_sum(&values, n) + BigUint::one(),
            MatrixPower.calculate(n + 1)
        );
    }

    #[test]
    fn matrix_entry_matches_memoized(n in 0usize..3_000) {
        let mut memoized = MemoizedRecursive::new();
        prop_assert_eq!(matrix_pow(&Matrix::step(), n).b, memoized.calculate(n));
    }

    #[test]
    fn infinite_nth_matches_matrix(n in 0usize..1_000) {
        let mut producer = new_infinite_sequence();
        let value = (0..=n).map(|_| producer.get()).last();
        prop_assert_eq!(value, Some(MatrixPower.calculate(n)));
    }
}
