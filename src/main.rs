use num_bigint::BigUint;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fibonacci_strategies::config::demo;
use fibonacci_strategies::fibonacci::{adjacent_ratio, prefix_sum};
use fibonacci_strategies::golden_ratio::phi;
use fibonacci_strategies::{
    new_bounded_sequence, new_infinite_sequence, take_while_lazy, GoldenRatio, MatrixPower,
    MemoizedRecursive,
};

fn joined<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== Fibonacci strategies ===\n");

    println!("1. Memoized");
    let mut memoized = MemoizedRecursive::new();
    let first = (0..demo::PREFIX_LEN).map(|n| memoized.calculate(n));
    println!("First {}: {}\n", demo::PREFIX_LEN, joined(first));

    println!("2. Bounded sequence");
    let bounded = new_bounded_sequence(demo::PREFIX_LEN);
    println!("First {}: {}\n", demo::PREFIX_LEN, joined(bounded));

    println!("3. Matrix power");
    println!(
        "F({}) = {}\n",
        demo::MATRIX_INDEX,
        MatrixPower.calculate(demo::MATRIX_INDEX)
    );

    println!("4. Infinite sequence");
    let bound = BigUint::from(demo::TAKE_WHILE_BOUND);
    let mut producer = new_infinite_sequence();
    let below = take_while_lazy(&mut producer, |v| *v < bound);
    println!("Below {}: {}\n", demo::TAKE_WHILE_BOUND, joined(below));

    println!("5. Golden ratio approximation");
    let golden = GoldenRatio::new();
    let approx = (0..demo::PREFIX_LEN).map(|n| golden.calculate(n));
    println!("First {}: {}\n", demo::PREFIX_LEN, joined(approx));

    println!("=== Properties ===");
    let values = new_bounded_sequence(demo::PROPERTY_LIST_LEN).into_vec();
    info!(len = values.len(), "property list built");

    println!("Adjacent ratios (converging to {:.6}):", phi());
    for i in demo::RATIO_RANGE {
        if let Some(ratio) = adjacent_ratio(&values, i) {
            println!("F({i})/F({}) = {ratio:.6}", i - 1);
        }
    }

    println!("\nPrefix sums (equal to F(n+1) - 1):");
    for n in demo::SUM_RANGE {
        println!(
            "Sum of first {n}: {} = F({}) - 1 = {} - 1",
            prefix_sum(&values, n),
            n + 1,
            values[n + 1]
        );
    }
}
