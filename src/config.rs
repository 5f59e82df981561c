//! Compile-time constants shared by the strategies and the demonstration driver.

/// Accuracy limits of the non-exact strategies.
pub mod limits {
    /// Last index at which the golden-ratio approximation still matches F(n) exactly.
    ///
    /// F(71) is the first value whose rounding error in 53-bit mantissa arithmetic reaches 0.5.
    pub const GOLDEN_RATIO_EXACT_MAX: usize = 70;
}

/// Parameters of the demonstration driver.
pub mod demo {
    use std::ops::RangeInclusive;

    pub const PREFIX_LEN: usize = 10;
    pub const MATRIX_INDEX: usize = 50;
    pub const TAKE_WHILE_BOUND: u32 = 100;
    /// Length of the list the ratio and sum properties are read from.
    pub const PROPERTY_LIST_LEN: usize = 15;
    pub const RATIO_RANGE: RangeInclusive<usize> = 5..=10;
    pub const SUM_RANGE: RangeInclusive<usize> = 5..=8;
}
