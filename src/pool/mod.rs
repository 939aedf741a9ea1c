//! The constant-sum pool and its property-based test suite.

mod constant_sum;

#[cfg(test)]
mod proptest_properties;

pub use constant_sum::ConstantSumPool;
