//! 算法题模块

mod two_sum;

pub use two_sum::two_sum;
