#![allow(clippy::multiple_crate_versions)]

pub mod counter;
pub mod dedup;
pub mod error;
pub mod options;
pub mod scanner;
pub mod validator;

pub use counter::{
    RangeCounter, count_decimal_matches, count_decimal_matches_in, count_float_matches,
    count_float_matches_in,
};
pub use dedup::StepAccumulator;
pub use options::{CountOptions, CountOptionsBuilder, DedupStrategy};
