//! Count how many elements of a decimal or `f32` array fall inside one or
//! more inclusive ranges, over the whole array or a `start_index`/`count`
//! section of it.
//!
//! ```
//! use range_count::{Decimal, count_decimal_matches};
//!
//! let array: Vec<Decimal> = (1..=5).map(Decimal::from).collect();
//! let pair = [Decimal::from(2), Decimal::from(4)];
//! let ranges: [Option<&[Decimal]>; 1] = [Some(&pair[..])];
//! let matches = count_decimal_matches(Some(array.as_slice()), Some(&ranges[..])).unwrap();
//! assert_eq!(matches, 3usize);
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use range_count_core::{
    CountOptions, CountOptionsBuilder, DedupStrategy, RangeCounter, count_decimal_matches,
    count_decimal_matches_in, count_float_matches, count_float_matches_in,
};
pub use range_count_domain::{Decimal, InclusiveRange, RangeDescriptor, RangeSet, Window};
pub use range_count_shared_kernel::{
    ErrorKind, IndexBoundReason, MalformedRangeReason, MatchCount, RangeCountError, Result,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
