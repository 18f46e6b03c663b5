#![allow(clippy::multiple_crate_versions)]

pub mod range;
pub mod range_set;
pub mod scalar;
pub mod window;

pub use range::{InclusiveRange, RangeDescriptor};
pub use range_set::RangeSet;
pub use rust_decimal::Decimal;
pub use scalar::Scalar;
pub use window::Window;
