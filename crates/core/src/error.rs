//! Re-export error types from the shared kernel crate.

pub use range_count_shared_kernel::{
    ErrorKind, IndexBoundReason, MalformedRangeReason, RangeCountError, Result,
};
