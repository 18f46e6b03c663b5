// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Every variant describes a caller-input problem detected before any
/// counting happens; there is no internal failure mode once validation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeCountError {
    /// A required argument was absent.
    #[error("Value cannot be null (parameter '{param}')")]
    NullInput { param: &'static str },

    #[error("Malformed range: {reason}")]
    MalformedRange { reason: MalformedRangeReason },

    #[error("Index out of range (parameter '{param}'): {reason}")]
    IndexOutOfRange {
        param: &'static str,
        reason: IndexBoundReason,
    },
}

pub type Result<T> = std::result::Result<T, RangeCountError>;

/// Coarse classification of [`RangeCountError`], stable for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullInput,
    MalformedRange,
    IndexOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MalformedRangeReason {
    #[error("the length of one of the ranges is less or greater than 2 or not equal to zero")]
    InvalidDescriptorLength,

    #[error("arrays of range starts and range ends contain different number of elements")]
    LengthMismatch,

    #[error("the range start value is greater than the range end value")]
    StartAfterEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IndexBoundReason {
    #[error("start_index is less than zero")]
    NegativeStart,

    #[error("start_index is greater than array length")]
    StartPastEnd,

    #[error("count is less than zero")]
    NegativeCount,

    #[error("start_index + count is greater than array length")]
    WindowPastEnd,
}

impl RangeCountError {
    pub const fn null_input(param: &'static str) -> Self {
        Self::NullInput { param }
    }

    pub const fn malformed(reason: MalformedRangeReason) -> Self {
        Self::MalformedRange { reason }
    }

    pub const fn out_of_range(param: &'static str, reason: IndexBoundReason) -> Self {
        Self::IndexOutOfRange { param, reason }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NullInput { .. } => ErrorKind::NullInput,
            Self::MalformedRange { .. } => ErrorKind::MalformedRange,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }

    /// Name of the offending argument, when the error is tied to one.
    #[must_use]
    pub const fn param(&self) -> Option<&'static str> {
        match self {
            Self::NullInput { param } | Self::IndexOutOfRange { param, .. } => Some(*param),
            Self::MalformedRange { .. } => None,
        }
    }
}
