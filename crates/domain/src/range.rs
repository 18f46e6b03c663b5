// crates/domain/src/range.rs
use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// Inclusive `[low, high]` window used for membership checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclusiveRange<T> {
    pub low: T,
    pub high: T,
}

impl<T: Scalar> InclusiveRange<T> {
    pub const fn new(low: T, high: T) -> Self {
        Self { low, high }
    }

    /// Both bounds are inclusive; comparisons are exact, so NaN never matches.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.low && value <= self.high
    }

    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.low > self.high
    }
}

/// One slot of a range set. `Empty` places no constraint and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeDescriptor<T> {
    Empty,
    Bounded(InclusiveRange<T>),
}

impl<T: Scalar> RangeDescriptor<T> {
    pub const fn bounded(low: T, high: T) -> Self {
        Self::Bounded(InclusiveRange::new(low, high))
    }

    #[inline]
    pub fn matches(&self, value: T) -> bool {
        match self {
            Self::Empty => false,
            Self::Bounded(range) => range.contains(value),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn as_range(&self) -> Option<&InclusiveRange<T>> {
        match self {
            Self::Empty => None,
            Self::Bounded(range) => Some(range),
        }
    }
}

impl<T> From<InclusiveRange<T>> for RangeDescriptor<T> {
    fn from(range: InclusiveRange<T>) -> Self {
        Self::Bounded(range)
    }
}
