// crates/shared-kernel/src/value_objects/match_count.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Number of array positions that satisfied at least one range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchCount(usize);

impl MatchCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for MatchCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for MatchCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<usize> for MatchCount {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for MatchCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<usize> for MatchCount {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sum for MatchCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, count| acc + count)
    }
}

impl<'a> Sum<&'a MatchCount> for MatchCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Sum<usize> for MatchCount {
    fn sum<I: Iterator<Item = usize>>(iter: I) -> Self {
        Self(iter.sum())
    }
}

impl From<usize> for MatchCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<MatchCount> for usize {
    fn from(value: MatchCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for MatchCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<MatchCount> for usize {
    fn eq(&self, other: &MatchCount) -> bool {
        *self == other.0
    }
}

impl num_traits::Zero for MatchCount {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

mod display {
    use std::fmt;

    use super::MatchCount;

    impl fmt::Display for MatchCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
