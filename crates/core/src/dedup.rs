//! Step-local duplicate suppression.
//!
//! While one element is checked against every range, each matching range
//! offers the element to the accumulator. Only the first offer of a value is
//! kept, so an element inside several overlapping ranges still contributes
//! a single match. The accumulator is cleared between positions: equal values
//! at different positions are counted independently.

use hashbrown::HashSet;
use range_count_domain::Scalar;

use crate::options::DedupStrategy;

#[derive(Debug)]
pub enum StepAccumulator<T: Scalar> {
    Linear(Vec<T>),
    Hashed(HashSet<T::Key>),
}

impl<T: Scalar> StepAccumulator<T> {
    pub fn new(strategy: DedupStrategy) -> Self {
        match strategy {
            DedupStrategy::Linear => Self::Linear(Vec::new()),
            DedupStrategy::Hashed => Self::Hashed(HashSet::new()),
        }
    }

    /// Records `value`, returning `false` if an equal value was already recorded.
    pub fn insert(&mut self, value: T) -> bool {
        match self {
            Self::Linear(seen) => {
                if seen.iter().any(|&v| v == value) {
                    return false;
                }
                seen.push(value);
                true
            }
            Self::Hashed(seen) => seen.insert(value.dedup_key()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Linear(seen) => seen.len(),
            Self::Hashed(seen) => seen.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empties the accumulator while keeping its allocation for the next step.
    pub fn clear(&mut self) {
        match self {
            Self::Linear(seen) => seen.clear(),
            Self::Hashed(seen) => seen.clear(),
        }
    }
}
