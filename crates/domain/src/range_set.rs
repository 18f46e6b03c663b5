use crate::range::{InclusiveRange, RangeDescriptor};
use crate::scalar::Scalar;

/// Ordered collection of range descriptors checked against every element.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSet<T> {
    descriptors: Vec<RangeDescriptor<T>>,
}

impl<T: Scalar> RangeSet<T> {
    pub fn new(descriptors: Vec<RangeDescriptor<T>>) -> Self {
        Self { descriptors }
    }

    /// Builds a set of bounded descriptors by pairing starts with ends.
    /// Extra elements of the longer side are ignored.
    pub fn from_bounds(starts: &[T], ends: &[T]) -> Self {
        starts
            .iter()
            .zip(ends)
            .map(|(&low, &high)| RangeDescriptor::bounded(low, high))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// True when at least one descriptor can match anything.
    pub fn has_constraints(&self) -> bool {
        self.descriptors.iter().any(|d| !d.is_empty())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RangeDescriptor<T>> {
        self.descriptors.iter()
    }

    pub fn bounded(&self) -> impl Iterator<Item = &InclusiveRange<T>> {
        self.descriptors.iter().filter_map(RangeDescriptor::as_range)
    }

    pub fn matches_any(&self, value: T) -> bool {
        self.descriptors.iter().any(|d| d.matches(value))
    }
}

impl<T> Default for RangeSet<T> {
    fn default() -> Self {
        Self { descriptors: Vec::new() }
    }
}

impl<T: Scalar> FromIterator<RangeDescriptor<T>> for RangeSet<T> {
    fn from_iter<I: IntoIterator<Item = RangeDescriptor<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a RangeSet<T> {
    type Item = &'a RangeDescriptor<T>;
    type IntoIter = std::slice::Iter<'a, RangeDescriptor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}
