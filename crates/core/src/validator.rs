//! Argument validation shared by every counting entry point.
//!
//! Checks run in a fixed order: absent arguments first, then range shape,
//! then window bounds. The first failure is returned.

use range_count_domain::{RangeDescriptor, RangeSet, Scalar, Window};

use crate::error::{IndexBoundReason, MalformedRangeReason, RangeCountError, Result};

pub const ARRAY_PARAM: &str = "array_to_search";
pub const RANGES_PARAM: &str = "ranges";
pub const RANGE_START_PARAM: &str = "range_start";
pub const RANGE_END_PARAM: &str = "range_end";
pub const START_INDEX_PARAM: &str = "start_index";
pub const COUNT_PARAM: &str = "count";

/// Unwraps a nullable argument.
pub fn require<'a, T: ?Sized>(value: Option<&'a T>, param: &'static str) -> Result<&'a T> {
    value.ok_or(RangeCountError::null_input(param))
}

/// Validates descriptor slices (each empty or a `[low, high]` pair) and
/// converts them into a range set.
///
/// Every slot is checked for presence before any slot is checked for shape.
/// Reversed pairs are accepted and simply never match.
pub fn descriptor_set<T: Scalar>(ranges: Option<&[Option<&[T]>]>) -> Result<RangeSet<T>> {
    let ranges = require(ranges, RANGES_PARAM)?;

    if ranges.iter().any(Option::is_none) {
        return Err(RangeCountError::null_input(RANGES_PARAM));
    }

    ranges
        .iter()
        .flatten()
        .map(|slot| match **slot {
            [] => Ok(RangeDescriptor::Empty),
            [low, high] => Ok(RangeDescriptor::bounded(low, high)),
            _ => Err(RangeCountError::malformed(
                MalformedRangeReason::InvalidDescriptorLength,
            )),
        })
        .collect::<Result<Vec<_>>>()
        .map(RangeSet::new)
}

/// Validates parallel start/end arrays and converts them into a range set.
///
/// Only the first and last pairs are checked for `start > end`.
pub fn bound_set<T: Scalar>(range_start: Option<&[T]>, range_end: Option<&[T]>) -> Result<RangeSet<T>> {
    let starts = require(range_start, RANGE_START_PARAM)?;
    let ends = require(range_end, RANGE_END_PARAM)?;

    if starts.len() != ends.len() {
        return Err(RangeCountError::malformed(MalformedRangeReason::LengthMismatch));
    }

    let reversed = |i: usize| starts[i] > ends[i];
    if let Some(last) = starts.len().checked_sub(1) {
        if reversed(0) || reversed(last) {
            return Err(RangeCountError::malformed(MalformedRangeReason::StartAfterEnd));
        }
    }

    Ok(RangeSet::from_bounds(starts, ends))
}

/// Converts signed caller indices into a window that fits `len` elements.
pub fn window(len: usize, start_index: isize, count: isize) -> Result<Window> {
    let start = usize::try_from(start_index).map_err(|_| {
        RangeCountError::out_of_range(START_INDEX_PARAM, IndexBoundReason::NegativeStart)
    })?;
    if start > len {
        return Err(RangeCountError::out_of_range(START_INDEX_PARAM, IndexBoundReason::StartPastEnd));
    }

    let count = usize::try_from(count)
        .map_err(|_| RangeCountError::out_of_range(COUNT_PARAM, IndexBoundReason::NegativeCount))?;
    if count > len - start {
        return Err(RangeCountError::out_of_range(COUNT_PARAM, IndexBoundReason::WindowPastEnd));
    }

    Ok(Window::new(start, count))
}
