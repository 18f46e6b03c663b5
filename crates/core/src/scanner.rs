use range_count_domain::{RangeSet, Scalar, Window};
use range_count_shared_kernel::MatchCount;

use crate::dedup::StepAccumulator;
use crate::options::CountOptions;

/// Count positions inside `window` whose element matches at least one range.
///
/// Equivalent to peeling one element off the front of the section at a time
/// and adding that step's distinct matches to the count of the remainder,
/// but runs as a loop over a borrowed sub-slice. The window must already be
/// validated against `array`.
#[must_use]
pub fn scan<T: Scalar>(
    array: &[T],
    window: Window,
    ranges: &RangeSet<T>,
    options: &CountOptions,
) -> MatchCount {
    if window.is_empty() || ranges.is_empty() {
        return MatchCount::zero();
    }
    if options.short_circuit_empty_ranges && !ranges.has_constraints() {
        log::trace!("no bounded range among {} descriptors, skipping scan", ranges.len());
        return MatchCount::zero();
    }

    let Some(section) = window.section(array) else {
        debug_assert!(false, "window {window:?} exceeds array of {} elements", array.len());
        return MatchCount::zero();
    };

    let mut accumulator = StepAccumulator::new(options.dedup);
    let mut total = MatchCount::zero();

    for (offset, &value) in section.iter().enumerate() {
        accumulator.clear();
        let matched = step(value, ranges, &mut accumulator);
        if matched > 0 {
            log::trace!("position {} ({value:?}) matched", window.start + offset);
        }
        total += matched;
    }

    total
}

/// Check one element against every range, returning the number of distinct
/// values the step recorded (0 or 1).
pub fn step<T: Scalar>(value: T, ranges: &RangeSet<T>, accumulator: &mut StepAccumulator<T>) -> usize {
    for range in ranges.bounded() {
        if range.contains(value) {
            accumulator.insert(value);
        }
    }
    accumulator.len()
}
