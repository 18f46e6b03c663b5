use range_count_domain::{Decimal, RangeSet, Scalar, Window};
use range_count_shared_kernel::MatchCount;

use crate::error::{RangeCountError, Result};
use crate::options::CountOptions;
use crate::scanner;
use crate::validator::{self, ARRAY_PARAM};

/// Entry point bundling the options used for every count it performs.
///
/// Arguments mirror a nullable API: `None` stands for an absent argument and
/// is reported as [`crate::error::ErrorKind::NullInput`]. Validation runs once
/// per call and finishes before any element is inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeCounter {
    options: CountOptions,
}

impl RangeCounter {
    pub const fn new(options: CountOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> &CountOptions {
        &self.options
    }

    /// Count elements of `array` inside at least one decimal range.
    ///
    /// Each entry of `ranges` is either empty (no constraint) or a
    /// `[low, high]` pair.
    ///
    /// # Errors
    ///
    /// `NullInput` if `array`, `ranges` or any entry of `ranges` is absent;
    /// `MalformedRange` if an entry has a length other than 0 or 2.
    pub fn decimal(
        &self,
        array: Option<&[Decimal]>,
        ranges: Option<&[Option<&[Decimal]>]>,
    ) -> Result<MatchCount> {
        let (array, ranges) = decimal_inputs(array, ranges).inspect_err(rejected)?;
        Ok(self.run("decimal", array, Window::whole(array.len()), &ranges))
    }

    /// Windowed form of [`Self::decimal`]: only `count` elements starting at
    /// `start_index` are inspected.
    ///
    /// # Errors
    ///
    /// Same as [`Self::decimal`], plus `IndexOutOfRange` when the window does
    /// not fit inside `array`.
    pub fn decimal_in(
        &self,
        array: Option<&[Decimal]>,
        ranges: Option<&[Option<&[Decimal]>]>,
        start_index: isize,
        count: isize,
    ) -> Result<MatchCount> {
        let (array, ranges) = decimal_inputs(array, ranges).inspect_err(rejected)?;
        let window = validator::window(array.len(), start_index, count).inspect_err(rejected)?;
        Ok(self.run("decimal", array, window, &ranges))
    }

    /// Count elements of `array` inside at least one `[range_start[i], range_end[i]]`.
    ///
    /// # Errors
    ///
    /// `NullInput` if any argument is absent; `MalformedRange` if the bound
    /// arrays differ in length or the first or last pair is reversed.
    pub fn float(
        &self,
        array: Option<&[f32]>,
        range_start: Option<&[f32]>,
        range_end: Option<&[f32]>,
    ) -> Result<MatchCount> {
        let (array, ranges) = float_inputs(array, range_start, range_end).inspect_err(rejected)?;
        Ok(self.run("float", array, Window::whole(array.len()), &ranges))
    }

    /// Windowed form of [`Self::float`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::float`], plus `IndexOutOfRange` when the window does
    /// not fit inside `array`.
    pub fn float_in(
        &self,
        array: Option<&[f32]>,
        range_start: Option<&[f32]>,
        range_end: Option<&[f32]>,
        start_index: isize,
        count: isize,
    ) -> Result<MatchCount> {
        let (array, ranges) = float_inputs(array, range_start, range_end).inspect_err(rejected)?;
        let window = validator::window(array.len(), start_index, count).inspect_err(rejected)?;
        Ok(self.run("float", array, window, &ranges))
    }

    fn run<T: Scalar>(&self, variant: &str, array: &[T], window: Window, ranges: &RangeSet<T>) -> MatchCount {
        log::debug!(
            "counting {variant} matches: {} elements, window {}..{}, {} ranges",
            array.len(),
            window.start,
            window.end(),
            ranges.len()
        );
        scanner::scan(array, window, ranges, &self.options)
    }
}

fn decimal_inputs<'a>(
    array: Option<&'a [Decimal]>,
    ranges: Option<&[Option<&[Decimal]>]>,
) -> Result<(&'a [Decimal], RangeSet<Decimal>)> {
    let array = validator::require(array, ARRAY_PARAM)?;
    let ranges = validator::descriptor_set(ranges)?;
    Ok((array, ranges))
}

fn float_inputs<'a>(
    array: Option<&'a [f32]>,
    range_start: Option<&[f32]>,
    range_end: Option<&[f32]>,
) -> Result<(&'a [f32], RangeSet<f32>)> {
    let array = validator::require(array, ARRAY_PARAM)?;
    let ranges = validator::bound_set(range_start, range_end)?;
    Ok((array, ranges))
}

fn rejected(err: &RangeCountError) {
    log::debug!("rejected count request: {err}");
}

/// [`RangeCounter::decimal`] with default options.
///
/// # Errors
///
/// See [`RangeCounter::decimal`].
pub fn count_decimal_matches(
    array: Option<&[Decimal]>,
    ranges: Option<&[Option<&[Decimal]>]>,
) -> Result<MatchCount> {
    RangeCounter::default().decimal(array, ranges)
}

/// [`RangeCounter::decimal_in`] with default options.
///
/// # Errors
///
/// See [`RangeCounter::decimal_in`].
pub fn count_decimal_matches_in(
    array: Option<&[Decimal]>,
    ranges: Option<&[Option<&[Decimal]>]>,
    start_index: isize,
    count: isize,
) -> Result<MatchCount> {
    RangeCounter::default().decimal_in(array, ranges, start_index, count)
}

/// [`RangeCounter::float`] with default options.
///
/// # Errors
///
/// See [`RangeCounter::float`].
pub fn count_float_matches(
    array: Option<&[f32]>,
    range_start: Option<&[f32]>,
    range_end: Option<&[f32]>,
) -> Result<MatchCount> {
    RangeCounter::default().float(array, range_start, range_end)
}

/// [`RangeCounter::float_in`] with default options.
///
/// # Errors
///
/// See [`RangeCounter::float_in`].
pub fn count_float_matches_in(
    array: Option<&[f32]>,
    range_start: Option<&[f32]>,
    range_end: Option<&[f32]>,
    start_index: isize,
    count: isize,
) -> Result<MatchCount> {
    RangeCounter::default().float_in(array, range_start, range_end, start_index, count)
}
