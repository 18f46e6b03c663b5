use range_count::{
    CountOptionsBuilder, Decimal, DedupStrategy, RangeCounter, count_decimal_matches, count_decimal_matches_in,
};

use crate::common::{DecimalRanges, assert_count, decimals};

#[test]
fn counts_values_inside_single_range() {
    let array = decimals(&[1, 2, 3, 4, 5]);
    let ranges = DecimalRanges::new().pair(2, 4);
    assert_count(count_decimal_matches(Some(array.as_slice()), Some(ranges.slots().as_slice())), 3);
}

#[test]
fn element_in_two_ranges_counts_once() {
    let array = decimals(&[5]);
    let ranges = DecimalRanges::new().pair(1, 3).pair(4, 6);
    assert_count(count_decimal_matches(Some(array.as_slice()), Some(ranges.slots().as_slice())), 1);

    let overlapping = DecimalRanges::new().pair(4, 6).pair(5, 5).pair(0, 10);
    assert_count(count_decimal_matches(Some(array.as_slice()), Some(overlapping.slots().as_slice())), 1);
}

#[test]
fn equal_values_at_different_positions_count_independently() {
    let array = decimals(&[7, 7, 7, 8]);
    let ranges = DecimalRanges::new().pair(7, 7).pair(6, 7);
    assert_count(count_decimal_matches(Some(array.as_slice()), Some(ranges.slots().as_slice())), 3);
}

#[test]
fn empty_descriptors_add_nothing() {
    let array = decimals(&[1, 2, 3]);
    let all_empty = DecimalRanges::new().empty().empty();
    assert_count(count_decimal_matches(Some(array.as_slice()), Some(all_empty.slots().as_slice())), 0);

    let mixed = DecimalRanges::new().empty().pair(3, 3).empty();
    assert_count(count_decimal_matches(Some(array.as_slice()), Some(mixed.slots().as_slice())), 1);
}

#[test]
fn empty_array_or_range_set_yields_zero() {
    let ranges = DecimalRanges::new().pair(0, 100);
    assert_count(count_decimal_matches(Some(&[][..]), Some(ranges.slots().as_slice())), 0);

    let array = decimals(&[1, 2, 3]);
    assert_count(count_decimal_matches(Some(array.as_slice()), Some(&[][..])), 0);
}

#[test]
fn reversed_pair_is_accepted_and_never_matches() {
    let array = decimals(&[1, 2, 3]);
    let ranges = DecimalRanges::new().pair(3, 1);
    assert_count(count_decimal_matches(Some(array.as_slice()), Some(ranges.slots().as_slice())), 0);
}

#[test]
fn fractional_bounds_use_exact_decimal_comparison() {
    let array = vec![Decimal::new(10, 1), Decimal::new(1_000_000_001, 9), Decimal::new(2, 0)];
    let ranges = DecimalRanges::new().decimal_pair(Decimal::new(1, 0), Decimal::new(100, 2));
    assert_count(count_decimal_matches(Some(array.as_slice()), Some(ranges.slots().as_slice())), 1);
}

#[test]
fn window_scans_only_requested_section() {
    let array = decimals(&[1, 2, 3, 4, 5, 6]);
    let ranges = DecimalRanges::new().pair(2, 5);
    let slots = ranges.slots();
    assert_count(count_decimal_matches_in(Some(array.as_slice()), Some(slots.as_slice()), 0, 6), 4);
    assert_count(count_decimal_matches_in(Some(array.as_slice()), Some(slots.as_slice()), 3, 3), 2);
    assert_count(count_decimal_matches_in(Some(array.as_slice()), Some(slots.as_slice()), 6, 0), 0);
    assert_count(count_decimal_matches_in(Some(array.as_slice()), Some(slots.as_slice()), 2, 0), 0);
}

#[test]
fn full_window_equals_whole_array() {
    let array = decimals(&[-3, 0, 4, 9, 12, 4]);
    let ranges = DecimalRanges::new().pair(0, 4).empty().pair(10, 20);
    let slots = ranges.slots();
    let whole = count_decimal_matches(Some(array.as_slice()), Some(slots.as_slice())).unwrap();
    let windowed = count_decimal_matches_in(Some(array.as_slice()), Some(slots.as_slice()), 0, 6).unwrap();
    assert_eq!(whole, windowed);
    assert_eq!(whole, 4usize);
}

#[test]
fn configured_counter_agrees_with_defaults() {
    let options = CountOptionsBuilder::default()
        .dedup(DedupStrategy::Hashed)
        .short_circuit_empty_ranges(false)
        .build()
        .unwrap();
    let counter = RangeCounter::new(options);
    let array = decimals(&[1, 5, 5, 9]);
    let ranges = DecimalRanges::new().pair(4, 6).pair(5, 10);
    let slots = ranges.slots();
    assert_count(counter.decimal(Some(array.as_slice()), Some(slots.as_slice())), 3);
    assert_count(counter.decimal_in(Some(array.as_slice()), Some(slots.as_slice()), 1, 2), 2);
}
