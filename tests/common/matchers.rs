// tests/common/matchers.rs
use range_count::{ErrorKind, MatchCount, RangeCountError};

#[allow(dead_code)]
#[track_caller]
pub fn assert_kind(result: Result<MatchCount, RangeCountError>, expected: ErrorKind) -> RangeCountError {
    match result {
        Ok(count) => panic!("expected {expected:?}, got a count of {count}"),
        Err(err) => {
            assert_eq!(err.kind(), expected, "unexpected error: {err}");
            err
        }
    }
}

#[allow(dead_code)]
#[track_caller]
pub fn assert_count(result: Result<MatchCount, RangeCountError>, expected: usize) {
    match result {
        Ok(count) => assert_eq!(count, expected),
        Err(err) => panic!("expected a count of {expected}, got error: {err}"),
    }
}
