// crates/shared-kernel/src/value_objects/mod.rs
pub mod match_count;

pub use match_count::MatchCount;
