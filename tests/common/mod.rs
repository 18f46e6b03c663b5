// tests/common/mod.rs
//! Shared test utilities.

pub mod builders;
pub mod matchers;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use matchers::*;
