use std::fmt::Debug;
use std::hash::Hash;

use rust_decimal::Decimal;

/// Element type that can be searched and compared against range bounds.
///
/// Only the two supported element kinds implement this: `Decimal` for
/// high-precision searches and `f32` for floating-point ones.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Hashable identity used by set-based de-duplication. Two values that
    /// compare equal must produce equal keys.
    type Key: Eq + Hash + Debug;

    fn dedup_key(self) -> Self::Key;
}

impl Scalar for Decimal {
    type Key = Decimal;

    #[inline]
    fn dedup_key(self) -> Self::Key {
        self.normalize()
    }
}

impl Scalar for f32 {
    type Key = u32;

    #[inline]
    fn dedup_key(self) -> Self::Key {
        // -0.0 == 0.0 but their bit patterns differ
        if self == 0.0 { 0.0f32.to_bits() } else { self.to_bits() }
    }
}
