//! Machine-integer domains.

use std::cmp::Ordering;

use rand::Rng;

use super::NumericDomain;

/// The domain of narrow (8-bit) machine integers.
pub type I8 = ByteDomain;
/// The domain of narrow (8-bit) machine integers.
pub const I8: ByteDomain = ByteDomain;

/// The domain of wide (64-bit) machine integers.
pub type I64 = IntegerDomain;
/// The domain of wide (64-bit) machine integers.
pub const I64: IntegerDomain = IntegerDomain;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ByteDomain;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct IntegerDomain;

macro_rules! impl_machine_integer {
    ($domain:ty, $t:ty) => {
        impl NumericDomain for $domain {
            type Element = $t;

            #[inline]
            fn add(&self, a: &$t, b: &$t) -> $t {
                a + b
            }

            #[inline]
            fn sub(&self, a: &$t, b: &$t) -> $t {
                a - b
            }

            #[inline]
            fn mul(&self, a: &$t, b: &$t) -> $t {
                a * b
            }

            #[inline]
            fn div(&self, a: &$t, b: &$t) -> $t {
                a / b
            }

            #[inline]
            fn rem(&self, a: &$t, b: &$t) -> $t {
                a % b
            }

            #[inline]
            fn compare(&self, a: &$t, b: &$t) -> Ordering {
                Ord::cmp(a, b)
            }

            #[inline]
            fn zero(&self) -> $t {
                0
            }

            #[inline]
            fn one(&self) -> $t {
                1
            }

            #[inline]
            fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> $t {
                rng.gen_range(range.0..range.1) as $t
            }
        }
    };
}

impl_machine_integer!(ByteDomain, i8);
impl_machine_integer!(IntegerDomain, i64);
