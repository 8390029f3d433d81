//! Binary floating-point domains.
//!
//! Ordering uses the IEEE total order, so `NaN` sorts above every finite
//! value and comparisons never fall back to a partial result.

use std::cmp::Ordering;

use rand::Rng;

use super::NumericDomain;

/// The single-precision floating-point domain.
pub type F32 = FloatDomain;
/// The single-precision floating-point domain.
pub const F32: FloatDomain = FloatDomain;

/// The double-precision floating-point domain.
pub type F64 = DoubleDomain;
/// The double-precision floating-point domain.
pub const F64: DoubleDomain = DoubleDomain;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FloatDomain;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct DoubleDomain;

macro_rules! impl_machine_float {
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
                a.total_cmp(b)
            }

            #[inline]
            fn zero(&self) -> $t {
                0.
            }

            #[inline]
            fn one(&self) -> $t {
                1.
            }

            #[inline]
            fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> $t {
                rng.gen_range(range.0..range.1) as $t
            }
        }
    };
}

impl_machine_float!(FloatDomain, f32);
impl_machine_float!(DoubleDomain, f64);

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use super::{F32, F64};
    use crate::domains::NumericDomain;

    #[test]
    fn ops() {
        assert_eq!(F64.add(&3., &4.), 7.);
        assert_eq!(F64.sub(&3., &4.), -1.);
        assert_eq!(F64.mul(&3., &4.), 12.);
        assert_eq!(F64.div(&7., &2.), 3.5);
        assert_eq!(F64.rem(&7.5, &2.), 1.5);
        assert_eq!(F32.compare(&3., &4.), Ordering::Less);
    }

    #[test]
    fn division_by_zero_is_not_finite() {
        assert!(F64.div(&1., &0.).is_infinite());
        assert!(F64.div(&0., &0.).is_nan());
    }

    #[test]
    fn nan_orders_last() {
        assert_eq!(F64.compare(&f64::NAN, &f64::MAX), Ordering::Greater);
        assert_eq!(F64.compare(&f64::NEG_INFINITY, &f64::MIN), Ordering::Less);
    }
}
