//! The arbitrary-precision domain, backed by [rug].
//!
//! Elements are exact rationals, so elimination and inversion over this
//! domain are free of rounding error at any size.

use std::cmp::Ordering;

use rand::Rng;
use rug::{Complete, Rational};

use super::NumericDomain;

/// The arbitrary-precision rational domain.
pub type Q = RationalDomain;
/// The arbitrary-precision rational domain.
pub const Q: RationalDomain = RationalDomain;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RationalDomain;

impl NumericDomain for RationalDomain {
    type Element = Rational;

    #[inline]
    fn add(&self, a: &Rational, b: &Rational) -> Rational {
        (a + b).complete()
    }

    #[inline]
    fn sub(&self, a: &Rational, b: &Rational) -> Rational {
        (a - b).complete()
    }

    #[inline]
    fn mul(&self, a: &Rational, b: &Rational) -> Rational {
        (a * b).complete()
    }

    #[inline]
    fn div(&self, a: &Rational, b: &Rational) -> Rational {
        (a / b).complete()
    }

    /// The truncated-division remainder `a - trunc(a/b)·b`, which has the
    /// sign of `a`, matching the machine-integer domains.
    fn rem(&self, a: &Rational, b: &Rational) -> Rational {
        let mut quot = (a / b).complete();
        quot.trunc_mut();
        a.clone() - quot * b
    }

    #[inline]
    fn compare(&self, a: &Rational, b: &Rational) -> Ordering {
        Ord::cmp(a, b)
    }

    #[inline]
    fn zero(&self) -> Rational {
        Rational::new()
    }

    #[inline]
    fn one(&self) -> Rational {
        Rational::from(1)
    }

    #[inline]
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Rational {
        Rational::from(rng.gen_range(range.0..range.1))
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use rug::Rational;

    use super::Q;
    use crate::domains::NumericDomain;

    #[test]
    fn ops() {
        let half = Rational::from((1, 2));
        let third = Rational::from((1, 3));

        assert_eq!(Q.add(&half, &third), Rational::from((5, 6)));
        assert_eq!(Q.sub(&half, &third), Rational::from((1, 6)));
        assert_eq!(Q.mul(&half, &third), Rational::from((1, 6)));
        assert_eq!(Q.div(&half, &third), Rational::from((3, 2)));
        assert_eq!(Q.compare(&third, &half), Ordering::Less);
    }

    #[test]
    fn rem_truncates() {
        let a = Rational::from((7, 2));
        assert_eq!(Q.rem(&a, &Q.one()), Rational::from((1, 2)));

        let b = Rational::from((-7, 2));
        assert_eq!(Q.rem(&b, &Q.one()), Rational::from((-1, 2)));

        assert_eq!(Q.rem(&Rational::from(7), &Rational::from(2)), Rational::from(1));
    }

    #[test]
    fn fractional() {
        assert!(Q.is_fractional(&(1, 2).into()));
        assert!(!Q.is_fractional(&7.into()));
    }

    #[test]
    fn gcd() {
        assert_eq!(Q.gcd(&45.into(), &55.into()), Ok(5.into()));
    }

    #[test]
    #[should_panic]
    fn division_by_zero_traps() {
        Q.div(&Q.one(), &Q.zero());
    }
}
