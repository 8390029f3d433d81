//! Defines the core arithmetic abstraction.
//!
//! The central trait is [NumericDomain]: a description of what it means for a
//! value type to be "arithmetic". A domain carries the six binary operations,
//! the zero and one constants and an ordering; the element type is an
//! associated type and does not implement any operation itself. All algebra in
//! this crate ([MatrixAlgebra](crate::matrix::algebra::MatrixAlgebra),
//! [ComplexAlgebra](crate::complex::ComplexAlgebra)) is generic over the
//! domain, never over a concrete number type.
//!
//! Ready-made domains live in the submodules:
//! - [I8](constant@integer::I8) and [I64](constant@integer::I64) for machine
//!   integers,
//! - [F32](constant@float::F32) and [F64](constant@float::F64) for binary
//!   floats,
//! - [Q](constant@rational::Q) for arbitrary-precision rationals.

pub mod float;
pub mod integer;
pub mod rational;

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

/// A value type together with the operations that make it arithmetic.
///
/// The six binary operations are expected to be closed over
/// [Element](NumericDomain::Element), with `add`/`sub` mutual inverses and
/// `one` the identity of `mul`. This is a contract on implementors, not
/// something the trait can enforce.
///
/// Domains are immutable values: construct one once and share it freely.
pub trait NumericDomain: Clone + PartialEq + Debug {
    /// The element of the domain. For example, the elements of the wide
    /// machine-integer domain [I64](constant@integer::I64) are [i64].
    type Element: Clone + PartialEq + Debug;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    /// Divide `a` by `b`. Division by zero is not intercepted anywhere in this
    /// crate: the caller gets whatever the element type produces (a panic for
    /// the integer and rational domains, `inf`/`NaN` for the float domains).
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    /// The remainder of `a` divided by `b`, with the sign of `a`.
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn compare(&self, a: &Self::Element, b: &Self::Element) -> Ordering;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    /// Draw a random element out of the given range.
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element;

    /// The absolute value, computed as `a - (a + a)` for negative `a` so that
    /// no negation primitive is required of the domain.
    fn abs(&self, a: &Self::Element) -> Self::Element {
        if self.is_negative(a) {
            self.sub(a, &self.add(a, a))
        } else {
            a.clone()
        }
    }

    fn is_negative(&self, a: &Self::Element) -> bool {
        self.compare(a, &self.zero()) == Ordering::Less
    }

    /// True iff `a` has a non-zero remainder against `one`.
    fn is_fractional(&self, a: &Self::Element) -> bool {
        self.compare(&self.zero(), &self.rem(a, &self.one())) != Ordering::Equal
    }

    /// The greatest common divisor of `a` and `b` by the Euclidean algorithm
    /// over [rem](NumericDomain::rem). Only defined for non-negative,
    /// non-fractional operands.
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, ArithmeticError> {
        if self.is_negative(a) || self.is_negative(b) {
            return Err(ArithmeticError::NegativeOperand);
        }
        if self.is_fractional(a) || self.is_fractional(b) {
            return Err(ArithmeticError::FractionalOperand);
        }

        let (mut greater, mut lesser) = if self.compare(a, b) == Ordering::Greater {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };

        let zero = self.zero();
        while lesser != zero {
            let r = self.rem(&greater, &lesser);
            greater = lesser;
            lesser = r;
        }

        Ok(greater)
    }

    /// Fold [gcd](NumericDomain::gcd) over `xs` from the left, starting with
    /// the first element. The gcd of an empty sequence is zero.
    fn gcd_seq(&self, xs: &[Self::Element]) -> Result<Self::Element, ArithmeticError> {
        let Some(first) = xs.first() else {
            return Ok(self.zero());
        };

        let mut acc = first.clone();
        for x in &xs[1..] {
            acc = self.gcd(&acc, x)?;
        }

        Ok(acc)
    }

    /// The smallest element of `xs`, seeded with the first element.
    ///
    /// Panics when `xs` is empty.
    fn min_seq(&self, xs: &[Self::Element]) -> Self::Element {
        let mut min = xs[0].clone();
        for x in xs {
            if self.compare(&min, x) == Ordering::Greater {
                min = x.clone();
            }
        }
        min
    }

    /// The largest element of `xs`, with the running value seeded at zero:
    /// an all-negative sequence therefore yields zero.
    fn max_seq(&self, xs: &[Self::Element]) -> Self::Element {
        let mut max = self.zero();
        for x in xs {
            if self.compare(&max, x) == Ordering::Less {
                max = x.clone();
            }
        }
        max
    }
}

/// Errors from the derived arithmetic operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArithmeticError {
    /// A gcd operand was negative.
    NegativeOperand,
    /// A gcd operand had a fractional part.
    FractionalOperand,
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::NegativeOperand => {
                write!(f, "The gcd is undefined for negative operands")
            }
            ArithmeticError::FractionalOperand => {
                write!(f, "The gcd is undefined for fractional operands")
            }
        }
    }
}
