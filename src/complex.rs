//! Complex numbers over a [NumericDomain].

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domains::NumericDomain;

/// An immutable pair `(re, im)` of the same element type, representing
/// `re + im·i`. The pair has no identity beyond value equality.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ComplexNumber<T> {
    pub re: T,
    pub im: T,
}

impl<T> ComplexNumber<T> {
    #[inline]
    pub fn new(re: T, im: T) -> ComplexNumber<T> {
        ComplexNumber { re, im }
    }
}

impl<T: Display> Display for ComplexNumber<T> {
    /// The textual form is `{RE:<real>;IM:<imaginary>}`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{RE:{};IM:{}}}", self.re, self.im)
    }
}

/// Complex arithmetic expressed purely in terms of a [NumericDomain] acting
/// on the real/imaginary pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ComplexAlgebra<D: NumericDomain> {
    domain: D,
}

impl<D: NumericDomain> ComplexAlgebra<D> {
    pub const fn new(domain: D) -> ComplexAlgebra<D> {
        ComplexAlgebra { domain }
    }

    /// Return the domain the algebra operates over.
    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// Add componentwise.
    pub fn add(
        &self,
        a: &ComplexNumber<D::Element>,
        b: &ComplexNumber<D::Element>,
    ) -> ComplexNumber<D::Element> {
        ComplexNumber::new(
            self.domain.add(&a.re, &b.re),
            self.domain.add(&a.im, &b.im),
        )
    }

    /// Subtract componentwise.
    pub fn sub(
        &self,
        a: &ComplexNumber<D::Element>,
        b: &ComplexNumber<D::Element>,
    ) -> ComplexNumber<D::Element> {
        ComplexNumber::new(
            self.domain.sub(&a.re, &b.re),
            self.domain.sub(&a.im, &b.im),
        )
    }

    /// `(a + bi)(x + yi) = (ax − by) + (ay + bx)i`.
    pub fn multiply(
        &self,
        a: &ComplexNumber<D::Element>,
        b: &ComplexNumber<D::Element>,
    ) -> ComplexNumber<D::Element> {
        let d = &self.domain;
        ComplexNumber::new(
            d.sub(&d.mul(&a.re, &b.re), &d.mul(&a.im, &b.im)),
            d.add(&d.mul(&a.re, &b.im), &d.mul(&a.im, &b.re)),
        )
    }

    /// `(a + bi)/(x + yi) = ((ax + by) + (bx − ay)i) / (x² + y²)`.
    ///
    /// Division by a zero divisor (the zero complex number) surfaces as
    /// whatever the domain's `div` produces for a zero denominator.
    pub fn divide(
        &self,
        a: &ComplexNumber<D::Element>,
        b: &ComplexNumber<D::Element>,
    ) -> ComplexNumber<D::Element> {
        let d = &self.domain;
        let divisor = d.add(&d.mul(&b.re, &b.re), &d.mul(&b.im, &b.im));
        ComplexNumber::new(
            d.div(&d.add(&d.mul(&a.re, &b.re), &d.mul(&a.im, &b.im)), &divisor),
            d.div(&d.sub(&d.mul(&a.im, &b.re), &d.mul(&a.re, &b.im)), &divisor),
        )
    }

    /// The squared magnitude `a² + b²`; domains carry no general square root.
    pub fn magnitude(&self, a: &ComplexNumber<D::Element>) -> D::Element {
        let d = &self.domain;
        d.add(&d.mul(&a.re, &a.re), &d.mul(&a.im, &a.im))
    }

    /// The complex conjugate `a − bi`, with the imaginary part negated as
    /// `b − (b + b)` since domains carry no negation primitive.
    pub fn conjugate(&self, a: &ComplexNumber<D::Element>) -> ComplexNumber<D::Element> {
        let d = &self.domain;
        ComplexNumber::new(a.re.clone(), d.sub(&a.im, &d.add(&a.im, &a.im)))
    }
}
