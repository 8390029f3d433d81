//! Ready-made algebras for the common numeric kinds.
//!
//! The domain constants themselves live next to their domains
//! ([I8](constant@crate::domains::integer::I8),
//! [I64](constant@crate::domains::integer::I64),
//! [F32](constant@crate::domains::float::F32),
//! [F64](constant@crate::domains::float::F64),
//! [Q](constant@crate::domains::rational::Q)); this module only composes them with the
//! algebras built from each, so a caller can write
//! `registry::matrix::F64.determinant(&m)` without any setup.

/// Matrix algebras per numeric kind.
pub mod matrix {
    use crate::domains::float::{DoubleDomain, FloatDomain};
    use crate::domains::integer::{ByteDomain, IntegerDomain};
    use crate::domains::rational::RationalDomain;
    use crate::matrix::algebra::MatrixAlgebra;

    /// Matrix algebra over the narrow (8-bit) integer domain.
    pub const I8: MatrixAlgebra<ByteDomain> = MatrixAlgebra::new(crate::domains::integer::I8);
    /// Matrix algebra over the wide (64-bit) integer domain.
    pub const I64: MatrixAlgebra<IntegerDomain> = MatrixAlgebra::new(crate::domains::integer::I64);
    /// Matrix algebra over the single-precision float domain.
    pub const F32: MatrixAlgebra<FloatDomain> = MatrixAlgebra::new(crate::domains::float::F32);
    /// Matrix algebra over the double-precision float domain.
    pub const F64: MatrixAlgebra<DoubleDomain> = MatrixAlgebra::new(crate::domains::float::F64);
    /// Matrix algebra over the arbitrary-precision rational domain.
    pub const Q: MatrixAlgebra<RationalDomain> = MatrixAlgebra::new(crate::domains::rational::Q);
}

/// Complex-number algebras per numeric kind.
pub mod complex {
    use crate::complex::ComplexAlgebra;
    use crate::domains::float::{DoubleDomain, FloatDomain};
    use crate::domains::integer::{ByteDomain, IntegerDomain};
    use crate::domains::rational::RationalDomain;

    /// Complex algebra over the narrow (8-bit) integer domain.
    pub const I8: ComplexAlgebra<ByteDomain> = ComplexAlgebra::new(crate::domains::integer::I8);
    /// Complex algebra over the wide (64-bit) integer domain.
    pub const I64: ComplexAlgebra<IntegerDomain> =
        ComplexAlgebra::new(crate::domains::integer::I64);
    /// Complex algebra over the single-precision float domain.
    pub const F32: ComplexAlgebra<FloatDomain> = ComplexAlgebra::new(crate::domains::float::F32);
    /// Complex algebra over the double-precision float domain.
    pub const F64: ComplexAlgebra<DoubleDomain> = ComplexAlgebra::new(crate::domains::float::F64);
    /// Complex algebra over the arbitrary-precision rational domain.
    pub const Q: ComplexAlgebra<RationalDomain> = ComplexAlgebra::new(crate::domains::rational::Q);
}
