//! Algebrica is a generic numeric-algebra engine.
//!
//! Arithmetic is abstracted behind the
//! [NumericDomain](domains::NumericDomain) trait: a flat capability set of six
//! binary operations, the zero and one constants and an ordering. Dense
//! [matrices](matrix::Matrix) and [complex numbers](complex::ComplexNumber)
//! are plain containers that know nothing about arithmetic; the
//! [MatrixAlgebra](matrix::algebra::MatrixAlgebra) and
//! [ComplexAlgebra](complex::ComplexAlgebra) operators combine a domain with
//! those containers. Ready-made pairings for the common numeric kinds live in
//! the [registry].
//!
//! For example:
//!
//! ```
//! use algebrica::matrix::Matrix;
//! use algebrica::registry;
//!
//! fn main() {
//!     let m = Matrix::from_rows(vec![vec![1., 2.], vec![3., 4.]]).unwrap();
//!     let inv = registry::matrix::F64.invert(&m).unwrap();
//!     assert_eq!(registry::matrix::F64.determinant(&m), Ok(-2.));
//!     assert_eq!(
//!         registry::matrix::F64.multiply(&inv, &m).unwrap(),
//!         registry::matrix::F64.identity(2)
//!     );
//! }
//! ```
//!
//! Any type can take part in the algebra by supplying its own
//! [NumericDomain](domains::NumericDomain) implementation; the engine never
//! cares how elements are parsed, displayed or logged.

pub mod complex;
pub mod domains;
pub mod matrix;
pub mod registry;
