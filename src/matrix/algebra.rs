//! Matrix arithmetic over a [NumericDomain].

use std::cmp::Ordering;

use crate::domains::NumericDomain;

use super::{DimensionError, Matrix};

/// Matrix operations expressed purely in terms of a [NumericDomain] acting on
/// [Matrix] contents.
///
/// The algebra holds a domain and nothing else; every operation is a pure
/// function of its inputs. Elimination works with the division-free row
/// combination `pivot·row − entry·pivotRow`, so triangularization stays exact
/// over integer domains; division only enters during the final normalization
/// step of [invert](MatrixAlgebra::invert).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MatrixAlgebra<D: NumericDomain> {
    domain: D,
}

impl<D: NumericDomain> MatrixAlgebra<D> {
    pub const fn new(domain: D) -> MatrixAlgebra<D> {
        MatrixAlgebra { domain }
    }

    /// Return the domain the algebra operates over.
    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// Add two matrices of identical shape.
    pub fn add(
        &self,
        m1: &Matrix<D::Element>,
        m2: &Matrix<D::Element>,
    ) -> Result<Matrix<D::Element>, DimensionError> {
        Matrix::zip_with(m1, m2, |a, b| self.domain.add(a, b))
    }

    /// Subtract two matrices of identical shape.
    pub fn sub(
        &self,
        m1: &Matrix<D::Element>,
        m2: &Matrix<D::Element>,
    ) -> Result<Matrix<D::Element>, DimensionError> {
        Matrix::zip_with(m1, m2, |a, b| self.domain.sub(a, b))
    }

    /// Multiply every entry of `m` by the scalar `k`.
    pub fn scale(&self, m: &Matrix<D::Element>, k: &D::Element) -> Matrix<D::Element> {
        m.map(|a| self.domain.mul(a, k))
    }

    /// The standard matrix product; requires `m1.size_x == m2.size_y`.
    pub fn multiply(
        &self,
        m1: &Matrix<D::Element>,
        m2: &Matrix<D::Element>,
    ) -> Result<Matrix<D::Element>, DimensionError> {
        if m1.size_x() != m2.size_y() {
            return Err(DimensionError::ShapeMismatch {
                left: (m1.size_x(), m1.size_y()),
                right: (m2.size_x(), m2.size_y()),
            });
        }

        let mut out = Matrix::filled(m2.size_x(), m1.size_y(), self.domain.zero());
        for y in 0..m1.size_y() {
            for x in 0..m2.size_x() {
                let mut acc = self.domain.zero();
                for k in 0..m1.size_x() {
                    acc = self
                        .domain
                        .add(&acc, &self.domain.mul(m1.get(k, y)?, m2.get(x, k)?));
                }
                out.set(x, y, acc)?;
            }
        }

        Ok(out)
    }

    /// Multiply `m1` by the inverse of `m2`.
    pub fn divide(
        &self,
        m1: &Matrix<D::Element>,
        m2: &Matrix<D::Element>,
    ) -> Result<Matrix<D::Element>, DimensionError> {
        let inv = self.invert(m2)?;
        self.multiply(m1, &inv)
    }

    /// The identity matrix of the given size, filled with the domain's
    /// constants.
    pub fn identity(&self, size: u32) -> Matrix<D::Element> {
        Matrix::identity(size, self.domain.zero(), self.domain.one())
    }

    /// The determinant of a square matrix, by cofactor expansion along row 0
    /// with the checkerboard sign rule.
    pub fn determinant(&self, m: &Matrix<D::Element>) -> Result<D::Element, DimensionError> {
        let size = m.size_x();
        if m.size_y() != size {
            return Err(DimensionError::NotSquare {
                size_x: m.size_x(),
                size_y: m.size_y(),
            });
        }

        // a
        if size == 1 {
            return Ok(m.get(0, 0)?.clone());
        }
        // ad - bc
        if size == 2 {
            return Ok(self.domain.sub(
                &self.domain.mul(m.get(0, 0)?, m.get(1, 1)?),
                &self.domain.mul(m.get(1, 0)?, m.get(0, 1)?),
            ));
        }

        let mut total = self.domain.zero();
        for i in 0..size {
            let minor = m.sub_grid(i, 0)?;
            let term = self
                .domain
                .mul(m.get(i, 0)?, &self.determinant(&minor)?);

            total = if sign_flips(i, 0) {
                self.domain.sub(&total, &term)
            } else {
                self.domain.add(&total, &term)
            };
        }

        Ok(total)
    }

    /// Order rows for elimination: rows with more leading zeros sort later;
    /// rows with an identical zero prefix order by the first column past the
    /// prefix.
    pub fn triangular_sort(&self, m: &Matrix<D::Element>) -> Matrix<D::Element> {
        let mut rows: Vec<Vec<D::Element>> =
            (0..m.size_y()).map(|y| m.row(y).to_vec()).collect();
        rows.sort_by(|r1, r2| self.row_order(r1, r2));

        Matrix {
            data: rows.into_iter().flatten().collect(),
            size_x: m.size_x(),
            size_y: m.size_y(),
        }
    }

    fn row_order(&self, r1: &[D::Element], r2: &[D::Element]) -> Ordering {
        let zero = self.domain.zero();

        let mut last_both_zero = 0;
        for i in 0..r1.len() {
            match (r1[i] == zero, r2[i] == zero) {
                (true, false) => return Ordering::Greater,
                (false, true) => return Ordering::Less,
                (true, true) => last_both_zero = i,
                (false, false) => {}
            }
        }

        if last_both_zero + 1 < r1.len() {
            self.domain
                .compare(&r1[last_both_zero + 1], &r2[last_both_zero + 1])
        } else {
            Ordering::Equal
        }
    }

    /// Reduce `m` to upper-triangular form by Gauss elimination.
    ///
    /// After the pre-sort, each row below a pivot is replaced with
    /// `pivot·row − entry·pivotRow`, which needs no division. Rows whose pivot
    /// entry is zero are skipped outright; no re-pivoting is attempted beyond
    /// the initial sort, so singular or pathologically ordered matrices may
    /// not reduce fully.
    pub fn triangularize(
        &self,
        m: &Matrix<D::Element>,
    ) -> Result<Matrix<D::Element>, DimensionError> {
        let mut r = self.triangular_sort(m);
        if r.size_y() == 0 {
            return Ok(r);
        }

        let zero = self.domain.zero();
        for pivot_y in 0..r.size_y() - 1 {
            let pivot = r.get(pivot_y, pivot_y)?.clone();
            if pivot == zero {
                continue;
            }

            for cur_y in pivot_y + 1..r.size_y() {
                let cur = r.get(pivot_y, cur_y)?.clone();
                if cur == zero {
                    continue;
                }

                let row = Matrix::combine_lines(
                    &r,
                    pivot_y,
                    &r,
                    cur_y,
                    |a, b| {
                        self.domain
                            .sub(&self.domain.mul(b, &pivot), &self.domain.mul(a, &cur))
                    },
                    false,
                )?;
                r.set_row(cur_y, row);
            }
        }

        Ok(r)
    }

    /// Invert a square matrix by Gauss-Jordan elimination: triangularize
    /// `[m | identity]`, eliminate upward, normalize each row by its diagonal
    /// entry, and keep the right half.
    ///
    /// A singular input is not pre-checked: the zero diagonal entry surfaces
    /// as whatever the domain's `div` produces for a zero divisor.
    pub fn invert(&self, m: &Matrix<D::Element>) -> Result<Matrix<D::Element>, DimensionError> {
        if m.size_x() != m.size_y() {
            return Err(DimensionError::NotSquare {
                size_x: m.size_x(),
                size_y: m.size_y(),
            });
        }

        let aug = Matrix::concatenate(m, &self.identity(m.size_x()), false)?;
        let mut r = self.triangularize(&aug)?;

        let zero = self.domain.zero();
        for pivot_y in (1..r.size_y()).rev() {
            let pivot = r.get(pivot_y, pivot_y)?.clone();
            if pivot == zero {
                continue;
            }

            for cur_y in (0..pivot_y).rev() {
                let cur = r.get(pivot_y, cur_y)?.clone();
                if cur == zero {
                    continue;
                }

                let row = Matrix::combine_lines(
                    &r,
                    pivot_y,
                    &r,
                    cur_y,
                    |a, b| {
                        self.domain
                            .sub(&self.domain.mul(b, &pivot), &self.domain.mul(a, &cur))
                    },
                    false,
                )?;
                r.set_row(cur_y, row);
            }
        }

        for y in 0..r.size_y() {
            let divisor = r.get(y, y)?.clone();
            let row = Matrix::map_line(&r, y, |a| self.domain.div(a, &divisor), false)?;
            r.set_row(y, row);
        }

        r.horizontal_split(m.size_x(), false)
    }
}

/// The checkerboard sign rule for cofactor expansion: the term at column `x`
/// of row `y` is subtracted iff this returns true.
///
/// ```text
/// +-+-
/// -+-+
/// +-+-
/// ```
fn sign_flips(x: u32, y: u32) -> bool {
    if x % 2 == 0 {
        y % 2 != 0
    } else {
        y % 2 == 0
    }
}

#[cfg(test)]
mod test {
    use rug::Rational;

    use crate::domains::integer::I64;
    use crate::domains::rational::Q;
    use crate::matrix::{DimensionError, Matrix};

    use super::MatrixAlgebra;

    const MTX: MatrixAlgebra<I64> = MatrixAlgebra::new(I64);

    #[test]
    fn elementwise() {
        let m1 = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let m2 = Matrix::from_rows(vec![vec![10, 20], vec![30, 40]]).unwrap();

        assert_eq!(
            MTX.add(&m1, &m2).unwrap(),
            Matrix::from_rows(vec![vec![11, 22], vec![33, 44]]).unwrap()
        );
        assert_eq!(
            MTX.sub(&m2, &m1).unwrap(),
            Matrix::from_rows(vec![vec![9, 18], vec![27, 36]]).unwrap()
        );
        assert_eq!(
            MTX.scale(&m1, &3),
            Matrix::from_rows(vec![vec![3, 6], vec![9, 12]]).unwrap()
        );

        let narrow = Matrix::vector(vec![1, 2]);
        assert!(MTX.add(&m1, &narrow).is_err());
    }

    #[test]
    fn multiply() {
        let m1 = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let m2 =
            Matrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]]).unwrap();

        let p = MTX.multiply(&m1, &m2).unwrap();
        assert_eq!(
            p,
            Matrix::from_rows(vec![vec![58, 64], vec![139, 154]]).unwrap()
        );

        assert_eq!(
            MTX.multiply(&m1, &m1),
            Err(DimensionError::ShapeMismatch {
                left: (3, 2),
                right: (3, 2)
            })
        );
    }

    #[test]
    fn multiply_identity_is_neutral() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let id = MTX.identity(2);

        assert_eq!(MTX.multiply(&m, &id).unwrap(), m);
        assert_eq!(MTX.multiply(&id, &m).unwrap(), m);
    }

    #[test]
    fn determinant() {
        let single = Matrix::from_value(7);
        assert_eq!(MTX.determinant(&single), Ok(7));

        let m2 = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(MTX.determinant(&m2), Ok(-2));

        let m3 = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 16], vec![7, 8, 9]])
            .unwrap();
        assert_eq!(MTX.determinant(&m3), Ok(60));

        let singular =
            Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        assert_eq!(MTX.determinant(&singular), Ok(0));

        for n in 1..=5 {
            assert_eq!(MTX.determinant(&MTX.identity(n)), Ok(1));
        }

        let wide = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
        assert_eq!(
            MTX.determinant(&wide),
            Err(DimensionError::NotSquare {
                size_x: 2,
                size_y: 1
            })
        );
    }

    #[test]
    fn sort_pushes_leading_zeros_down() {
        let m = Matrix::from_rows(vec![
            vec![0, 0, 3],
            vec![0, 2, 1],
            vec![5, 0, 0],
        ])
        .unwrap();

        let s = MTX.triangular_sort(&m);
        assert_eq!(s.row(0), &[5, 0, 0]);
        assert_eq!(s.row(1), &[0, 2, 1]);
        assert_eq!(s.row(2), &[0, 0, 3]);
    }

    #[test]
    fn triangularize_is_division_free() {
        let m = Matrix::from_rows(vec![vec![2, 1], vec![4, 1]]).unwrap();
        let t = MTX.triangularize(&m).unwrap();

        assert_eq!(t.row(0), &[2, 1]);
        assert_eq!(t.row(1), &[0, -2]);
    }

    #[test]
    fn zero_pivots_are_skipped() {
        // no entry in column 0: the pivot is zero and the matrix is returned
        // as sorted, without any re-pivoting
        let m = Matrix::from_rows(vec![vec![0, 2], vec![0, 1]]).unwrap();
        let t = MTX.triangularize(&m).unwrap();

        assert_eq!(t.row(0), &[0, 1]);
        assert_eq!(t.row(1), &[0, 2]);
    }

    #[test]
    fn invert_exact() {
        let q = MatrixAlgebra::new(Q);

        let m = Matrix::from_rows(vec![
            vec![Rational::from(1), Rational::from(2), Rational::from(3)],
            vec![Rational::from(4), Rational::from(5), Rational::from(16)],
            vec![Rational::from(7), Rational::from(8), Rational::from(9)],
        ])
        .unwrap();

        let inv = q.invert(&m).unwrap();
        let expected = Matrix::from_rows(vec![
            vec![
                Rational::from((-83, 60)),
                Rational::from((1, 10)),
                Rational::from((17, 60)),
            ],
            vec![
                Rational::from((19, 15)),
                Rational::from((-1, 5)),
                Rational::from((-1, 15)),
            ],
            vec![
                Rational::from((-1, 20)),
                Rational::from((1, 10)),
                Rational::from((-1, 20)),
            ],
        ])
        .unwrap();
        assert_eq!(inv, expected);

        assert_eq!(q.multiply(&inv, &m).unwrap(), q.identity(3));
        assert_eq!(q.multiply(&m, &inv).unwrap(), q.identity(3));
    }

    #[test]
    fn divide_undoes_multiply() {
        let q = MatrixAlgebra::new(Q);

        let a = Matrix::from_rows(vec![
            vec![Rational::from(3), Rational::from(2)],
            vec![Rational::from(15), Rational::from(4)],
        ])
        .unwrap();
        let b = Matrix::from_rows(vec![
            vec![Rational::from(1), Rational::from(2)],
            vec![Rational::from(3), Rational::from(4)],
        ])
        .unwrap();

        let p = q.multiply(&a, &b).unwrap();
        assert_eq!(q.divide(&p, &b).unwrap(), a);
    }

    #[test]
    fn invert_requires_square() {
        let wide = Matrix::from_rows(vec![vec![Rational::from(1), Rational::from(2)]])
            .unwrap();
        assert_eq!(
            MatrixAlgebra::new(Q).invert(&wide),
            Err(DimensionError::NotSquare {
                size_x: 2,
                size_y: 1
            })
        );
    }

    #[test]
    #[should_panic]
    fn invert_singular_traps() {
        let q = MatrixAlgebra::new(Q);
        let m = Matrix::from_rows(vec![
            vec![Rational::from(1), Rational::from(1)],
            vec![Rational::from(1), Rational::from(1)],
        ])
        .unwrap();

        // the zero diagonal entry reaches the domain's division
        let _ = q.invert(&m);
    }
}
