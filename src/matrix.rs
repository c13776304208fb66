use std::fmt::{Display, Write};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::slice::Chunks;

use smallvec::SmallVec;

use crate::domains::{Field, Ring};

/// An n-dimensional vector with entries in the ring `F`.
///
/// Solution vectors of linear systems are returned in this form; they can be
/// turned into single-column matrices for substitution checks.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Vector<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) field: F,
}

impl<F: Ring> Vector<F> {
    pub fn new(data: Vec<F::Element>, field: F) -> Vector<F> {
        Vector { data, field }
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reinterpret the vector as a column matrix, without copying.
    pub fn into_matrix(self) -> Matrix<F> {
        Matrix {
            nrows: self.data.len() as u32,
            ncols: 1,
            data: self.data,
            field: self.field,
        }
    }

    /// Take the scalar product with `rhs`.
    pub fn dot(&self, rhs: &Self) -> F::Element {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Vector lengths do not match: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        let mut res = self.field.zero();
        for (e1, e2) in self.data.iter().zip(&rhs.data) {
            self.field.add_mul_assign(&mut res, e1, e2);
        }

        res
    }
}

impl<F: Ring> Mul<F::Element> for Vector<F> {
    type Output = Vector<F>;

    /// Scale every entry by `rhs`.
    fn mul(mut self, rhs: F::Element) -> Self::Output {
        for x in &mut self.data {
            self.field.mul_assign(x, &rhs);
        }
        self
    }
}

impl<F: Ring> Mul<F::Element> for &Vector<F> {
    type Output = Vector<F>;

    fn mul(self, rhs: F::Element) -> Self::Output {
        self.clone() * rhs
    }
}

impl<F: Ring> Add<&Vector<F>> for &Vector<F> {
    type Output = Vector<F>;

    fn add(self, rhs: &Vector<F>) -> Self::Output {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Vector lengths do not match: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        Vector {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| self.field.add(a, b))
                .collect(),
            field: self.field.clone(),
        }
    }
}

impl<F: Ring> Sub<&Vector<F>> for &Vector<F> {
    type Output = Vector<F>;

    fn sub(self, rhs: &Vector<F>) -> Self::Output {
        if self.data.len() != rhs.data.len() {
            panic!(
                "Vector lengths do not match: {} vs {}",
                self.data.len(),
                rhs.data.len()
            );
        }

        Vector {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| self.field.sub(a, b))
                .collect(),
            field: self.field.clone(),
        }
    }
}

impl<F: Ring> Neg for Vector<F> {
    type Output = Vector<F>;

    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = self.field.neg(e);
        }

        self
    }
}

impl<F: Ring> Index<u32> for Vector<F> {
    type Output = F::Element;

    #[inline]
    fn index(&self, index: u32) -> &Self::Output {
        &self.data[index as usize]
    }
}

impl<F: Ring> IndexMut<u32> for Vector<F> {
    #[inline]
    fn index_mut(&mut self, index: u32) -> &mut F::Element {
        &mut self.data[index as usize]
    }
}

impl<F: Ring> Display for Vector<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('[')?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", e)?;
        }
        f.write_char(']')
    }
}

/// Errors that can occur when performing matrix operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MatrixError {
    /// The shapes of the operands are not compatible for the operation.
    ShapeMismatch,
    /// A determinant or inverse was requested for a non-square matrix.
    NotSquare,
    /// The matrix has no inverse.
    Singular,
    /// An identity matrix of order zero was requested.
    InvalidOrder,
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::ShapeMismatch => write!(f, "The shape of the matrix is not compatible"),
            MatrixError::NotSquare => write!(f, "The matrix is not square"),
            MatrixError::Singular => write!(f, "The matrix is singular"),
            MatrixError::InvalidOrder => {
                write!(f, "The order of an identity matrix must be at least one")
            }
        }
    }
}

/// A dense matrix with entries that are elements of a ring `F`.
///
/// Matrices have value semantics: every arithmetic operation returns a new
/// matrix and algorithms that need to row-reduce always work on a private
/// copy, so a caller's matrix is never observably mutated.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Matrix<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) nrows: u32,
    pub(crate) ncols: u32,
    pub(crate) field: F,
}

impl<F: Ring> Matrix<F> {
    /// Create a zero matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: u32, ncols: u32, field: F) -> Matrix<F> {
        assert!(
            nrows > 0 && ncols > 0,
            "Matrix dimensions must be at least 1x1"
        );
        Matrix {
            data: vec![field.zero(); nrows as usize * ncols as usize],
            nrows,
            ncols,
            field,
        }
    }

    /// Create the identity matrix of the given order, with ones on the main
    /// diagonal and zeroes elsewhere.
    pub fn identity(order: u32, field: F) -> Result<Matrix<F>, MatrixError> {
        if order < 1 {
            return Err(MatrixError::InvalidOrder);
        }

        let one = field.one();
        let mut m = Matrix::new(order, order, field);
        for i in 0..order {
            m[(i, i)] = one.clone();
        }
        Ok(m)
    }

    /// Create a single-column matrix holding `data`.
    pub fn new_vec(data: Vec<F::Element>, field: F) -> Matrix<F> {
        Matrix {
            nrows: data.len() as u32,
            ncols: 1,
            data,
            field,
        }
    }

    /// Create a matrix from entries in row-major order. The entry count must
    /// equal `nrows * ncols`.
    pub fn from_linear(
        data: Vec<F::Element>,
        nrows: u32,
        ncols: u32,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        if nrows == 0 || ncols == 0 || data.len() != nrows as usize * ncols as usize {
            return Err(MatrixError::ShapeMismatch);
        }

        Ok(Matrix {
            data,
            nrows,
            ncols,
            field,
        })
    }

    /// Create a matrix from a list of rows. Every row must have the same
    /// nonzero length.
    pub fn from_nested_vec(rows: Vec<Vec<F::Element>>, field: F) -> Result<Matrix<F>, MatrixError> {
        let ncols = match rows.first() {
            Some(r) if !r.is_empty() => r.len(),
            _ => return Err(MatrixError::ShapeMismatch),
        };

        let nrows = rows.len();
        let mut data = Vec::with_capacity(nrows * ncols);
        for r in rows {
            if r.len() != ncols {
                return Err(MatrixError::ShapeMismatch);
            }
            data.extend(r);
        }

        Ok(Matrix {
            data,
            nrows: nrows as u32,
            ncols: ncols as u32,
            field,
        })
    }

    /// The number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows as usize
    }

    /// The number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols as usize
    }

    /// The field the entries live in.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Iterate over the rows of the matrix, each yielded as a slice.
    pub fn row_iter(&self) -> Chunks<'_, F::Element> {
        self.data.chunks(self.ncols as usize)
    }

    /// Check whether every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|e| F::is_zero(e))
    }

    /// Return the matrix with the row and column roles exchanged.
    pub fn transpose(&self) -> Matrix<F> {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self[(i, j)].clone());
            }
        }

        Matrix {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
            field: self.field.clone(),
        }
    }

    /// Scale every entry of the matrix by `e`.
    pub fn mul_scalar(&self, e: &F::Element) -> Matrix<F> {
        let mut m = self.clone();
        for x in &mut m.data {
            self.field.mul_assign(x, e);
        }
        m
    }

    /// Add two matrices entrywise, or return `ShapeMismatch` when their
    /// dimensions differ.
    pub fn checked_add(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::ShapeMismatch);
        }

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| self.field.add(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        })
    }

    /// Subtract `rhs` from this matrix entrywise, or return `ShapeMismatch`
    /// when their dimensions differ.
    pub fn checked_sub(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::ShapeMismatch);
        }

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| self.field.sub(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        })
    }

    /// Multiply two matrices, or return `ShapeMismatch` when the number of
    /// columns of this matrix differs from the number of rows of `rhs`.
    pub fn checked_mul(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::ShapeMismatch);
        }

        let mut m = Matrix::new(self.nrows, rhs.ncols, self.field.clone());
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let mut sum = self.field.zero();
                for k in 0..self.ncols {
                    self.field.add_mul_assign(&mut sum, &self[(i, k)], &rhs[(k, j)]);
                }
                m[(i, j)] = sum;
            }
        }

        Ok(m)
    }

    /// Return the submatrix obtained by deleting `row` and `col`.
    pub fn minor(&self, row: u32, col: u32) -> Matrix<F> {
        assert!(
            self.nrows > 1 && self.ncols > 1,
            "A 1x1 matrix has no minors"
        );

        let mut data = Vec::with_capacity((self.nrows as usize - 1) * (self.ncols as usize - 1));
        for i in 0..self.nrows {
            if i == row {
                continue;
            }
            for j in 0..self.ncols {
                if j != col {
                    data.push(self[(i, j)].clone());
                }
            }
        }

        Matrix {
            data,
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
            field: self.field.clone(),
        }
    }

    /// Compute the determinant by recursive cofactor expansion along the
    /// first row.
    ///
    /// Exact but factorial-time; it serves as an independent cross-check of
    /// the elimination-based [det](Matrix::det) and only needs ring
    /// operations.
    pub fn det_laplace(&self) -> Result<F::Element, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::NotSquare);
        }

        Ok(self.cofactor_expansion())
    }

    fn cofactor_expansion(&self) -> F::Element {
        if self.nrows == 1 {
            return self.data[0].clone();
        }

        let mut det = self.field.zero();
        for i in 0..self.ncols {
            if F::is_zero(&self[(0, i)]) {
                continue;
            }

            let mut cof = self
                .field
                .mul(&self[(0, i)], &self.minor(0, i).cofactor_expansion());
            // the cofactor sign is (-1)^i since the expansion row is 0
            if i % 2 == 1 {
                cof = self.field.neg(&cof);
            }
            self.field.add_assign(&mut det, &cof);
        }
        det
    }

    /// Exchange the rows `r1` and `r2` in place.
    fn swap_rows(&mut self, r1: u32, r2: u32) {
        if r1 == r2 {
            return;
        }
        for c in 0..self.ncols {
            self.data.swap(
                (r1 * self.ncols + c) as usize,
                (r2 * self.ncols + c) as usize,
            );
        }
    }
}

impl<F: Ring> Index<u32> for Matrix<F> {
    type Output = [F::Element];

    /// Get row `index` as a slice.
    #[inline]
    fn index(&self, index: u32) -> &Self::Output {
        let start = index as usize * self.ncols as usize;
        &self.data[start..start + self.ncols as usize]
    }
}

impl<F: Ring> Index<(u32, u32)> for Matrix<F> {
    type Output = F::Element;

    /// Get the entry at row `index.0` and column `index.1`.
    #[inline]
    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[(index.0 * self.ncols + index.1) as usize]
    }
}

impl<F: Ring> IndexMut<(u32, u32)> for Matrix<F> {
    /// Get the entry at row `index.0` and column `index.1`.
    #[inline]
    fn index_mut(&mut self, index: (u32, u32)) -> &mut F::Element {
        &mut self.data[(index.0 * self.ncols + index.1) as usize]
    }
}

impl<F: Ring> Display for Matrix<F> {
    /// Write the canonical text form: bracketed, comma-separated rows, one
    /// row per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('[')?;
        for (ri, row) in self.row_iter().enumerate() {
            if ri > 0 {
                f.write_str(",\n")?;
            }
            f.write_char('[')?;
            for (ci, e) in row.iter().enumerate() {
                if ci > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", e)?;
            }
            f.write_char(']')?;
        }
        f.write_char(']')
    }
}

impl<F: Ring> Add<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Add two matrices.
    ///
    /// Panics when the dimensions do not match; see
    /// [checked_add](Matrix::checked_add).
    fn add(self, rhs: &Matrix<F>) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "Cannot add a {}x{} matrix to a {}x{} matrix",
                rhs.nrows, rhs.ncols, self.nrows, self.ncols
            ),
        }
    }
}

impl<F: Ring> Sub<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Subtract two matrices.
    ///
    /// Panics when the dimensions do not match; see
    /// [checked_sub](Matrix::checked_sub).
    fn sub(self, rhs: &Matrix<F>) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "Cannot subtract a {}x{} matrix from a {}x{} matrix",
                rhs.nrows, rhs.ncols, self.nrows, self.ncols
            ),
        }
    }
}

impl<F: Ring> Mul<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Multiply two matrices.
    ///
    /// Panics when the dimensions do not match; see
    /// [checked_mul](Matrix::checked_mul).
    fn mul(self, rhs: &Matrix<F>) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "Cannot multiply a {}x{} matrix with a {}x{} matrix",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            ),
        }
    }
}

impl<F: Ring> AddAssign<&Matrix<F>> for Matrix<F> {
    /// Add `rhs` to this matrix in place.
    fn add_assign(&mut self, rhs: &Matrix<F>) {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot add a {}x{} matrix to a {}x{} matrix",
                rhs.nrows, rhs.ncols, self.nrows, self.ncols
            );
        }

        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            self.field.add_assign(a, b);
        }
    }
}

impl<F: Ring> SubAssign<&Matrix<F>> for Matrix<F> {
    /// Subtract `rhs` from this matrix in place.
    fn sub_assign(&mut self, rhs: &Matrix<F>) {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot subtract a {}x{} matrix from a {}x{} matrix",
                rhs.nrows, rhs.ncols, self.nrows, self.ncols
            );
        }

        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            self.field.sub_assign(a, b);
        }
    }
}

impl<F: Ring> MulAssign<&Matrix<F>> for Matrix<F> {
    fn mul_assign(&mut self, rhs: &Matrix<F>) {
        *self = &*self * rhs;
    }
}

impl<F: Ring> Neg for Matrix<F> {
    type Output = Matrix<F>;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = self.field.neg(e);
        }

        self
    }
}

impl<F: Field> Matrix<F> {
    /// Compute the determinant by triangularizing a copy of the matrix with
    /// Gaussian elimination.
    ///
    /// A row exchange flips the sign of the determinant, and a pivot column
    /// without any nonzero candidate makes the determinant exactly zero.
    pub fn det(&self) -> Result<F::Element, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::NotSquare);
        }

        let field = self.field.clone();
        let mut m = self.clone();
        let n = m.nrows;
        let mut sign_flip = false;

        for i in 0..n {
            if F::is_zero(&m[(i, i)]) {
                // select a nonzero pivot from the rows below
                let mut pivot = None;
                for k in i + 1..n {
                    if !F::is_zero(&m[(k, i)]) {
                        pivot = Some(k);
                        break;
                    }
                }
                match pivot {
                    Some(k) => {
                        m.swap_rows(i, k);
                        sign_flip = !sign_flip;
                    }
                    None => return Ok(field.zero()),
                }
            }

            let inv_x = field.inv(&m[(i, i)]);
            for k in i + 1..n {
                if !F::is_zero(&m[(k, i)]) {
                    let s = field.mul(&m[(k, i)], &inv_x);
                    m[(k, i)] = field.zero();
                    for l in i + 1..n {
                        let mut e = std::mem::replace(&mut m[(k, l)], field.zero());
                        field.sub_mul_assign(&mut e, &m[(i, l)], &s);
                        m[(k, l)] = e;
                    }
                }
            }
        }

        // the matrix is triangular now, so the determinant is the product of
        // the diagonal
        let mut det = field.one();
        for i in 0..n {
            field.mul_assign(&mut det, &m[(i, i)]);
        }
        if sign_flip {
            det = field.neg(&det);
        }

        Ok(det)
    }

    /// Reduce the first `max_col` columns to reduced row-echelon form with
    /// Gauss-Jordan elimination, treating any remaining columns as augmented.
    ///
    /// Every pivot is normalized to one and is the only nonzero entry of its
    /// column. Returns the pivot columns in ascending order; the rank of the
    /// reduced part is their count, and every other column is free.
    pub fn row_reduce(&mut self, max_col: u32) -> SmallVec<[u32; 16]> {
        let field = self.field.clone();
        let mut pivots = SmallVec::new();
        let mut pivot_row = 0;

        for j in 0..max_col.min(self.ncols) {
            if pivot_row == self.nrows {
                break;
            }

            if F::is_zero(&self[(pivot_row, j)]) {
                // select a nonzero pivot from the rows below
                let mut found = false;
                for k in pivot_row + 1..self.nrows {
                    if !F::is_zero(&self[(k, j)]) {
                        self.swap_rows(pivot_row, k);
                        found = true;
                        break;
                    }
                }
                if !found {
                    // the column stays without a pivot
                    continue;
                }
            }

            // normalize the pivot to one
            if !field.is_one(&self[(pivot_row, j)]) {
                let inv_x = field.inv(&self[(pivot_row, j)]);
                for l in j..self.ncols {
                    field.mul_assign(&mut self[(pivot_row, l)], &inv_x);
                }
            }

            // eliminate the pivot column from every other row, above and below
            for r in 0..self.nrows {
                if r == pivot_row || F::is_zero(&self[(r, j)]) {
                    continue;
                }
                let scale = std::mem::replace(&mut self[(r, j)], field.zero());
                for l in j + 1..self.ncols {
                    let mut e = std::mem::replace(&mut self[(r, l)], field.zero());
                    field.sub_mul_assign(&mut e, &self[(pivot_row, l)], &scale);
                    self[(r, l)] = e;
                }
            }

            pivots.push(j);
            pivot_row += 1;
        }

        pivots
    }

    /// Get the rank of the matrix.
    pub fn rank(&self) -> usize {
        self.clone().row_reduce(self.ncols).len()
    }

    /// Compute the inverse of a square matrix, if it exists.
    /// Otherwise, this function returns `MatrixError::Singular`.
    pub fn inv(&self) -> Result<Matrix<F>, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::NotSquare);
        }

        // Gauss-Jordan elimination on the augmented matrix [A | I]
        let n = self.nrows;
        let mut m = Matrix::new(n, 2 * n, self.field.clone());
        for r in 0..n {
            for c in 0..n {
                m[(r, c)] = self[(r, c)].clone();
            }
            m[(r, n + r)] = self.field.one();
        }

        let pivots = m.row_reduce(n);
        if (pivots.len() as u32) < n {
            return Err(MatrixError::Singular);
        }

        // the left half is the identity now and the right half the inverse
        let mut res = Matrix::new(n, n, self.field.clone());
        for r in 0..n {
            for c in 0..n {
                res[(r, c)] = std::mem::replace(&mut m[(r, n + c)], self.field.zero());
            }
        }

        Ok(res)
    }
}
