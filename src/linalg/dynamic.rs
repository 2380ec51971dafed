//! A runtime-sized matrix with the same column-major semantics as the fixed
//! types, plus row/column insertion and deletion.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::LinalgError;

/// A matrix whose dimensions are chosen at runtime.
///
/// Storage is a flat column-major buffer; `at(col, row)` addresses a scalar
/// regardless of layout. Slicing operations return owning copies.
///
/// ```
/// use cse_rs::linalg::DynamicMatrix;
///
/// // Row-major literal, 2 columns x 2 rows.
/// let m = DynamicMatrix::from_rows(&[1.0, 2.0, 3.0, 4.0], (2, 2));
/// assert_eq!(m.at(1, 0), 2.0);
/// assert_eq!(m.get_row(1), vec![3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicMatrix {
    data: Vec<f64>,
    cols: usize,
    rows: usize,
}

impl DynamicMatrix {
    /// An all-zero matrix of the given size (columns, rows).
    pub fn new(cols: usize, rows: usize) -> Self {
        DynamicMatrix {
            data: vec![0.0; cols * rows],
            cols,
            rows,
        }
    }

    /// Builds from a row-major slice with the given (columns, rows) size.
    pub fn from_rows(values: &[f64], (cols, rows): (usize, usize)) -> Self {
        let mut m = Self::new(cols, rows);
        for row in 0..rows {
            for col in 0..cols {
                if let Some(v) = values.get(row * cols + col) {
                    *m.at_mut(col, row) = *v;
                }
            }
        }
        m
    }

    /// A square matrix with `scalar` along the main diagonal.
    pub fn diagonal(scalar: f64, n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            *m.at_mut(i, i) = scalar;
        }
        m
    }

    /// The size as (columns, rows).
    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The scalar at (column, row).
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn at(&self, col: usize, row: usize) -> f64 {
        assert!(col < self.cols && row < self.rows, "matrix index out of range");
        self.data[col * self.rows + row]
    }

    /// Mutable access to the scalar at (column, row).
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn at_mut(&mut self, col: usize, row: usize) -> &mut f64 {
        assert!(col < self.cols && row < self.rows, "matrix index out of range");
        &mut self.data[col * self.rows + row]
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Grows or shrinks to the new (columns, rows) size, zero-filling any new
    /// elements.
    pub fn resize(&mut self, (new_cols, new_rows): (usize, usize)) {
        let mut next = DynamicMatrix::new(new_cols, new_rows);
        for col in 0..self.cols.min(new_cols) {
            for row in 0..self.rows.min(new_rows) {
                *next.at_mut(col, row) = self.at(col, row);
            }
        }
        *self = next;
    }

    /// Inserts a column at `pos`, zero-padding or truncating `col` to the row
    /// count.
    pub fn add_column(&mut self, pos: usize, col: &[f64]) {
        assert!(pos <= self.cols, "matrix index out of range");
        if self.cols == 0 && self.rows == 0 {
            self.rows = col.len();
        }
        let mut new_col = col.to_vec();
        new_col.resize(self.rows, 0.0);
        let at = pos * self.rows;
        self.data.splice(at..at, new_col);
        self.cols += 1;
    }

    /// Inserts a row at `pos`, zero-padding or truncating `row` to the column
    /// count.
    pub fn add_row(&mut self, pos: usize, row: &[f64]) {
        assert!(pos <= self.rows, "matrix index out of range");
        for col in (0..self.cols).rev() {
            let v = row.get(col).copied().unwrap_or_default();
            self.data.insert(col * self.rows + pos, v);
        }
        self.rows += 1;
    }

    /// Overwrites the column at `pos`.
    pub fn set_column(&mut self, pos: usize, col: &[f64]) {
        for row in 0..self.rows {
            *self.at_mut(pos, row) = col.get(row).copied().unwrap_or_default();
        }
    }

    /// Overwrites the row at `pos`.
    pub fn set_row(&mut self, pos: usize, row: &[f64]) {
        for col in 0..self.cols {
            *self.at_mut(col, pos) = row.get(col).copied().unwrap_or_default();
        }
    }

    /// An owning copy of the column at `pos`.
    pub fn get_column(&self, pos: usize) -> Vec<f64> {
        (0..self.rows).map(|r| self.at(pos, r)).collect()
    }

    /// An owning copy of the row at `pos`.
    pub fn get_row(&self, pos: usize) -> Vec<f64> {
        (0..self.cols).map(|c| self.at(c, pos)).collect()
    }

    /// Removes the column at `pos`.
    pub fn delete_column(&mut self, pos: usize) {
        assert!(pos < self.cols, "matrix index out of range");
        let at = pos * self.rows;
        self.data.drain(at..at + self.rows);
        self.cols -= 1;
    }

    /// Removes the row at `pos`.
    pub fn delete_row(&mut self, pos: usize) {
        assert!(pos < self.rows, "matrix index out of range");
        for col in (0..self.cols).rev() {
            self.data.remove(col * self.rows + pos);
        }
        self.rows -= 1;
    }

    /// The transpose, as an owning copy.
    pub fn transpose(&self) -> Self {
        let mut out = Self::new(self.rows, self.cols);
        for c in 0..self.cols {
            for r in 0..self.rows {
                *out.at_mut(r, c) = self.at(c, r);
            }
        }
        out
    }

    /// Matrix product; fails on a dimension mismatch.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, LinalgError> {
        if self.cols != rhs.rows {
            return Err(LinalgError::DimensionMismatch {
                left: self.size(),
                right: rhs.size(),
            });
        }
        let mut out = Self::new(rhs.cols, self.rows);
        for col in 0..rhs.cols {
            for row in 0..self.rows {
                let mut sum = 0.0;
                for j in 0..self.cols {
                    sum += self.at(j, row) * rhs.at(col, j);
                }
                *out.at_mut(col, row) = sum;
            }
        }
        Ok(out)
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        assert_eq!(self.size(), rhs.size(), "size of matrices is not equal");
        let mut out = self.clone();
        for (dst, src) in out.data.iter_mut().zip(rhs.data.iter()) {
            *dst = f(*dst, *src);
        }
        out
    }
}

impl Add for &DynamicMatrix {
    type Output = DynamicMatrix;
    fn add(self, rhs: Self) -> DynamicMatrix {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for &DynamicMatrix {
    type Output = DynamicMatrix;
    fn sub(self, rhs: Self) -> DynamicMatrix {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl AddAssign<&DynamicMatrix> for DynamicMatrix {
    fn add_assign(&mut self, rhs: &DynamicMatrix) {
        *self = (&*self) + rhs;
    }
}

impl SubAssign<&DynamicMatrix> for DynamicMatrix {
    fn sub_assign(&mut self, rhs: &DynamicMatrix) {
        *self = (&*self) - rhs;
    }
}

impl Mul<f64> for &DynamicMatrix {
    type Output = DynamicMatrix;
    fn mul(self, rhs: f64) -> DynamicMatrix {
        let mut out = self.clone();
        for v in out.data.iter_mut() {
            *v *= rhs;
        }
        out
    }
}

impl MulAssign<f64> for DynamicMatrix {
    fn mul_assign(&mut self, rhs: f64) {
        for v in self.data.iter_mut() {
            *v *= rhs;
        }
    }
}

impl Mul for &DynamicMatrix {
    type Output = DynamicMatrix;
    /// # Panics
    ///
    /// Panics if the dimensions do not line up; use
    /// [`DynamicMatrix::checked_mul`] to keep the error.
    fn mul(self, rhs: Self) -> DynamicMatrix {
        self.checked_mul(rhs).expect("matrices can't multiply")
    }
}

impl Neg for &DynamicMatrix {
    type Output = DynamicMatrix;
    fn neg(self) -> DynamicMatrix {
        self * -1.0
    }
}

impl fmt::Display for DynamicMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row != 0 {
                write!(f, " ")?;
            }
            for col in 0..self.cols {
                write!(f, "{}", self.at(col, row))?;
                if row < self.rows - 1 || col < self.cols - 1 {
                    write!(f, ", ")?;
                }
            }
            if row < self.rows - 1 {
                writeln!(f)?;
            }
        }
        writeln!(f, "]")
    }
}
