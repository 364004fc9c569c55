use std::ops::{Index, IndexMut, Mul};

use nalgebra::{DMatrix, Vector4};

use crate::error::{Error, Result};
use crate::tuple::{approx_eq, Tuple};

/// Dense row-major matrix of arbitrary (small) shape.
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.; rows * cols],
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..size {
            m[(i, i)] = 1.;
        }
        m
    }

    /// Builds a matrix from row-major values; `values.len()` must be `rows * cols`.
    pub fn from_values(rows: usize, cols: usize, values: &[f64]) -> Result<Self> {
        if values.len() != rows * cols {
            return Err(Error::ValueCount {
                rows,
                cols,
                actual: values.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: values.to_vec(),
        })
    }

    /// Infallible 4x4 constructor for transform literals.
    pub fn new4(values: [[f64; 4]; 4]) -> Self {
        Self {
            rows: 4,
            cols: 4,
            data: values.iter().flatten().copied().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let mut product = Matrix::zeros(self.rows, rhs.cols);
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                product[(row, col)] = (0..self.cols)
                    .map(|k| self[(row, k)] * rhs[(k, col)])
                    .sum();
            }
        }
        Ok(product)
    }

    /// Treats `tuple` as a 4x1 column; the matrix must be 4x4.
    pub fn multiply_tuple(&self, tuple: &Tuple) -> Result<Tuple> {
        if self.shape() != (4, 4) {
            return Err(Error::DimensionMismatch {
                lhs: self.shape(),
                rhs: (4, 1),
            });
        }
        let column = [tuple.x, tuple.y, tuple.z, tuple.w];
        let row = |r: usize| -> f64 { (0..4).map(|k| self[(r, k)] * column[k]).sum() };
        Ok(Tuple::new(row(0), row(1), row(2), row(3)))
    }

    pub fn transpose(&self) -> Matrix {
        let mut transposed = Matrix::zeros(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                transposed[(col, row)] = self[(row, col)];
            }
        }
        transposed
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> Result<f64> {
        self.require_square()?;
        match self.rows {
            0 => Err(Error::Empty),
            1 => Ok(self.data[0]),
            2 => Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2]),
            _ => (0..self.cols).try_fold(0., |det: f64, col| -> Result<f64> {
                Ok(det + self[(0, col)] * self.cofactor(0, col)?)
            }),
        }
    }

    /// Copy of the matrix with `row` and `col` removed.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix> {
        self.require_index(row, col)?;
        if self.rows < 2 || self.cols < 2 {
            return Err(Error::Empty);
        }
        let data = self
            .data
            .iter()
            .enumerate()
            .filter(|(i, _)| i / self.cols != row && i % self.cols != col)
            .map(|(_, value)| *value)
            .collect();
        Ok(Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        })
    }

    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        self.require_square()?;
        self.submatrix(row, col)?.determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 0 { minor } else { -minor })
    }

    /// True when the determinant is finite and not exactly zero. A tiny but
    /// nonzero determinant (e.g. a uniform scale of 0.01) still counts.
    pub fn is_invertible(&self) -> bool {
        match self.determinant() {
            Ok(det) => det != 0. && det.is_finite(),
            Err(_) => false,
        }
    }

    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det == 0. || !det.is_finite() {
            return Err(Error::Singular);
        }
        if self.rows == 1 {
            return Ok(Matrix {
                rows: 1,
                cols: 1,
                data: vec![1. / det],
            });
        }
        let mut inverse = Matrix::zeros(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                // writing to (col, row) transposes the cofactor matrix
                inverse[(col, row)] = self.cofactor(row, col)? / det;
            }
        }
        Ok(inverse)
    }

    fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn require_index(&self, row: usize, col: usize) -> Result<()> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| approx_eq(*a, *b))
    }
}

/// Panics on a shape mismatch; use [`Matrix::multiply`] to get an error instead.
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.multiply(rhs) {
            Ok(product) => product,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

/// Panics unless the matrix is 4x4; use [`Matrix::multiply_tuple`] to get an error instead.
impl Mul<Tuple> for &Matrix {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        match self.multiply_tuple(&rhs) {
            Ok(product) => product,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul<Tuple> for Matrix {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        &self * rhs
    }
}

impl From<&Matrix> for DMatrix<f64> {
    fn from(m: &Matrix) -> Self {
        DMatrix::from_row_slice(m.rows, m.cols, &m.data)
    }
}

impl From<&DMatrix<f64>> for Matrix {
    fn from(m: &DMatrix<f64>) -> Self {
        let (rows, cols) = m.shape();
        let mut out = Matrix::zeros(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                out[(row, col)] = m[(row, col)];
            }
        }
        out
    }
}

impl From<Tuple> for Vector4<f64> {
    fn from(t: Tuple) -> Self {
        Vector4::new(t.x, t.y, t.z, t.w)
    }
}

impl From<Vector4<f64>> for Tuple {
    fn from(v: Vector4<f64>) -> Self {
        Tuple::new(v.x, v.y, v.z, v.w)
    }
}
