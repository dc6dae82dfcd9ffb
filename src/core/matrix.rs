// src/core/matrix.rs

use super::error::{QubitError, Result};
use super::scalar::Scalar;
use std::fmt;

/// Dense row-major matrix shared by both back-ends.
///
/// A state vector of dimension `d` is a `d×1` column; an operator is `d×d`.
/// Operations never mutate their inputs: products and compositions allocate
/// a new matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a `rows×cols` matrix from row-major `data`.
    ///
    /// Fails with `QubitError::Shape` if either dimension is zero or
    /// `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(QubitError::shape(rows, cols, "matrix dimensions must be non-zero"));
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| QubitError::shape(rows, cols, "element count overflows usize"))?;
        if data.len() != expected {
            return Err(QubitError::shape(
                rows,
                cols,
                format!("expected {} elements, got {}", expected, data.len()),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a column state vector from its amplitudes.
    pub fn column(amplitudes: Vec<T>) -> Result<Self> {
        let rows = amplitudes.len();
        Self::new(rows, 1, amplitudes)
    }

    /// Creates a matrix from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(ragged) = rows.iter().find(|row| row.len() != cols) {
            return Err(QubitError::shape(
                row_count,
                cols,
                format!("ragged rows: expected {} columns, found a row with {}", cols, ragged.len()),
            ));
        }
        Self::new(row_count, cols, rows.into_iter().flatten().collect())
    }

    /// The `dim×dim` identity.
    pub fn identity(dim: usize) -> Result<Self> {
        let elements = dim
            .checked_mul(dim)
            .filter(|elements| {
                elements
                    .checked_mul(std::mem::size_of::<T>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| QubitError::shape(dim, dim, "identity size overflows addressable memory"))?;
        let mut data = vec![T::zero(); elements];
        for i in 0..dim {
            data[i * dim + i] = T::one();
        }
        Self::new(dim, dim, data)
    }

    /// Computational basis state `|index⟩` of a `dim`-dimensional space.
    pub fn basis_ket(dim: usize, index: usize) -> Result<Self> {
        if index >= dim {
            return Err(QubitError::shape(
                dim,
                1,
                format!("basis index {} out of range for dimension {}", index, dim),
            ));
        }
        let mut amplitudes = vec![T::zero(); dim];
        amplitudes[index] = T::one();
        Self::column(amplitudes)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True for `d×1` state vectors.
    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    /// Entry at `(row, col)`, if in range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Row-major view of the entries.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Conjugate transpose `Mᴴ`.
    pub fn conjugate_transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[row * self.cols + col].conjugate());
            }
        }
        Self { rows: self.cols, cols: self.rows, data }
    }

    /// Multiplies every entry by `factor`.
    pub fn scale(&self, factor: &T) -> Self {
        self.map(|entry| entry.clone() * factor.clone())
    }

    /// Applies `f` to every entry, keeping the shape.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix { rows: self.rows, cols: self.cols, data: self.data.iter().map(f).collect() }
    }

    /// Sum of squared moduli of all entries, `Σ|cᵢ|²`.
    pub fn squared_norm(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, entry| acc + entry.modulus_sqr())
    }

    /// Kronecker product `self ⊗ other`.
    ///
    /// Entry `(i_a·p + i_b, j_a·q + j_b)` of the result is
    /// `self[i_a, j_a] · other[i_b, j_b]` for a `p×q` right operand, so the
    /// left operand owns the most significant part of every index.
    pub fn kron(&self, other: &Self) -> Result<Self> {
        let rows = self.rows.checked_mul(other.rows);
        let cols = self.cols.checked_mul(other.cols);
        let (rows, cols) = match (rows, cols) {
            (Some(rows), Some(cols)) if rows.checked_mul(cols).is_some() => (rows, cols),
            _ => {
                return Err(QubitError::shape(
                    self.rows,
                    self.cols,
                    format!("tensor product with {}x{} overflows usize", other.rows, other.cols),
                ));
            }
        };

        let mut data = Vec::with_capacity(rows * cols);
        for a_row in 0..self.rows {
            for b_row in 0..other.rows {
                for a_col in 0..self.cols {
                    let a = &self.data[a_row * self.cols + a_col];
                    for b_col in 0..other.cols {
                        let b = &other.data[b_row * other.cols + b_col];
                        data.push(a.clone() * b.clone());
                    }
                }
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Matrix product `self · other`.
    ///
    /// Fails with `QubitError::DimensionMismatch` when `self.cols != other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(QubitError::DimensionMismatch { expected: self.cols, actual: other.rows });
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for row in 0..self.rows {
            for col in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.data[row * self.cols + k].clone() * other.data[k * other.cols + col].clone();
                }
                data.push(sum);
            }
        }
        Ok(Self { rows: self.rows, cols: other.cols, data })
    }
}

impl<T: fmt::Display> Matrix<T> {
    fn fmt_entry(entry: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, entry),
            None => write!(f, "{}", entry),
        }
    }

    fn fmt_row(&self, row: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for col in 0..self.cols {
            if col > 0 {
                write!(f, ", ")?;
            }
            Self::fmt_entry(&self.data[row * self.cols + col], f)?;
        }
        write!(f, "]")
    }
}

/// Columns print flat (`[a, b]`), everything else as a list of rows.
/// A precision such as `{:.4}` is forwarded to every entry.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 1 {
            write!(f, "[")?;
            for (i, entry) in self.data.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                Self::fmt_entry(entry, f)?;
            }
            return write!(f, "]");
        }
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ", ")?;
            }
            self.fmt_row(row, f)?;
        }
        write!(f, "]")
    }
}
