//! # Matrices over GF(256)
//!
//! Fixed size [`PARAM_MATRIX_DIM`] × [`PARAM_MATRIX_DIM`] matrices with [`GF256`] entries.
//! A matrix converts to and from its [`MatrixBytes`] form in row-major order, one byte per entry:
//!
//! ```text
//! | b0  b1  .. b7  |
//! | b8  b9  .. b15 | = [b0, b1, .., b63]
//! | ..             |
//! | b56 b57 .. b63 |
//! ```
//!
//! Multiplication is associative but not commutative, which is what makes the product of a list of
//! matrices depend on the order of the list.

use std::{
    fmt::{Debug, Display},
    ops::Mul,
};

use crate::{
    arith::FieldArith as _,
    constants::{
        params::{PARAM_MATRIX_DIM, PARAM_MATRIX_SIZE},
        types::MatrixBytes,
    },
    error::{ListHashError, Result},
    subroutines::reduce::repeat,
};

use super::{
    gf256_vector::{gf256_mul_scalar_add_vector, gf256_mul_vector_by_scalar},
    GF256,
};

/// A row of a [`Matrix`]
pub type Row = [GF256; PARAM_MATRIX_DIM];

/// An 8×8 matrix over GF(256)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: [Row; PARAM_MATRIX_DIM],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    /// The additive identity. Only used as a placeholder, never a valid digest.
    pub const fn zero() -> Self {
        Matrix {
            rows: [[GF256::ZERO; PARAM_MATRIX_DIM]; PARAM_MATRIX_DIM],
        }
    }

    /// The multiplicative identity, which is also the digest of the empty list.
    pub fn identity() -> Self {
        let mut matrix = Self::zero();
        for i in 0..PARAM_MATRIX_DIM {
            matrix.rows[i][i] = GF256::ONE;
        }
        matrix
    }

    pub const fn from_rows(rows: [Row; PARAM_MATRIX_DIM]) -> Self {
        Matrix { rows }
    }

    /// Interpret `bytes` row-major, one byte per entry.
    pub fn from_bytes(bytes: &MatrixBytes) -> Self {
        let mut matrix = Self::zero();
        for (row, chunk) in matrix
            .rows
            .iter_mut()
            .zip(bytes.chunks_exact(PARAM_MATRIX_DIM))
        {
            for (entry, byte) in row.iter_mut().zip(chunk.iter()) {
                *entry = GF256::from_byte(*byte);
            }
        }
        matrix
    }

    /// Same as [`Matrix::from_bytes`] for a slice that must hold exactly [`PARAM_MATRIX_SIZE`] bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: &MatrixBytes = bytes.try_into().map_err(|_| ListHashError::InvalidLength {
            expected: PARAM_MATRIX_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn to_bytes(&self) -> MatrixBytes {
        let mut bytes = [0u8; PARAM_MATRIX_SIZE];
        for (chunk, row) in bytes
            .chunks_exact_mut(PARAM_MATRIX_DIM)
            .zip(self.rows.iter())
        {
            for (byte, entry) in chunk.iter_mut().zip(row.iter()) {
                *byte = entry.to_byte();
            }
        }
        bytes
    }

    pub fn get(&self, row: usize, col: usize) -> GF256 {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &[Row; PARAM_MATRIX_DIM] {
        &self.rows
    }

    /// Matrix product `self * rhs`.
    ///
    /// Row `i` of the product is the sum of the rows of `rhs` scaled by the entries of row `i` of `self`.
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        let mut out = Matrix::zero();
        for (out_row, lhs_row) in out.rows.iter_mut().zip(self.rows.iter()) {
            for (scalar, rhs_row) in lhs_row.iter().zip(rhs.rows.iter()) {
                gf256_mul_scalar_add_vector(out_row, rhs_row, *scalar);
            }
        }
        out
    }

    /// `self` multiplied with itself `n` times.
    pub fn pow(&self, n: u64) -> Matrix {
        repeat(self, n)
    }

    /// Determinant by Gaussian elimination.
    ///
    /// Row swaps do not change the sign in characteristic 2, so the determinant is the product of the pivots.
    pub fn determinant(&self) -> GF256 {
        let mut rows = self.rows;
        let mut det = GF256::ONE;

        for col in 0..PARAM_MATRIX_DIM {
            let pivot = (col..PARAM_MATRIX_DIM)
                .find_map(|r| rows[r][col].field_mul_inverse().ok().map(|inv| (r, inv)));
            let Some((pivot, pivot_inv)) = pivot else {
                return GF256::ZERO;
            };
            rows.swap(col, pivot);
            det.field_mul_mut(rows[col][col]);

            let pivot_row = rows[col];
            for row in rows.iter_mut().skip(col + 1) {
                let factor = row[col].field_mul(pivot_inv);
                gf256_mul_scalar_add_vector(row, &pivot_row, factor);
            }
        }

        det
    }

    /// True iff the determinant is non-zero.
    pub fn is_invertible(&self) -> bool {
        !self.determinant().is_zero()
    }

    /// Inverse by Gauss-Jordan elimination on `[self | I]`.
    pub fn inverse(&self) -> Result<Matrix> {
        let mut rows = self.rows;
        let mut inverse = Matrix::identity().rows;

        for col in 0..PARAM_MATRIX_DIM {
            let pivot = (col..PARAM_MATRIX_DIM)
                .find_map(|r| rows[r][col].field_mul_inverse().ok().map(|inv| (r, inv)));
            let Some((pivot, pivot_inv)) = pivot else {
                return Err(ListHashError::SingularMatrix);
            };
            rows.swap(col, pivot);
            inverse.swap(col, pivot);

            // Normalise the pivot row
            gf256_mul_vector_by_scalar(&mut rows[col], pivot_inv);
            gf256_mul_vector_by_scalar(&mut inverse[col], pivot_inv);

            let pivot_row = rows[col];
            let pivot_inverse_row = inverse[col];
            for r in 0..PARAM_MATRIX_DIM {
                if r == col || rows[r][col].is_zero() {
                    continue;
                }
                let factor = rows[r][col];
                gf256_mul_scalar_add_vector(&mut rows[r], &pivot_row, factor);
                gf256_mul_scalar_add_vector(&mut inverse[r], &pivot_inverse_row, factor);
            }
        }

        Ok(Matrix::from_rows(inverse))
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        self.multiply(rhs)
    }
}

impl From<&MatrixBytes> for Matrix {
    fn from(bytes: &MatrixBytes) -> Self {
        Matrix::from_bytes(bytes)
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, entry) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", entry)?;
            }
        }
        Ok(())
    }
}

impl Debug for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Matrix({})", hex::encode(self.to_bytes()))
    }
}
