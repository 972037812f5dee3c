/* ************************************************************************ **
** This file is part of ortho, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::ndarray::{Array, Array2};
use crate::InvalidInputError;

/// Owned, contiguous, C-order matrix of `f64`.
///
/// Shape invariants are structural rather than by convention: a `Matrix`
/// always has at least one row and one column, every row has the same
/// length, and the data is in standard (row-major) layout.  Input that
/// violates them is rejected at construction with `InvalidInputError`,
/// so the algorithms never have to re-validate.
#[derive(Debug, Clone)]
pub struct Matrix(
    // invariant: .is_standard_layout()
    // invariant: both dims >= 1
    Array2<f64>,
);

impl Matrix {
    /// Build a matrix from nested rows.
    ///
    /// This is the boundary where malformed nested-container input fails;
    /// past it, ragged or empty shapes cannot be represented.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Matrix, InvalidInputError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(InvalidInputError::Empty);
        }
        let expected = rows[0].len();
        for (row, data) in rows.iter().enumerate() {
            if data.len() != expected {
                return Err(InvalidInputError::Ragged { row, len: data.len(), expected });
            }
        }

        let data = rows.iter().flat_map(|row| row.iter().cloned()).collect();
        let arr = Array::from_shape_vec((rows.len(), expected), data)
            .expect("(BUG) shape just validated");
        Ok(Matrix(arr))
    }

    /// Build from an existing array, re-copying into standard layout when
    /// necessary (e.g. a transposed view that was made owned).
    pub fn from_array(arr: Array2<f64>) -> Result<Matrix, InvalidInputError> {
        if arr.rows() == 0 || arr.cols() == 0 {
            return Err(InvalidInputError::Empty);
        }
        if arr.is_standard_layout() {
            Ok(Matrix(arr))
        } else {
            let dim = arr.raw_dim();
            // .iter() walks in logical order regardless of the actual strides
            let data: Vec<f64> = arr.iter().cloned().collect();
            let arr = Array::from_shape_vec(dim, data).expect("(BUG) length unchanged");
            Ok(Matrix(arr))
        }
    }

    /// The n-by-n identity.
    pub fn eye(n: usize) -> Matrix {
        assert!(n >= 1, "eye(0) violates the nonempty invariant");
        Matrix(Array2::eye(n))
    }

    pub fn into_inner(self) -> Array2<f64> { self.0 }

    /// Approximate in-memory size of the element buffer, in bytes.
    ///
    /// This is an explicit estimate (element count times element width);
    /// struct headers and allocator overhead are not counted.
    pub fn approx_size_bytes(&self) -> usize {
        self.0.len() * ::std::mem::size_of::<f64>()
    }
}

impl ::std::ops::Deref for Matrix {
    type Target = Array2<f64>;

    fn deref(&self) -> &Array2<f64> { &self.0 }
}
