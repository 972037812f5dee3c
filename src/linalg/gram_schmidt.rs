/* ************************************************************************ **
** This file is part of ortho, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::ndarray::{Array1, Array2};
use crate::{Matrix, DEGENERACY_EPS};

/// Orthonormalize the columns of a matrix by classical Gram-Schmidt.
///
/// Columns are processed left to right: each one has its projection onto
/// every previously produced column removed, then is scaled to unit norm.
/// The output has the same shape as the input, and for linearly
/// independent input columns it spans the same subspace.
///
/// A residual whose norm falls at or below `DEGENERACY_EPS` is stored
/// unnormalized instead of being divided by ~0.  That makes near-dependent
/// columns a policy, not an error; callers that need to detect rank
/// deficiency must look for sub-unit column norms in the output.
///
/// Cost is O(rows * cols^2).  The input is not modified.
pub fn gram_schmidt(matrix: &Matrix) -> Matrix {
    let (rows, cols) = matrix.dim();
    let mut out = Array2::<f64>::zeros((rows, cols));

    for i in 0..cols {
        let mut v: Array1<f64> = matrix.column(i).to_owned();
        for j in 0..i {
            let proj = out.column(j).dot(&v);
            v.scaled_add(-proj, &out.column(j));
        }

        let norm = v.dot(&v).sqrt();
        if norm > DEGENERACY_EPS {
            v /= norm;
        } else {
            warn!("column {} is nearly dependent on its predecessors (residual norm {:e})",
                i, norm);
        }
        out.column_mut(i).assign(&v);
    }

    Matrix::from_array(out).expect("(BUG) input shape preserved")
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::Matrix;
    use crate::test_util::{random_matrix, random_shape};

    use ::itertools::Itertools;

    #[test]
    fn output_columns_are_orthonormal() {
        // NOTE: classical Gram-Schmidt loses orthogonality like cond^2 * eps,
        //       so the shapes here are kept small enough that random inputs
        //       stay well conditioned.
        for _ in 0..10 {
            let (rows, cols) = random_shape(8);
            let q = gram_schmidt(&random_matrix(rows, cols));

            assert_eq!(q.dim(), (rows, cols));
            for (i, j) in (0..cols).tuple_combinations() {
                assert_close!(abs=1e-6, q.column(i).dot(&q.column(j)), 0.0);
            }
            for i in 0..cols {
                assert_close!(abs=1e-6, q.column(i).dot(&q.column(i)).sqrt(), 1.0);
            }
        }
    }

    #[test]
    fn output_spans_the_input_columns() {
        for _ in 0..10 {
            let (rows, cols) = random_shape(8);
            let m = random_matrix(rows, cols);
            let q = gram_schmidt(&m);

            // projecting each input column onto the output basis must
            // reproduce it
            for i in 0..cols {
                let x = m.column(i).to_owned();
                let mut projected = Array1::<f64>::zeros(rows);
                for j in 0..cols {
                    projected.scaled_add(q.column(j).dot(&x), &q.column(j));
                }
                assert_close!(abs=1e-6, projected, x);
            }
        }
    }

    #[test]
    fn near_dependent_column_is_kept_unnormalized() {
        let m = Matrix::from_rows(&[vec![1.0, 1.0], vec![0.0, 0.0]]).unwrap();
        let q = gram_schmidt(&m);

        assert_close!(abs=1e-10, q.column(0).to_vec(), vec![1.0, 0.0]);
        // the dependent column collapses to a ~zero residual, not a panic
        assert_close!(abs=1e-10, q.column(1).dot(&q.column(1)).sqrt(), 0.0);
    }

    #[test]
    fn single_column_is_normalized() {
        let m = Matrix::from_rows(&[vec![3.0], vec![4.0]]).unwrap();
        let q = gram_schmidt(&m);
        assert_close!(abs=1e-12, q.column(0).to_vec(), vec![0.6, 0.8]);
    }
}
