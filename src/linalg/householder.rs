/* ************************************************************************ **
** This file is part of ortho, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::ndarray::{Array1, Array2, ArrayView1, Axis};
use crate::{InvalidInputError, Matrix, DEGENERACY_EPS};

/// Accumulate the orthogonal factor of a QR decomposition by Householder
/// reflections.
///
/// Returns the square rows-by-rows matrix `Q` such that `Qᵀ * input` is
/// upper triangular.  Note the contract differs from `gram_schmidt`: the
/// result is an orthogonal basis for the whole ambient space, not a
/// same-shape orthonormalization of the input columns.  Callers that want
/// the thin factor must slice off the leading columns themselves.
///
/// Requires `rows >= cols`; wider input is rejected up front.
///
/// Cost is O(rows^2 * cols).  The input is not modified; the eliminations
/// run on a private working copy.
pub fn householder(matrix: &Matrix) -> Result<Matrix, InvalidInputError> {
    let (rows, cols) = matrix.dim();
    if rows < cols {
        return Err(InvalidInputError::NotTall { rows, cols });
    }

    let mut q = Array2::<f64>::eye(rows);
    let mut u = matrix.clone().into_inner();

    for i in 0..cols {
        // the part of column i that must be collapsed onto the basis axis
        let mut w: Array1<f64> = u.slice(s![i.., i]).to_owned();
        let x_norm = norm(w.view());

        // Mirror vector w = x - (‖x‖, 0, …, 0).
        //
        // FIXME: the reflection target keeps a fixed positive sign; when
        //        x[0] is close to +‖x‖ the subtraction cancels badly.  The
        //        stable choice is e[0] = -sign(x[0]) * ‖x‖, but switching
        //        flips column signs in Q, so reference outputs move with it.
        w[0] -= x_norm;

        let w_norm = norm(w.view());
        if w_norm <= DEGENERACY_EPS {
            // column already lies on the target axis; reflecting would
            // divide by ~0
            trace!("reflection {} skipped (mirror norm {:e})", i, w_norm);
            continue;
        }
        w /= w_norm;

        // Apply H = I - 2wwᵀ as rank-one updates against the trailing
        // blocks; the full reflector is never materialized.

        // U[i.., i..] <- H * U[i.., i..]
        let wt_u = w.dot(&u.slice(s![i.., i..]));
        u.slice_mut(s![i.., i..]).scaled_add(-2.0, &outer(w.view(), wt_u.view()));

        // Q[.., i..] <- Q[.., i..] * H
        let q_w = q.slice(s![.., i..]).dot(&w);
        q.slice_mut(s![.., i..]).scaled_add(-2.0, &outer(q_w.view(), w.view()));
    }

    Ok(Matrix::from_array(q).expect("(BUG) square and nonempty"))
}

fn norm(v: ArrayView1<f64>) -> f64 { v.dot(&v).sqrt() }

// a ⊗ b
fn outer(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Array2<f64> {
    let a = a.insert_axis(Axis(1));
    let b = b.insert_axis(Axis(0));
    a.dot(&b)
}
