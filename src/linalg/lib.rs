/* ************************************************************************ **
** This file is part of ortho, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate ndarray;
#[cfg_attr(test, macro_use)]
extern crate ortho_assert_close;
#[cfg(test)]
extern crate itertools;
#[cfg(test)]
extern crate rand;

pub use self::mat::Matrix;
mod mat;
pub use self::gram_schmidt::gram_schmidt;
mod gram_schmidt;
pub use self::householder::householder;
mod householder;

/// Norm cutoff below which a vector is treated as numerically zero.
///
/// Shared by both algorithms: Gram-Schmidt stops normalizing a residual
/// this short, and Householder skips a reflection whose mirror vector is
/// this short.
pub const DEGENERACY_EPS: f64 = 1e-10;

#[derive(Debug, Fail)]
pub enum InvalidInputError {
    #[fail(display = "matrix must have at least one row and one column")]
    Empty,
    #[fail(display = "row {} has {} elements, expected {}", row, len, expected)]
    Ragged { row: usize, len: usize, expected: usize },
    #[fail(display = "matrix is {}x{}; this decomposition needs rows >= columns", rows, cols)]
    NotTall { rows: usize, cols: usize },
}

/// Object-safe seam over the decomposition variants, so callers can swap
/// and compare them without caring which algorithm is behind the object.
pub trait OrthogonalizerStrategy {
    /// Short name used to label reports and log lines.
    fn name(&self) -> &'static str;

    /// Produce an orthogonal basis from the columns of `matrix`.
    ///
    /// See `gram_schmidt` and `householder` for the per-variant output
    /// contracts; in particular, they do not agree on output shape.
    fn decompose(&self, matrix: &Matrix) -> Result<Matrix, InvalidInputError>;
}

/// Strategy form of `gram_schmidt`.
pub struct GramSchmidt;

/// Strategy form of `householder`.
pub struct Householder;

impl OrthogonalizerStrategy for GramSchmidt {
    fn name(&self) -> &'static str { "gram-schmidt" }

    fn decompose(&self, matrix: &Matrix) -> Result<Matrix, InvalidInputError>
    { Ok(gram_schmidt(matrix)) }
}

impl OrthogonalizerStrategy for Householder {
    fn name(&self) -> &'static str { "householder" }

    fn decompose(&self, matrix: &Matrix) -> Result<Matrix, InvalidInputError>
    { householder(matrix) }
}

/// Every built-in strategy, in a fixed order.
pub fn all_strategies() -> Vec<Box<dyn OrthogonalizerStrategy>> {
    vec![Box::new(GramSchmidt), Box::new(Householder)]
}

#[cfg(test)]
pub(crate) mod test_util {
    use ::ndarray::Array2;
    use ::rand::{thread_rng, Rng};
    use crate::Matrix;

    /// Uniform entries in (-1, 1); effectively never rank deficient.
    pub(crate) fn random_matrix(rows: usize, cols: usize) -> Matrix {
        let mut rng = thread_rng();
        let arr = Array2::from_shape_fn((rows, cols), |_| 1.0 - 2.0 * rng.gen::<f64>());
        Matrix::from_array(arr).unwrap()
    }

    /// A random tall-or-square shape with both dims in `1..=max`.
    pub(crate) fn random_shape(max: usize) -> (usize, usize) {
        let mut rng = thread_rng();
        let rows = rng.gen_range(1, max + 1);
        let cols = rng.gen_range(1, rows + 1);
        (rows, cols)
    }
}
