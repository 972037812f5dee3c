/* ************************************************************************ **
** This file is part of ortho, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Orthogonal basis construction, two ways, plus a harness to compare them.
//!
//! The functionality lives in the member crates; this crate stitches
//! their public surfaces together:
//!
//! - `ortho_linalg`: the `Matrix` type, `gram_schmidt`, `householder`,
//!   and the `OrthogonalizerStrategy` seam.
//! - `ortho_bench`: the single-shot benchmark harness.

pub use ortho_linalg::{
    all_strategies,
    gram_schmidt,
    householder,
    GramSchmidt,
    Householder,
    InvalidInputError,
    Matrix,
    OrthogonalizerStrategy,
    DEGENERACY_EPS,
};

pub use ortho_bench::{benchmark, compare_all, BenchReport, FailResult};
