/* ************************************************************************ **
** This file is part of ortho, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Wall-clock comparison of orthogonalization strategies.
//!
//! The harness runs a strategy exactly once over a borrowed input and
//! reports the result together with the elapsed wall-clock time and an
//! explicit estimate of how much memory the two matrices occupy.  All of
//! that is computed from the values passed in; there is no ambient state
//! anywhere in the measurement.

#[macro_use]
extern crate log;
extern crate failure;
extern crate ortho_linalg;
#[cfg(test)]
extern crate env_logger;

use ::std::time::{Duration, Instant};

use ::ortho_linalg::{all_strategies, InvalidInputError, Matrix, OrthogonalizerStrategy};

pub type FailResult<T> = Result<T, ::failure::Error>;

/// What one timed decomposition produced.
#[derive(Debug)]
pub struct BenchReport {
    /// `name()` of the strategy that ran.
    pub strategy: &'static str,
    pub result: Matrix,
    /// Wall-clock time of the single `decompose` call.
    pub elapsed: Duration,
    /// Element count of input and result, times the element width.
    ///
    /// A deliberate estimate: it prices the numeric buffers only.  See
    /// `Matrix::approx_size_bytes`.
    pub approx_bytes: usize,
}

/// Run `strategy` over `matrix` exactly once and time it.
///
/// The input is only borrowed and the strategies are pure, so the
/// caller's matrix is unchanged when this returns.
pub fn benchmark(
    strategy: &dyn OrthogonalizerStrategy,
    matrix: &Matrix,
) -> Result<BenchReport, InvalidInputError> {
    let start = Instant::now();
    let result = strategy.decompose(matrix)?;
    let elapsed = start.elapsed();

    let approx_bytes = matrix.approx_size_bytes() + result.approx_size_bytes();
    info!(
        "{:>12}: [{:>4}.{:03}s] ~{} bytes",
        strategy.name(),
        elapsed.as_secs(),
        elapsed.subsec_nanos() / 1_000_000,
        approx_bytes,
    );

    Ok(BenchReport {
        strategy: strategy.name(),
        result,
        elapsed,
        approx_bytes,
    })
}

/// Benchmark every built-in strategy over the same input, in declaration
/// order, so the variants can be compared like for like.
pub fn compare_all(matrix: &Matrix) -> FailResult<Vec<BenchReport>> {
    all_strategies().iter()
        .map(|strategy| Ok(benchmark(&**strategy, matrix)?))
        .collect()
}
