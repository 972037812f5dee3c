extern crate ndarray;

use std::fmt;
use ::ndarray::{Array1, Array2};

pub const DEFAULT_ABS_TOL: f64 = 1e-9;

/// Assert that two values are equal to within an absolute tolerance.
///
/// ```text,ignore
/// assert_close!(a, b);             // uses DEFAULT_ABS_TOL
/// assert_close!(abs=1e-6, a, b);
/// ```
///
/// Works on `f64`, slices, `Vec<f64>`, and 1- or 2-dimensional `ndarray`
/// arrays.  Aggregates must have matching shape.
#[macro_export]
macro_rules! assert_close {
    (abs=$tol:expr, $a:expr, $b:expr $(,)*) => {{
        let a = &$a;
        let b = &$b;
        if let Err(e) = $crate::CheckClose::check_close(a, b, $tol) {
            panic!("not nearly equal!\n left: {:?}\nright: {:?}\n{}", a, b, e);
        }
    }};
    ($a:expr, $b:expr $(,)*) => {
        assert_close!{abs=$crate::DEFAULT_ABS_TOL, $a, $b}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            assert_close!{$($t)*}
        }
    }};
}

/// The first offending pair found by a failed comparison.
#[derive(Debug)]
pub struct Mismatch {
    pub left: f64,
    pub right: f64,
    pub abs_tol: f64,
    /// Flat index of the offending element, when comparing aggregates.
    pub index: Option<usize>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.index {
            Some(i) => write!(
                f, "failed at flat index {}: |{} - {}| >= {}",
                i, self.left, self.right, self.abs_tol,
            ),
            None => write!(
                f, "|{} - {}| >= {}",
                self.left, self.right, self.abs_tol,
            ),
        }
    }
}

/// Element-wise comparison within an absolute tolerance.
pub trait CheckClose<Rhs: ?Sized = Self> {
    fn check_close(&self, other: &Rhs, abs_tol: f64) -> Result<(), Mismatch>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, abs_tol: f64) -> Result<(), Mismatch> {
        // equal values (including infinities of like sign) always pass;
        // NaN never does
        if self == other || (self - other).abs() < abs_tol {
            Ok(())
        } else {
            Err(Mismatch { left: *self, right: *other, abs_tol, index: None })
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, abs_tol: f64) -> Result<(), Mismatch>
    { CheckClose::check_close(*self, *other, abs_tol) }
}

fn check_iters<'a, A, B>(a: A, b: B, abs_tol: f64) -> Result<(), Mismatch>
where
    A: IntoIterator<Item = &'a f64>,
    B: IntoIterator<Item = &'a f64>,
{
    for (i, (x, y)) in a.into_iter().zip(b).enumerate() {
        x.check_close(y, abs_tol)
            .map_err(|e| Mismatch { index: Some(i), ..e })?;
    }
    Ok(())
}

impl CheckClose for [f64] {
    fn check_close(&self, other: &[f64], abs_tol: f64) -> Result<(), Mismatch> {
        assert_eq!(self.len(), other.len(), "length mismatch in assert_close!");
        check_iters(self, other, abs_tol)
    }
}

impl CheckClose for Vec<f64> {
    fn check_close(&self, other: &Vec<f64>, abs_tol: f64) -> Result<(), Mismatch>
    { (&self[..]).check_close(&other[..], abs_tol) }
}

impl CheckClose<[f64]> for Vec<f64> {
    fn check_close(&self, other: &[f64], abs_tol: f64) -> Result<(), Mismatch>
    { (&self[..]).check_close(other, abs_tol) }
}

impl CheckClose for Array1<f64> {
    fn check_close(&self, other: &Array1<f64>, abs_tol: f64) -> Result<(), Mismatch> {
        assert_eq!(self.len(), other.len(), "length mismatch in assert_close!");
        check_iters(self, other, abs_tol)
    }
}

impl CheckClose for Array2<f64> {
    fn check_close(&self, other: &Array2<f64>, abs_tol: f64) -> Result<(), Mismatch> {
        assert_eq!(self.dim(), other.dim(), "shape mismatch in assert_close!");
        check_iters(self, other, abs_tol)
    }
}
