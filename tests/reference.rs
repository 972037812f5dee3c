extern crate env_logger;
extern crate ortho;
#[macro_use]
extern crate ortho_assert_close;

use ::ortho::{benchmark, compare_all, gram_schmidt, householder, GramSchmidt, Householder, Matrix};

// An upper-triangular input with positive diagonal: there is nothing to
// rotate, so both variants come out as the identity.
fn reference_matrix() -> Matrix {
    Matrix::from_rows(&[
        vec![1.0, 1.0, 1.0],
        vec![0.0, 1.0, 2.0],
        vec![0.0, 0.0, 3.0],
    ]).unwrap()
}

#[test]
fn reference_diagonals_are_unity() {
    let _ = ::env_logger::try_init();

    for report in compare_all(&reference_matrix()).unwrap() {
        assert_eq!(report.result.dim(), (3, 3));
        for i in 0..3 {
            assert_close!(abs=1e-5, report.result[(i, i)], 1.0);
        }
    }
}

#[test]
fn the_variants_agree_on_the_reference_input() {
    let m = reference_matrix();
    let gs = gram_schmidt(&m);
    let q = householder(&m).unwrap();
    assert_close!(abs=1e-10, (*gs).clone(), (*q).clone());
}

#[test]
fn degenerate_columns_do_not_error() {
    let m = Matrix::from_rows(&[vec![1.0, 1.0], vec![0.0, 0.0]]).unwrap();
    let q = gram_schmidt(&m);
    assert_close!(abs=1e-10, q.column(1).dot(&q.column(1)).sqrt(), 0.0);
}

#[test]
fn ragged_input_never_reaches_the_algorithms() {
    match Matrix::from_rows(&[vec![1.0], vec![1.0, 2.0]]) {
        Err(::ortho::InvalidInputError::Ragged { .. }) => {},
        other => panic!("expected Ragged: {:?}", other),
    }
}

#[test]
fn harness_reports_are_labeled_and_priced() {
    let report = benchmark(&Householder, &reference_matrix()).unwrap();
    assert_eq!(report.strategy, "householder");
    assert_eq!(report.approx_bytes, (9 + 9) * 8);

    let report = benchmark(&GramSchmidt, &reference_matrix()).unwrap();
    assert_eq!(report.strategy, "gram-schmidt");
}
