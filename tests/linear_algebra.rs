use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use ratmat::domains::rational::{Rational, Q};
use ratmat::domains::Ring;
use ratmat::matrix::{Matrix, MatrixError};
use ratmat::solve::LinearSolution;

fn from_rows(rows: Vec<Vec<i64>>) -> Matrix<Q> {
    Matrix::from_nested_vec(
        rows.into_iter()
            .map(|r| r.into_iter().map(|e| e.into()).collect())
            .collect(),
        Q,
    )
    .unwrap()
}

fn sample_matrix(rng: &mut Xoshiro256StarStar, nrows: u32, ncols: u32) -> Matrix<Q> {
    Matrix::from_linear(
        (0..nrows as usize * ncols as usize)
            .map(|_| Q.sample(rng, (-4, 5)))
            .collect(),
        nrows,
        ncols,
        Q,
    )
    .unwrap()
}

#[test]
fn fraction_arithmetic_is_exact() {
    let a: Rational = "1/11".parse().unwrap();
    let b: Rational = "-33/-363".parse().unwrap();
    assert_eq!(a - b, Rational::zero());

    // a tenth of a tenth, without any drift
    let tenth: Rational = (1, 10).into();
    let mut product = Rational::one();
    for _ in 0..2 {
        product = product * tenth;
    }
    assert_eq!(product, (1, 100).into());
}

#[test]
fn determinants_agree() {
    let a = from_rows(vec![
        vec![1, 2, 3, 4],
        vec![-2, 1, -4, 3],
        vec![3, -4, -1, 2],
        vec![4, 3, -2, -1],
    ]);
    assert_eq!(a.det().unwrap(), 900.into());
    assert_eq!(a.det_laplace().unwrap(), 900.into());

    let mut rng = Xoshiro256StarStar::seed_from_u64(3);
    for n in 2..=6u32 {
        for round in 0..10 {
            let mut a = sample_matrix(&mut rng, n, n);
            if round % 2 == 0 {
                // force at least one pivot search
                a[(0, 0)] = Rational::zero();
            }
            assert_eq!(a.det().unwrap(), a.det_laplace().unwrap());
        }
    }
}

#[test]
fn inverse_round_trip() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(7);

    for _ in 0..25 {
        let a = sample_matrix(&mut rng, 4, 4);
        let det = a.det().unwrap();

        if det.is_zero() {
            assert_eq!(a.inv().unwrap_err(), MatrixError::Singular);
        } else {
            let inv = a.inv().unwrap();
            let id = Matrix::identity(4, Q).unwrap();
            assert_eq!(&a * &inv, id);
            assert_eq!(&inv * &a, id);
        }
    }
}

#[test]
fn general_solution_spans_the_affine_set() {
    let m = from_rows(vec![vec![1, 2, 3, 4], vec![-2, 1, -4, 3]]);
    let a = from_rows(vec![vec![1, 2, 3], vec![-2, 1, -4]]);
    let b = Matrix::new_vec(vec![4.into(), 3.into()], Q);

    match m.solve_general().unwrap() {
        LinearSolution::Consistent {
            particular,
            null_basis,
        } => {
            assert_eq!(null_basis.len(), 1);
            assert_eq!(&a * &particular.clone().into_matrix(), b);
            assert!((&a * &null_basis[0].clone().into_matrix()).is_zero());

            for c in [Rational::from(-2), (1, 2).into(), 5.into()] {
                let x = &particular + &(&null_basis[0] * c);
                assert_eq!(&a * &x.into_matrix(), b);
            }
        }
        LinearSolution::Inconsistent => panic!("The system is consistent"),
    }
}
