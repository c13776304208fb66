use std::fmt::Display;

use crate::domains::{Field, Ring};
use crate::matrix::{Matrix, MatrixError, Vector};

/// The complete solution set of a linear equation system `A·x = b`.
///
/// A consistent system is described by a particular solution together with a
/// basis of the null space of `A`: the solutions are exactly the vectors
/// `particular + c_1·v_1 + … + c_k·v_k` for scalars `c_i`, and the basis is
/// empty exactly when the solution is unique. An unsolvable system is
/// reported as `Inconsistent`, never as an absent value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LinearSolution<F: Ring> {
    Consistent {
        particular: Vector<F>,
        null_basis: Vec<Vector<F>>,
    },
    Inconsistent,
}

impl<F: Ring> Display for LinearSolution<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinearSolution::Inconsistent => write!(f, "Inconsistent system, no solution"),
            LinearSolution::Consistent {
                particular,
                null_basis,
            } => {
                write!(f, "Particular: {}", particular)?;
                for v in null_basis {
                    write!(f, "\nGeneral: {}", v)?;
                }
                Ok(())
            }
        }
    }
}

impl<F: Field> Matrix<F> {
    /// Compute the general solution of the augmented linear system `[A | b]`,
    /// where the last column of this matrix is the constant column.
    ///
    /// The system is brought into reduced row-echelon form. The particular
    /// solution reads the constant column off the pivot rows and sets every
    /// free variable to zero; one null-space basis vector is constructed per
    /// free column with the negative-one trick, so that `A·v = 0` holds for
    /// each of them by construction.
    ///
    /// Returns `ShapeMismatch` when the matrix has no variable columns.
    pub fn solve_general(&self) -> Result<LinearSolution<F>, MatrixError> {
        if self.ncols < 2 {
            return Err(MatrixError::ShapeMismatch);
        }

        let field = self.field().clone();
        let nvars = self.ncols - 1;
        let mut m = self.clone();
        let pivots = m.row_reduce(nvars);

        // every row beyond the rank has an all-zero coefficient part, so a
        // nonzero constant entry there makes the system unsolvable
        for r in pivots.len() as u32..m.nrows {
            if !F::is_zero(&m[(r, nvars)]) {
                return Ok(LinearSolution::Inconsistent);
            }
        }

        let mut particular = vec![field.zero(); nvars as usize];
        for (r, &p) in pivots.iter().enumerate() {
            particular[p as usize] = m[(r as u32, nvars)].clone();
        }

        let minus_one = field.neg(&field.one());
        let mut null_basis = Vec::with_capacity(nvars as usize - pivots.len());
        for c in 0..nvars {
            if pivots.contains(&c) {
                continue;
            }

            // the negative-one trick: set the free variable itself to -1 and
            // copy the coefficients that bind it to the pivot variables
            let mut v = vec![field.zero(); nvars as usize];
            v[c as usize] = minus_one.clone();
            for (r, &p) in pivots.iter().enumerate() {
                v[p as usize] = m[(r as u32, c)].clone();
            }
            null_basis.push(Vector::new(v, field.clone()));
        }

        Ok(LinearSolution::Consistent {
            particular: Vector::new(particular, field),
            null_basis,
        })
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    use crate::domains::rational::{Rational, Q};
    use crate::domains::Ring;
    use crate::matrix::{Matrix, MatrixError, Vector};
    use crate::solve::LinearSolution;

    fn from_rows(rows: Vec<Vec<i64>>) -> Matrix<Q> {
        Matrix::from_nested_vec(
            rows.into_iter()
                .map(|r| r.into_iter().map(|e| e.into()).collect())
                .collect(),
            Q,
        )
        .unwrap()
    }

    fn fractions(data: Vec<(i64, i64)>) -> Vector<Q> {
        Vector::new(data.into_iter().map(|e| e.into()).collect(), Q)
    }

    #[test]
    fn unique_solution() {
        let m = from_rows(vec![
            vec![1, 1, 2, 3],
            vec![3, 4, 3, 15],
            vec![16, 5, 5, 8],
        ]);

        match m.solve_general().unwrap() {
            LinearSolution::Consistent {
                particular,
                null_basis,
            } => {
                assert_eq!(
                    particular,
                    fractions(vec![(-5, 6), (47, 10), (-13, 30)])
                );
                assert!(null_basis.is_empty());
            }
            LinearSolution::Inconsistent => panic!("The system is consistent"),
        }
    }

    #[test]
    fn one_free_variable() {
        let m = from_rows(vec![vec![1, 2, 3, 4], vec![-2, 1, -4, 3]]);
        let a = from_rows(vec![vec![1, 2, 3], vec![-2, 1, -4]]);
        let b = Matrix::new_vec(vec![4.into(), 3.into()], Q);

        match m.solve_general().unwrap() {
            LinearSolution::Consistent {
                particular,
                null_basis,
            } => {
                assert_eq!(null_basis.len(), 1);

                // substitute: A·p = b and A·v = 0
                assert_eq!(&a * &particular.clone().into_matrix(), b);
                assert!((&a * &null_basis[0].clone().into_matrix()).is_zero());

                // every member of the affine set solves the system
                let c: Rational = (7, 3).into();
                let x = &particular + &(&null_basis[0] * c);
                assert_eq!(&a * &x.into_matrix(), b);
            }
            LinearSolution::Inconsistent => panic!("The system is consistent"),
        }
    }

    #[test]
    fn solution_display() {
        let m = from_rows(vec![vec![1, 2, 3, 4], vec![-2, 1, -4, 3]]);
        assert_eq!(
            m.solve_general().unwrap().to_string(),
            "Particular: [-2/5, 11/5, 0]\nGeneral: [11/5, 2/5, -1]"
        );

        let m = from_rows(vec![vec![0, 0, 5]]);
        assert_eq!(
            m.solve_general().unwrap().to_string(),
            "Inconsistent system, no solution"
        );
    }

    #[test]
    fn inconsistent() {
        let m = from_rows(vec![vec![1, 1, 3], vec![1, 1, 4]]);
        assert_eq!(m.solve_general().unwrap(), LinearSolution::Inconsistent);

        // a zero coefficient row with a nonzero constant
        let m = from_rows(vec![vec![0, 0, 5]]);
        assert_eq!(m.solve_general().unwrap(), LinearSolution::Inconsistent);
    }

    #[test]
    fn all_variables_free() {
        let m = from_rows(vec![vec![0, 0]]);

        match m.solve_general().unwrap() {
            LinearSolution::Consistent {
                particular,
                null_basis,
            } => {
                assert_eq!(particular, Vector::new(vec![Q.zero()], Q));
                assert_eq!(null_basis, vec![Vector::new(vec![Rational::from(-1)], Q)]);
            }
            LinearSolution::Inconsistent => panic!("The system is consistent"),
        }
    }

    #[test]
    fn no_variable_columns() {
        let m = from_rows(vec![vec![1], vec![2]]);
        assert_eq!(m.solve_general().unwrap_err(), MatrixError::ShapeMismatch);
    }

    #[test]
    fn random_systems_are_sound() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(23);

        for _ in 0..40 {
            // build a consistent system from a known solution
            let a = Matrix::from_linear(
                (0..3 * 4).map(|_| Q.sample(&mut rng, (-5, 6))).collect(),
                3,
                4,
                Q,
            )
            .unwrap();
            let x = Matrix::from_linear(
                (0..4).map(|_| Q.sample(&mut rng, (-5, 6))).collect(),
                4,
                1,
                Q,
            )
            .unwrap();
            let b = &a * &x;

            let mut augmented = Matrix::new(3, 5, Q);
            for r in 0..3u32 {
                for c in 0..4u32 {
                    augmented[(r, c)] = a[(r, c)];
                }
                augmented[(r, 4)] = b[(r, 0)];
            }

            match augmented.solve_general().unwrap() {
                LinearSolution::Consistent {
                    particular,
                    null_basis,
                } => {
                    assert_eq!(&a * &particular.clone().into_matrix(), b);
                    for v in &null_basis {
                        assert!((&a * &v.clone().into_matrix()).is_zero());
                    }
                }
                LinearSolution::Inconsistent => panic!("The system is consistent"),
            }
        }
    }
}
