//! Ratmat is an exact linear algebra library over the rational numbers.
//!
//! Every value is a normalized fraction of native integers, so there is no
//! floating-point drift anywhere: results are either exactly right or an
//! explicit error. The crate provides fraction and matrix arithmetic,
//! determinants computed by two independent algorithms, matrix inversion,
//! and the complete solution set of a linear equation system, returned as a
//! particular solution together with a basis of the null space.
//!
//! For example:
//!
//! ```
//! use ratmat::domains::rational::Q;
//! use ratmat::matrix::Matrix;
//!
//! let a = Matrix::from_nested_vec(
//!     vec![
//!         vec![(1, 2).into(), 2.into()],
//!         vec![3.into(), 4.into()],
//!     ],
//!     Q,
//! )
//! .unwrap();
//!
//! assert_eq!(a.det().unwrap(), (-4, 1).into());
//! assert_eq!(a.det_laplace().unwrap(), (-4, 1).into());
//! ```
//!
//! Numerators and denominators are kept in the native `i64` range;
//! multi-precision arithmetic is out of scope.

pub mod domains;
pub mod matrix;
pub mod solve;
pub mod utils;
