use rand::Rng;

use super::{EuclideanDomain, Ring};
use crate::utils;

/// The ring of integers.
pub type Z = IntegerRing;
/// The ring of integers.
pub const Z: IntegerRing = IntegerRing::new();

/// The integer ring, with native `i64` elements.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct IntegerRing;

impl IntegerRing {
    pub const fn new() -> IntegerRing {
        IntegerRing
    }
}

impl Ring for IntegerRing {
    type Element = i64;

    #[inline]
    fn add(&self, a: &i64, b: &i64) -> i64 {
        a + b
    }

    #[inline]
    fn sub(&self, a: &i64, b: &i64) -> i64 {
        a - b
    }

    #[inline]
    fn mul(&self, a: &i64, b: &i64) -> i64 {
        a * b
    }

    #[inline]
    fn add_assign(&self, a: &mut i64, b: &i64) {
        *a += b;
    }

    #[inline]
    fn sub_assign(&self, a: &mut i64, b: &i64) {
        *a -= b;
    }

    #[inline]
    fn mul_assign(&self, a: &mut i64, b: &i64) {
        *a *= b;
    }

    #[inline]
    fn add_mul_assign(&self, a: &mut i64, b: &i64, c: &i64) {
        *a += b * c;
    }

    #[inline]
    fn sub_mul_assign(&self, a: &mut i64, b: &i64, c: &i64) {
        *a -= b * c;
    }

    #[inline]
    fn neg(&self, a: &i64) -> i64 {
        -a
    }

    #[inline]
    fn zero(&self) -> i64 {
        0
    }

    #[inline]
    fn one(&self) -> i64 {
        1
    }

    #[inline]
    fn nth(&self, n: i64) -> i64 {
        n
    }

    #[inline]
    fn is_zero(a: &i64) -> bool {
        *a == 0
    }

    #[inline]
    fn is_one(&self, a: &i64) -> bool {
        *a == 1
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> i64 {
        rng.gen_range(range.0..range.1)
    }
}

impl EuclideanDomain for IntegerRing {
    fn rem(&self, a: &i64, b: &i64) -> i64 {
        a.rem_euclid(*b)
    }

    fn quot_rem(&self, a: &i64, b: &i64) -> (i64, i64) {
        (a.div_euclid(*b), a.rem_euclid(*b))
    }

    fn gcd(&self, a: &i64, b: &i64) -> i64 {
        utils::gcd_signed(*a, *b)
    }
}

#[cfg(test)]
mod test {
    use super::{IntegerRing, Z};
    use crate::domains::{EuclideanDomain, Ring};

    #[test]
    fn ring_ops() {
        assert_eq!(Z.add(&5, &7), 12);
        assert_eq!(Z.sub(&5, &7), -2);
        assert_eq!(Z.mul(&5, &7), 35);
        assert_eq!(Z.neg(&5), -5);
        assert!(IntegerRing::is_zero(&Z.zero()));
        assert!(Z.is_one(&Z.one()));

        let mut a = 3;
        Z.add_mul_assign(&mut a, &4, &5);
        assert_eq!(a, 23);
        Z.sub_mul_assign(&mut a, &4, &5);
        assert_eq!(a, 3);
    }

    #[test]
    fn euclidean() {
        assert_eq!(Z.gcd(&54, &90), 18);
        assert_eq!(Z.gcd(&-12, &16), 4);
        assert_eq!(Z.quot_rem(&17, &5), (3, 2));
        assert_eq!(Z.rem(&-7, &5), 3);
    }
}
