use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use rand::Rng;

use super::{EuclideanDomain, Field, Ring};
use crate::utils;

/// The field of rational numbers.
pub type Q = RationalField;
/// The field of rational numbers.
pub const Q: RationalField = RationalField::new();

/// The rational field, with [Rational] elements.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RationalField;

impl RationalField {
    pub const fn new() -> RationalField {
        RationalField
    }
}

/// Errors from rational construction and parsing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RationalError {
    /// A zero denominator was supplied, or the reciprocal of zero was taken.
    DivisionByZero,
    /// The text form is not an integer or a `numerator/denominator` pair.
    InvalidFraction(String),
}

impl Display for RationalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RationalError::DivisionByZero => write!(f, "Division by zero"),
            RationalError::InvalidFraction(s) => write!(f, "Invalid fraction: {}", s),
        }
    }
}

/// A rational number in lowest terms.
///
/// The denominator is always positive, the sign is carried by the numerator,
/// and zero is stored as `0/1`. Every constructor and operation normalizes
/// its result, so equal values are structurally equal and hash alike.
/// Operations never mutate their operands.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// Create the rational number `num/den` in lowest terms.
    pub fn new(num: i64, den: i64) -> Result<Rational, RationalError> {
        if den == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Rational::normalized(num, den))
    }

    /// Move the sign to the numerator and divide out the gcd.
    fn normalized(num: i64, den: i64) -> Rational {
        debug_assert!(den != 0);
        if num == 0 {
            return Rational {
                numerator: 0,
                denominator: 1,
            };
        }
        let negative = (num < 0) != (den < 0);
        let (num, den) = (num.abs(), den.abs());
        let g = utils::gcd_signed(num, den);
        Rational {
            numerator: if negative { -(num / g) } else { num / g },
            denominator: den / g,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn zero() -> Rational {
        Rational {
            numerator: 0,
            denominator: 1,
        }
    }

    pub fn one() -> Rational {
        Rational {
            numerator: 1,
            denominator: 1,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_one(&self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn neg(&self) -> Rational {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }

    pub fn abs(&self) -> Rational {
        if self.is_negative() {
            self.neg()
        } else {
            *self
        }
    }

    /// Return the reciprocal `den/num`.
    ///
    /// Zero has no reciprocal, so `DivisionByZero` is returned for it.
    pub fn recip(&self) -> Result<Rational, RationalError> {
        if self.numerator == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Rational::normalized(self.denominator, self.numerator))
    }

    fn add_impl(&self, other: &Rational) -> Rational {
        if self.denominator == other.denominator {
            return Rational::normalized(self.numerator + other.numerator, self.denominator);
        }
        let lcm = utils::lcm(self.denominator, other.denominator);
        let num = self.numerator * (lcm / self.denominator)
            + other.numerator * (lcm / other.denominator);
        Rational::normalized(num, lcm)
    }

    fn mul_impl(&self, other: &Rational) -> Rational {
        // cross-reduce first to keep the intermediate products small
        let g1 = utils::gcd_signed(self.numerator, other.denominator);
        let g2 = utils::gcd_signed(self.denominator, other.numerator);
        Rational::normalized(
            (self.numerator / g1) * (other.numerator / g2),
            (self.denominator / g2) * (other.denominator / g1),
        )
    }
}

macro_rules! impl_from_int_for_rational {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                #[inline]
                fn from(value: $t) -> Self {
                    Rational {
                        numerator: value.into(),
                        denominator: 1,
                    }
                }
            }
        )*
    };
}

impl_from_int_for_rational!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<i64>> From<(T, T)> for Rational {
    /// Create a rational from a `(numerator, denominator)` pair.
    ///
    /// Panics when the denominator is zero; use [Rational::new] to handle
    /// that case.
    #[inline]
    fn from((num, den): (T, T)) -> Self {
        match Rational::new(num.into(), den.into()) {
            Ok(r) => r,
            Err(_) => panic!("Denominator must not be zero"),
        }
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Debug for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parse the canonical text form: a single signed integer, or a
    /// numerator and a denominator separated by a single `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '/');
        let num: i64 = parts
            .next()
            .unwrap_or("")
            .parse()
            .map_err(|_| RationalError::InvalidFraction(s.to_string()))?;
        match (parts.next(), parts.next()) {
            (None, _) => Ok(Rational::from(num)),
            (Some(den), None) => {
                let den: i64 = den
                    .parse()
                    .map_err(|_| RationalError::InvalidFraction(s.to_string()))?;
                Rational::new(num, den)
            }
            (Some(_), Some(_)) => Err(RationalError::InvalidFraction(s.to_string())),
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        self.add_impl(&rhs)
    }
}

impl Sub for Rational {
    type Output = Rational;

    /// Subtraction adds the negation of `rhs`.
    fn sub(self, rhs: Rational) -> Rational {
        self.add_impl(&rhs.neg())
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        self.mul_impl(&rhs)
    }
}

impl Div for Rational {
    type Output = Rational;

    /// Division multiplies by the reciprocal of `rhs`.
    ///
    /// Panics when `rhs` is zero; use [Rational::recip] for the checked path.
    fn div(self, rhs: Rational) -> Rational {
        match rhs.recip() {
            Ok(r) => self.mul_impl(&r),
            Err(_) => panic!("Cannot divide {} by zero", self),
        }
    }
}

impl<'a> Add<&'a Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &'a Rational) -> Rational {
        self.add_impl(rhs)
    }
}

impl<'a> Sub<&'a Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &'a Rational) -> Rational {
        self.add_impl(&rhs.neg())
    }
}

impl<'a> Mul<&'a Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &'a Rational) -> Rational {
        self.mul_impl(rhs)
    }
}

impl<'a> Div<&'a Rational> for &Rational {
    type Output = Rational;

    fn div(self, rhs: &'a Rational) -> Rational {
        *self / *rhs
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Ring for RationalField {
    type Element = Rational;

    fn add(&self, a: &Rational, b: &Rational) -> Rational {
        a.add_impl(b)
    }

    fn sub(&self, a: &Rational, b: &Rational) -> Rational {
        a.add_impl(&b.neg())
    }

    fn mul(&self, a: &Rational, b: &Rational) -> Rational {
        a.mul_impl(b)
    }

    fn add_assign(&self, a: &mut Rational, b: &Rational) {
        *a = a.add_impl(b);
    }

    fn sub_assign(&self, a: &mut Rational, b: &Rational) {
        *a = a.add_impl(&b.neg());
    }

    fn mul_assign(&self, a: &mut Rational, b: &Rational) {
        *a = a.mul_impl(b);
    }

    fn add_mul_assign(&self, a: &mut Rational, b: &Rational, c: &Rational) {
        *a = a.add_impl(&b.mul_impl(c));
    }

    fn sub_mul_assign(&self, a: &mut Rational, b: &Rational, c: &Rational) {
        *a = a.add_impl(&b.mul_impl(c).neg());
    }

    fn neg(&self, a: &Rational) -> Rational {
        a.neg()
    }

    fn zero(&self) -> Rational {
        Rational::zero()
    }

    fn one(&self) -> Rational {
        Rational::one()
    }

    fn nth(&self, n: i64) -> Rational {
        Rational {
            numerator: n,
            denominator: 1,
        }
    }

    fn is_zero(a: &Rational) -> bool {
        a.numerator == 0
    }

    fn is_one(&self, a: &Rational) -> bool {
        a.is_one()
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Rational {
        Rational::from(rng.gen_range(range.0..range.1))
    }
}

impl EuclideanDomain for RationalField {
    fn rem(&self, _: &Rational, _: &Rational) -> Rational {
        Rational::zero()
    }

    fn quot_rem(&self, a: &Rational, b: &Rational) -> (Rational, Rational) {
        (self.div(a, b), Rational::zero())
    }

    fn gcd(&self, a: &Rational, b: &Rational) -> Rational {
        Rational::normalized(
            utils::gcd_signed(a.numerator, b.numerator),
            utils::lcm(a.denominator, b.denominator),
        )
    }
}

impl Field for RationalField {
    fn div(&self, a: &Rational, b: &Rational) -> Rational {
        *a / *b
    }

    fn div_assign(&self, a: &mut Rational, b: &Rational) {
        *a = *a / *b;
    }

    fn inv(&self, a: &Rational) -> Rational {
        match a.recip() {
            Ok(r) => r,
            Err(_) => panic!("Zero has no inverse"),
        }
    }
}
