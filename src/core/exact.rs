// src/core/exact.rs

use super::matrix::Matrix;
use super::scalar::Scalar;
use num_bigint::BigInt;
use num_complex::Complex;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Gaussian rational `p + q·i` with arbitrary-precision `p`, `q`.
pub type GaussianRational = Complex<BigRational>;

/// An exact element of the field `Q(i, √2)`, stored as `rational + surd·√2`
/// where both coordinates are Gaussian rationals.
///
/// `1` and `√2` are linearly independent over `Q(i)`, and `BigRational` keeps
/// itself in lowest terms, so the pair of coordinates is a canonical form:
/// two values are equal exactly when their coordinates are equal. This is what
/// makes the symbolic back-end's equality checks complete instead of depending
/// on how hard an expression was simplified.
///
/// The field holds every amplitude of the usual single-qubit literals:
/// `1/√2`, `i/√2`, the Hadamard entries and `e^{iπ/4} = (1 + i)/√2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Exact {
    rational: GaussianRational,
    surd: GaussianRational,
}

fn rational(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

impl Exact {
    /// Builds `rational + surd·√2` from its two coordinates.
    pub fn new(rational: GaussianRational, surd: GaussianRational) -> Self {
        Self { rational, surd }
    }

    /// The integer `n`.
    pub fn from_integer(n: i64) -> Self {
        Self::new(Complex::new(rational(n), BigRational::zero()), GaussianRational::zero())
    }

    /// The rational `numer / denom`, or `None` when `denom` is zero.
    pub fn ratio(numer: i64, denom: i64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let value = BigRational::new(BigInt::from(numer), BigInt::from(denom));
        Some(Self::new(Complex::new(value, BigRational::zero()), GaussianRational::zero()))
    }

    /// The imaginary unit `i`.
    pub fn i() -> Self {
        Self::new(Complex::new(BigRational::zero(), BigRational::one()), GaussianRational::zero())
    }

    /// `√2`.
    pub fn sqrt2() -> Self {
        Self::new(GaussianRational::zero(), Complex::new(BigRational::one(), BigRational::zero()))
    }

    /// `1/√2`, stored as `√2/2`.
    pub fn frac_1_sqrt_2() -> Self {
        Self::new(
            GaussianRational::zero(),
            Complex::new(BigRational::new(BigInt::one(), BigInt::from(2)), BigRational::zero()),
        )
    }

    /// Coordinate on `1`.
    pub fn rational_part(&self) -> &GaussianRational {
        &self.rational
    }

    /// Coordinate on `√2`.
    pub fn surd_part(&self) -> &GaussianRational {
        &self.surd
    }

    /// True when the imaginary part is exactly zero.
    pub fn is_real(&self) -> bool {
        self.rational.im.is_zero() && self.surd.im.is_zero()
    }

    /// Multiplicative inverse, or `None` for zero.
    ///
    /// `(a + b√2)(a - b√2) = a² - 2b²` lies in `Q(i)` and vanishes only at zero,
    /// since `√2` is not a Gaussian rational.
    pub fn checked_inv(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let a = &self.rational;
        let b = &self.surd;
        let norm = a * a - (b * b).scale(rational(2));
        Some(Self::new(a / &norm, -(b / &norm)))
    }

    /// Nearest floating-point value. Used for explicit conversion to the
    /// numeric back-end.
    pub fn to_complex(&self) -> Complex<f64> {
        let sqrt2 = std::f64::consts::SQRT_2;
        Complex::new(
            to_f64(&self.rational.re) + sqrt2 * to_f64(&self.surd.re),
            to_f64(&self.rational.im) + sqrt2 * to_f64(&self.surd.im),
        )
    }
}

fn to_f64(value: &BigRational) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl Zero for Exact {
    fn zero() -> Self {
        Self::new(GaussianRational::zero(), GaussianRational::zero())
    }

    fn is_zero(&self) -> bool {
        self.rational.is_zero() && self.surd.is_zero()
    }
}

impl One for Exact {
    fn one() -> Self {
        Self::from_integer(1)
    }
}

impl Add for Exact {
    type Output = Exact;

    fn add(self, rhs: Exact) -> Exact {
        Exact::new(self.rational + rhs.rational, self.surd + rhs.surd)
    }
}

impl Sub for Exact {
    type Output = Exact;

    fn sub(self, rhs: Exact) -> Exact {
        Exact::new(self.rational - rhs.rational, self.surd - rhs.surd)
    }
}

impl Mul for Exact {
    type Output = Exact;

    // (a + b√2)(c + d√2) = (ac + 2bd) + (ad + bc)√2
    fn mul(self, rhs: Exact) -> Exact {
        let (a, b) = (self.rational, self.surd);
        let (c, d) = (rhs.rational, rhs.surd);
        let rational_part = &a * &c + (&b * &d).scale(rational(2));
        let surd_part = a * d + b * c;
        Exact::new(rational_part, surd_part)
    }
}

impl Neg for Exact {
    type Output = Exact;

    fn neg(self) -> Exact {
        Exact::new(-self.rational, -self.surd)
    }
}

impl From<i64> for Exact {
    fn from(n: i64) -> Self {
        Exact::from_integer(n)
    }
}

impl Scalar for Exact {
    fn conjugate(&self) -> Self {
        Exact::new(self.rational.conj(), self.surd.conj())
    }
}

impl Matrix<Exact> {
    /// Explicit conversion of an exact matrix to the numeric back-end.
    pub fn to_numeric(&self) -> Matrix<Complex<f64>> {
        self.map(Exact::to_complex)
    }
}

/// Writes one monomial such as `3`, `-i/2` or `√2i/2`.
fn format_term(value: &BigRational, unit: &str) -> String {
    let magnitude = value.abs();
    let mut term = String::new();
    if value.is_negative() {
        term.push('-');
    }
    if unit.is_empty() || !magnitude.numer().is_one() {
        term.push_str(&magnitude.numer().to_string());
    }
    term.push_str(unit);
    if !magnitude.denom().is_one() {
        term.push('/');
        term.push_str(&magnitude.denom().to_string());
    }
    term
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coordinates = [
            (&self.rational.re, ""),
            (&self.rational.im, "i"),
            (&self.surd.re, "√2"),
            (&self.surd.im, "√2i"),
        ];
        let mut written = false;
        for (value, unit) in coordinates {
            if value.is_zero() {
                continue;
            }
            let term = format_term(value, unit);
            match (written, term.strip_prefix('-')) {
                (false, _) => write!(f, "{}", term)?,
                (true, Some(rest)) => write!(f, " - {}", rest)?,
                (true, None) => write!(f, " + {}", term)?,
            }
            written = true;
        }
        if !written {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt2_squares_to_two() {
        assert_eq!(Exact::sqrt2() * Exact::sqrt2(), Exact::from_integer(2));
    }

    #[test]
    fn frac_1_sqrt_2_has_half_modulus() {
        let half = Exact::ratio(1, 2).unwrap();
        assert_eq!(Exact::frac_1_sqrt_2().modulus_sqr(), half);
        let i_over_sqrt2 = Exact::i() * Exact::frac_1_sqrt_2();
        assert_eq!(i_over_sqrt2.modulus_sqr(), Exact::ratio(1, 2).unwrap());
    }

    #[test]
    fn inverse_of_sqrt2() {
        assert_eq!(Exact::sqrt2().checked_inv(), Some(Exact::frac_1_sqrt_2()));
        assert_eq!(Exact::zero().checked_inv(), None);

        let x = Exact::from_integer(3) + Exact::i() * Exact::sqrt2();
        let inv = x.checked_inv().unwrap();
        assert_eq!(x * inv, Exact::one());
    }

    #[test]
    fn ratio_rejects_zero_denominator() {
        assert!(Exact::ratio(1, 0).is_none());
        assert_eq!(Exact::ratio(2, 4), Exact::ratio(1, 2));
    }

    #[test]
    fn phase_eighth_turn_has_unit_modulus() {
        // e^{iπ/4} = (1 + i)/√2
        let omega = (Exact::one() + Exact::i()) * Exact::frac_1_sqrt_2();
        assert_eq!(omega.modulus_sqr(), Exact::one());
        assert!(!omega.is_real());
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(Exact::zero().to_string(), "0");
        assert_eq!(Exact::from_integer(-3).to_string(), "-3");
        assert_eq!(Exact::frac_1_sqrt_2().to_string(), "√2/2");
        assert_eq!((Exact::i() * Exact::frac_1_sqrt_2()).to_string(), "√2i/2");
        let mixed = Exact::ratio(1, 2).unwrap() - Exact::i();
        assert_eq!(mixed.to_string(), "1/2 - i");
    }

    #[test]
    fn converts_to_floating_point() {
        let z = Exact::frac_1_sqrt_2().to_complex();
        assert!((z.re - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
        assert_eq!(z.im, 0.0);
    }

    #[test]
    fn converts_huge_coprime_ratio_near_one() {
        // (10^400 + 1) / 10^400: both sides overflow f64 on their own
        let denom = BigInt::from(10).pow(400);
        let numer = &denom + BigInt::one();
        let near_one = Exact::new(
            Complex::new(BigRational::new(numer, denom), BigRational::zero()),
            GaussianRational::zero(),
        );
        let z = near_one.to_complex();
        assert!(z.re.is_finite());
        assert!((z.re - 1.0).abs() < 1e-12);
        assert_eq!(z.im, 0.0);

        let column = Matrix::column(vec![near_one]).unwrap().to_numeric();
        assert!((column.as_slice()[0].re - 1.0).abs() < 1e-12);
    }

    #[test]
    fn coordinates_are_exposed() {
        let x = Exact::from_integer(3) + Exact::i() * Exact::sqrt2();
        assert_eq!(x.rational_part(), &Complex::new(rational(3), BigRational::zero()));
        assert_eq!(x.surd_part(), &Complex::new(BigRational::zero(), BigRational::one()));
        assert_eq!(Exact::frac_1_sqrt_2().surd_part().re, BigRational::new(BigInt::one(), BigInt::from(2)));
        assert!(Exact::frac_1_sqrt_2().rational_part().is_zero());
    }
}
