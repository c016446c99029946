// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Eisenstein integers `a + b·ζ₆`.
//!
//! Elements are stored as exact integer coordinates with respect to the
//! ordered basis `(1, ζ₆)`. The only lossy operations are the derived
//! real part and the complex conversion, which are never stored.
//!
//! The operator impls behave like the primitive integer operators: they
//! panic on overflow in debug builds. Values from outside the program go
//! through the `checked_*` methods, which report
//! [`AlgebraError::Overflow`] instead.
//!
//! # Examples
//!
//! ```
//! use lattice_flows::algebra::Eisen;
//!
//! let zeta = Eisen::ZETA6;
//! assert_eq!(zeta * zeta, Eisen::new(-1, 1)); // ζ² = ζ - 1
//! assert_eq!(zeta.pow(6), Eisen::ONE);
//! assert_eq!(zeta.conjugate(), Eisen::new(1, -1));
//! assert_eq!(format!("{}", Eisen::new(2, -3)), "2 - 3*zeta_6");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use super::errors::AlgebraError;

/// `√3 / 2`, the imaginary part of ζ₆.
const SQRT_3_OVER_2: f64 = 0.866_025_403_784_438_6;

/// Tolerance when snapping a complex value back onto the lattice.
const LATTICE_EPSILON: f64 = 1e-9;

/// An Eisenstein integer `re + z6·ζ₆`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Eisen {
    re: i64,
    z6: i64,
}

/// The right-hand side of a mixed-kind ring operation.
///
/// Plain integers embed into the ring; complex values can be compared
/// against an element but never take part in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Eisen(Eisen),
    Int(i64),
    Complex { re: f64, im: f64 },
}

impl Operand {
    fn kind(&self) -> &'static str {
        match self {
            Operand::Eisen(_) => "Eisen",
            Operand::Int(_) => "int",
            Operand::Complex { .. } => "complex",
        }
    }

    /// The ring element this operand denotes, if it has one.
    fn as_ring_element(&self) -> Option<Eisen> {
        match *self {
            Operand::Eisen(e) => Some(e),
            Operand::Int(k) => Some(Eisen::from(k)),
            Operand::Complex { .. } => None,
        }
    }
}

impl From<Eisen> for Operand {
    fn from(value: Eisen) -> Self {
        Operand::Eisen(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<(f64, f64)> for Operand {
    fn from((re, im): (f64, f64)) -> Self {
        Operand::Complex { re, im }
    }
}

impl Eisen {
    pub const ZERO: Eisen = Eisen::new(0, 0);
    pub const ONE: Eisen = Eisen::new(1, 0);
    /// The primitive sixth root of unity.
    pub const ZETA6: Eisen = Eisen::new(0, 1);

    pub const fn new(re: i64, z6: i64) -> Self {
        Self { re, z6 }
    }

    /// Build an element from floating-point coordinates.
    ///
    /// Fails with [`AlgebraError::TypeKind`] unless both coordinates are
    /// finite integers representable as `i64`.
    pub fn try_from_f64(re: f64, z6: f64) -> Result<Self, AlgebraError> {
        match (exact_integer(re), exact_integer(z6)) {
            (Some(a), Some(b)) => Ok(Self::new(a, b)),
            _ => Err(AlgebraError::TypeKind { re, z6 }),
        }
    }

    /// Recover the element whose complex value is `re + im·i`.
    ///
    /// Fails with [`AlgebraError::TypeKind`] if the point is not on the
    /// triangular lattice.
    pub fn from_complex(re: f64, im: f64) -> Result<Self, AlgebraError> {
        let z6 = im / SQRT_3_OVER_2;
        let a = re - 0.5 * z6;
        let (ra, rz) = (a.round(), z6.round());
        if (a - ra).abs() > LATTICE_EPSILON || (z6 - rz).abs() > LATTICE_EPSILON {
            return Err(AlgebraError::TypeKind { re: a, z6 });
        }
        Self::try_from_f64(ra, rz)
    }

    /// Coordinate on the `1` axis.
    pub const fn re_coord(self) -> i64 {
        self.re
    }

    /// Coordinate on the `ζ₆` axis.
    pub const fn z6_coord(self) -> i64 {
        self.z6
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Complex conjugate, expressed back in the `(1, ζ₆)` basis.
    pub fn conjugate(self) -> Self {
        Self::new(self.re + self.z6, -self.z6)
    }

    pub fn checked_conjugate(self) -> Result<Self, AlgebraError> {
        let overflow = || AlgebraError::Overflow { op: "conjugate" };
        let re = self.re.checked_add(self.z6).ok_or_else(overflow)?;
        let z6 = self.z6.checked_neg().ok_or_else(overflow)?;
        Ok(Self::new(re, z6))
    }

    pub fn checked_neg(self) -> Result<Self, AlgebraError> {
        let overflow = || AlgebraError::Overflow { op: "-" };
        Ok(Self::new(
            self.re.checked_neg().ok_or_else(overflow)?,
            self.z6.checked_neg().ok_or_else(overflow)?,
        ))
    }

    pub fn checked_add(self, rhs: Eisen) -> Result<Self, AlgebraError> {
        let overflow = || AlgebraError::Overflow { op: "+" };
        Ok(Self::new(
            self.re.checked_add(rhs.re).ok_or_else(overflow)?,
            self.z6.checked_add(rhs.z6).ok_or_else(overflow)?,
        ))
    }

    pub fn checked_sub(self, rhs: Eisen) -> Result<Self, AlgebraError> {
        let overflow = || AlgebraError::Overflow { op: "-" };
        Ok(Self::new(
            self.re.checked_sub(rhs.re).ok_or_else(overflow)?,
            self.z6.checked_sub(rhs.z6).ok_or_else(overflow)?,
        ))
    }

    /// Ring product, computed in `i128` and narrowed back to `i64`.
    pub fn checked_mul(self, rhs: Eisen) -> Result<Self, AlgebraError> {
        let (a, b) = (i128::from(self.re), i128::from(self.z6));
        let (c, d) = (i128::from(rhs.re), i128::from(rhs.z6));
        // Each product is below 2^126 in magnitude, so the sums fit in i128.
        let re = a * c - b * d;
        let z6 = a * d + b * c + b * d;
        match (i64::try_from(re), i64::try_from(z6)) {
            (Ok(re), Ok(z6)) => Ok(Self::new(re, z6)),
            _ => Err(AlgebraError::Overflow { op: "*" }),
        }
    }

    /// Real part as a float: `re + z6 / 2`.
    pub fn real_part(self) -> f64 {
        self.re as f64 + 0.5 * self.z6 as f64
    }

    /// Twice the real part, exact: `2·re + z6`.
    ///
    /// Sign tests on the real part go through this to stay in integers.
    pub fn real_part_doubled(self) -> i128 {
        2 * i128::from(self.re) + i128::from(self.z6)
    }

    /// The element as a complex number `(real, imaginary)`.
    pub fn to_complex(self) -> (f64, f64) {
        (self.real_part(), SQRT_3_OVER_2 * self.z6 as f64)
    }

    /// Length of a shortest path to the origin in the triangular lattice.
    ///
    /// When both coordinates share a sign this is `|re + z6|`, otherwise
    /// the larger of `|re|` and `|z6|`; the maximum of all three covers both.
    pub fn lattice_distance(self) -> u128 {
        let (re, z6) = (i128::from(self.re), i128::from(self.z6));
        (re + z6).unsigned_abs().max(re.unsigned_abs()).max(z6.unsigned_abs())
    }

    /// `self` raised to a non-negative power.
    pub fn pow(self, exponent: u32) -> Self {
        (0..exponent).fold(Self::ONE, |acc, _| acc * self)
    }

    pub fn try_add(self, rhs: impl Into<Operand>) -> Result<Self, AlgebraError> {
        let rhs = rhs.into();
        rhs.as_ring_element()
            .ok_or(AlgebraError::UnsupportedOperandKind { op: "+", kind: rhs.kind() })
            .and_then(|r| self.checked_add(r))
    }

    pub fn try_sub(self, rhs: impl Into<Operand>) -> Result<Self, AlgebraError> {
        let rhs = rhs.into();
        rhs.as_ring_element()
            .ok_or(AlgebraError::UnsupportedOperandKind { op: "-", kind: rhs.kind() })
            .and_then(|r| self.checked_sub(r))
    }

    pub fn try_mul(self, rhs: impl Into<Operand>) -> Result<Self, AlgebraError> {
        let rhs = rhs.into();
        rhs.as_ring_element()
            .ok_or(AlgebraError::UnsupportedOperandKind { op: "*", kind: rhs.kind() })
            .and_then(|r| self.checked_mul(r))
    }

    /// Equality against any operand kind.
    ///
    /// Integers compare as `(k, 0)`; complex values compare against
    /// [`Eisen::to_complex`].
    pub fn matches(self, other: impl Into<Operand>) -> bool {
        match other.into() {
            Operand::Eisen(e) => self == e,
            Operand::Int(k) => self == k,
            Operand::Complex { re, im } => self.to_complex() == (re, im),
        }
    }
}

fn exact_integer(x: f64) -> Option<i64> {
    if x.is_finite() && x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 {
        Some(x as i64)
    } else {
        None
    }
}

impl From<i64> for Eisen {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl PartialEq<i64> for Eisen {
    fn eq(&self, other: &i64) -> bool {
        self.re == *other && self.z6 == 0
    }
}

impl PartialEq<Eisen> for i64 {
    fn eq(&self, other: &Eisen) -> bool {
        other == self
    }
}

impl Neg for Eisen {
    type Output = Eisen;

    fn neg(self) -> Eisen {
        Eisen::new(-self.re, -self.z6)
    }
}

impl Add for Eisen {
    type Output = Eisen;

    fn add(self, rhs: Eisen) -> Eisen {
        Eisen::new(self.re + rhs.re, self.z6 + rhs.z6)
    }
}

impl Sub for Eisen {
    type Output = Eisen;

    fn sub(self, rhs: Eisen) -> Eisen {
        Eisen::new(self.re - rhs.re, self.z6 - rhs.z6)
    }
}

impl Mul for Eisen {
    type Output = Eisen;

    /// Uses `ζ₆² = ζ₆ - 1`:
    /// `(a + bζ)(c + dζ) = (ac - bd) + (ad + bc + bd)ζ`.
    fn mul(self, rhs: Eisen) -> Eisen {
        let (a, b, c, d) = (self.re, self.z6, rhs.re, rhs.z6);
        Eisen::new(a * c - b * d, a * d + b * c + b * d)
    }
}

impl Add<i64> for Eisen {
    type Output = Eisen;

    fn add(self, rhs: i64) -> Eisen {
        self + Eisen::from(rhs)
    }
}

impl Sub<i64> for Eisen {
    type Output = Eisen;

    fn sub(self, rhs: i64) -> Eisen {
        self - Eisen::from(rhs)
    }
}

impl Mul<i64> for Eisen {
    type Output = Eisen;

    fn mul(self, rhs: i64) -> Eisen {
        Eisen::new(self.re * rhs, self.z6 * rhs)
    }
}

impl Add<Eisen> for i64 {
    type Output = Eisen;

    fn add(self, rhs: Eisen) -> Eisen {
        rhs + self
    }
}

impl Sub<Eisen> for i64 {
    type Output = Eisen;

    fn sub(self, rhs: Eisen) -> Eisen {
        Eisen::from(self) - rhs
    }
}

impl Mul<Eisen> for i64 {
    type Output = Eisen;

    fn mul(self, rhs: Eisen) -> Eisen {
        rhs * self
    }
}

impl AddAssign for Eisen {
    fn add_assign(&mut self, rhs: Eisen) {
        *self = *self + rhs;
    }
}

impl SubAssign for Eisen {
    fn sub_assign(&mut self, rhs: Eisen) {
        *self = *self - rhs;
    }
}

impl MulAssign for Eisen {
    fn mul_assign(&mut self, rhs: Eisen) {
        *self = *self * rhs;
    }
}

impl Sum for Eisen {
    fn sum<I: Iterator<Item = Eisen>>(iter: I) -> Eisen {
        iter.fold(Eisen::ZERO, Add::add)
    }
}

impl fmt::Display for Eisen {
    /// Format as `a`, `b*zeta_6`, `a + b*zeta_6` or `a - b*zeta_6`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.re, self.z6) {
            (re, 0) => write!(f, "{}", re),
            (0, z6) => write!(f, "{}*zeta_6", z6),
            (re, z6) if z6 < 0 => write!(f, "{} - {}*zeta_6", re, z6.unsigned_abs()),
            (re, z6) => write!(f, "{} + {}*zeta_6", re, z6),
        }
    }
}

impl FromStr for Eisen {
    type Err = AlgebraError;

    /// Parse the [`Display`](fmt::Display) forms; whitespace is ignored and
    /// a missing `ζ₆` coefficient means `±1`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let fail = |reason| AlgebraError::Parse { input: input.to_string(), reason };
        if compact.is_empty() {
            return Err(fail("empty element"));
        }

        let Some(body) = compact.strip_suffix("zeta_6") else {
            let re = compact.parse::<i64>().map_err(|_| fail("invalid integer"))?;
            return Ok(Eisen::from(re));
        };
        let body = body.strip_suffix('*').unwrap_or(body);

        // The split between the two terms is the last sign that is not leading.
        let split = body
            .char_indices()
            .skip(1)
            .filter(|&(_, c)| c == '+' || c == '-')
            .map(|(i, _)| i)
            .last();
        let (re_text, z6_text) = match split {
            Some(i) => (&body[..i], &body[i..]),
            None => ("", body),
        };

        let re = if re_text.is_empty() {
            0
        } else {
            re_text.parse::<i64>().map_err(|_| fail("invalid real coordinate"))?
        };
        let z6 = match z6_text {
            "" | "+" => 1,
            "-" => -1,
            text => text
                .strip_prefix('+')
                .unwrap_or(text)
                .parse::<i64>()
                .map_err(|_| fail("invalid zeta_6 coordinate"))?,
        };
        Ok(Eisen::new(re, z6))
    }
}
