// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Eisenstein-integer valued flows.
//!
//! A flow assigns a ring element to every element of the ground set
//! `{1, ..., n}` (stored 0-indexed). Its length is fixed at construction,
//! and binary operations between flows of different lengths fail with
//! [`AlgebraError::LengthMismatch`]. Arithmetic is checked, so a value
//! leaving the range of `i64` gives [`AlgebraError::Overflow`].
//!
//! # Examples
//!
//! ```
//! use lattice_flows::algebra::{Eisen, EisenFlow};
//!
//! let f: EisenFlow = "[1, 1, 0, 1, 0, 0]".parse().unwrap();
//! let g = f.scale(Eisen::ZETA6).unwrap();
//! assert_eq!(g.value(0).unwrap(), Eisen::ZETA6);
//! assert!(f.checked_sub(&f).unwrap().is_zero());
//! ```

use std::fmt;
use std::str::FromStr;

use super::eisen::Eisen;
use super::errors::AlgebraError;

/// A fixed-length vector of Eisenstein integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EisenFlow {
    values: Vec<Eisen>,
}

impl EisenFlow {
    /// The zero flow on a ground set of size `len`.
    pub fn zero(len: usize) -> Self {
        Self { values: vec![Eisen::ZERO; len] }
    }

    pub fn from_values(values: Vec<Eisen>) -> Self {
        Self { values }
    }

    /// A flow with integer values on the `1` axis only.
    pub fn from_integers(values: &[i64]) -> Self {
        Self { values: values.iter().map(|&k| Eisen::from(k)).collect() }
    }

    /// Size of the ground set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value on ground-set element `index` (0-indexed).
    pub fn value(&self, index: usize) -> Result<Eisen, AlgebraError> {
        self.values.get(index).copied().ok_or(AlgebraError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn values(&self) -> &[Eisen] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Eisen> + '_ {
        self.values.iter().copied()
    }

    /// True iff every value is the ring zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| v.is_zero())
    }

    fn check_len(&self, other: &EisenFlow) -> Result<(), AlgebraError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(AlgebraError::LengthMismatch { left: self.len(), right: other.len() })
        }
    }

    fn zip_with(
        &self,
        other: &EisenFlow,
        op: impl Fn(Eisen, Eisen) -> Result<Eisen, AlgebraError>,
    ) -> Result<EisenFlow, AlgebraError> {
        self.check_len(other)?;
        let values = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| op(a, b))
            .collect::<Result<_, _>>()?;
        Ok(EisenFlow { values })
    }

    /// Element-wise sum.
    pub fn checked_add(&self, other: &EisenFlow) -> Result<EisenFlow, AlgebraError> {
        self.zip_with(other, Eisen::checked_add)
    }

    /// Element-wise difference.
    pub fn checked_sub(&self, other: &EisenFlow) -> Result<EisenFlow, AlgebraError> {
        self.zip_with(other, Eisen::checked_sub)
    }

    /// Multiply every value by a ring element.
    pub fn scale(&self, scalar: Eisen) -> Result<EisenFlow, AlgebraError> {
        let values = self.iter().map(|v| v.checked_mul(scalar)).collect::<Result<_, _>>()?;
        Ok(EisenFlow { values })
    }

    /// Hermitian inner product `Σ self[i] · conj(other[i])`.
    pub fn inner_product(&self, other: &EisenFlow) -> Result<Eisen, AlgebraError> {
        self.check_len(other)?;
        self.iter().zip(other.iter()).try_fold(Eisen::ZERO, |acc, (a, b)| {
            acc.checked_add(a.checked_mul(b.checked_conjugate()?)?)
        })
    }

    /// Per-coordinate real parts of `self[i] · conj(other[i])`.
    pub fn entry_products(&self, other: &EisenFlow) -> Result<Vec<f64>, AlgebraError> {
        self.check_len(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| {
                let ((ar, ai), (br, bi)) = (a.to_complex(), b.to_complex());
                ar * br + ai * bi
            })
            .collect())
    }
}

impl From<Vec<Eisen>> for EisenFlow {
    fn from(values: Vec<Eisen>) -> Self {
        Self::from_values(values)
    }
}

impl fmt::Display for EisenFlow {
    /// Format as a row vector: `[1, 1 + 2*zeta_6, 0]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl FromStr for EisenFlow {
    type Err = AlgebraError;

    /// Parse a comma separated list of elements; surrounding brackets are
    /// optional.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(trimmed);
        if inner.trim().is_empty() {
            return Ok(EisenFlow::zero(0));
        }
        let values = inner
            .split(',')
            .map(str::parse::<Eisen>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EisenFlow { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(values: &[(i64, i64)]) -> EisenFlow {
        EisenFlow::from_values(values.iter().map(|&(a, b)| Eisen::new(a, b)).collect())
    }

    #[test]
    fn test_add_and_sub() {
        let f = flow(&[(1, 0), (0, 1), (2, -1)]);
        let g = flow(&[(1, 1), (-1, 0), (0, 0)]);
        assert_eq!(f.checked_add(&g).unwrap(), flow(&[(2, 1), (-1, 1), (2, -1)]));
        assert_eq!(f.checked_sub(&g).unwrap(), flow(&[(0, -1), (1, 1), (2, -1)]));
        assert!(f.checked_sub(&f).unwrap().is_zero());
    }

    #[test]
    fn test_length_mismatch() {
        let f = EisenFlow::zero(3);
        let g = EisenFlow::zero(4);
        let expected = AlgebraError::LengthMismatch { left: 3, right: 4 };
        assert_eq!(f.checked_add(&g), Err(expected.clone()));
        assert_eq!(f.checked_sub(&g), Err(expected.clone()));
        assert_eq!(f.inner_product(&g), Err(expected));
    }

    #[test]
    fn test_value_bounds() {
        let f = EisenFlow::from_integers(&[1, 2]);
        assert_eq!(f.value(1), Ok(Eisen::new(2, 0)));
        assert_eq!(f.value(2), Err(AlgebraError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_scale_by_rotation() {
        let f = EisenFlow::from_integers(&[1, -1, 0]);
        assert_eq!(f.scale(Eisen::ZETA6).unwrap(), flow(&[(0, 1), (0, -1), (0, 0)]));
        assert_eq!(f.scale(Eisen::ZETA6.pow(6)).unwrap(), f);
    }

    #[test]
    fn test_overflow_reported() {
        let f = EisenFlow::from_integers(&[i64::MAX, 0]);
        let one = EisenFlow::from_integers(&[1, 0]);
        assert_eq!(f.checked_add(&one), Err(AlgebraError::Overflow { op: "+" }));
        assert_eq!(f.scale(Eisen::new(2, 0)), Err(AlgebraError::Overflow { op: "*" }));
        assert_eq!(f.inner_product(&f), Err(AlgebraError::Overflow { op: "*" }));
    }

    #[test]
    fn test_inner_product() {
        let f = flow(&[(1, 0), (0, 1)]);
        // |1|² + |ζ|² = 2
        assert_eq!(f.inner_product(&f).unwrap(), Eisen::new(2, 0));
        let g = EisenFlow::from_integers(&[0, 1]);
        assert_eq!(f.inner_product(&g).unwrap(), Eisen::ZETA6);
    }

    #[test]
    fn test_entry_products() {
        let f = flow(&[(1, 0), (0, 1)]);
        let g = EisenFlow::from_integers(&[-1, 1]);
        assert_eq!(f.entry_products(&g).unwrap(), vec![-1.0, 0.5]);
    }

    #[test]
    fn test_is_zero() {
        assert!(EisenFlow::zero(6).is_zero());
        assert!(EisenFlow::zero(0).is_zero());
        assert!(!EisenFlow::from_integers(&[0, 0, 1]).is_zero());
    }

    #[test]
    fn test_display_and_parse() {
        let f = flow(&[(1, 0), (1, -2), (0, 3)]);
        assert_eq!(f.to_string(), "[1, 1 - 2*zeta_6, 3*zeta_6]");
        assert_eq!(f.to_string().parse::<EisenFlow>().unwrap(), f);
        assert_eq!("1, 0, -1".parse::<EisenFlow>().unwrap(), EisenFlow::from_integers(&[1, 0, -1]));
        assert!("[1, oops]".parse::<EisenFlow>().is_err());
    }
}
