// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The compatibility test gating each greedy move.
//!
//! A rotated circuit `candidate` may be subtracted from `flow` when:
//!
//! 1. every coordinate in the support of `candidate` is in the support of
//!    `flow`, and the two values agree there: the real part of
//!    `candidate[i] · conj(flow[i])` is non-negative (a half-plane test);
//! 2. the subtraction brings the flow closer to zero in lattice distance,
//!    as selected by [`DistanceRule`].

use std::fmt::{self, Debug};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algebra::{AlgebraError, Eisen, EisenFlow};

/// How subtracting a candidate must change per-coordinate lattice distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceRule {
    /// At least one coordinate strictly decreases.
    #[default]
    AnyImproves,
    /// At least one coordinate strictly decreases and none increases.
    Monotone,
}

impl DistanceRule {
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceRule::AnyImproves => "any-improves",
            DistanceRule::Monotone => "monotone",
        }
    }

    fn accepts(self, candidate: &EisenFlow, flow: &EisenFlow) -> Result<bool, AlgebraError> {
        let mut improves = false;
        for (c, f) in candidate.iter().zip(flow.iter()) {
            let before = f.lattice_distance();
            let after = f.checked_sub(c)?.lattice_distance();
            if after < before {
                improves = true;
            } else if after > before && self == DistanceRule::Monotone {
                return Ok(false);
            }
        }
        Ok(improves)
    }
}

impl fmt::Display for DistanceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any-improves" => Ok(DistanceRule::AnyImproves),
            "monotone" => Ok(DistanceRule::Monotone),
            other => Err(format!(
                "unknown distance rule {:?} (expected any-improves or monotone)",
                other
            )),
        }
    }
}

/// True when `a` and `b` lie in a common closed half-plane through the
/// origin, i.e. `Re(a · conj(b)) >= 0`.
pub fn agree(a: Eisen, b: Eisen) -> Result<bool, AlgebraError> {
    Ok(a.checked_mul(b.checked_conjugate()?)?.real_part_doubled() >= 0)
}

/// Decides whether a rotated circuit may be subtracted from a flow.
pub trait Conformance: Debug {
    /// `candidate` and `flow` have equal length when called by the search.
    ///
    /// Fails only when the arithmetic behind the test overflows.
    fn conforms(&self, candidate: &EisenFlow, flow: &EisenFlow) -> Result<bool, AlgebraError>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Sign agreement on the candidate's support plus a [`DistanceRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HalfPlaneConformance {
    pub rule: DistanceRule,
}

impl HalfPlaneConformance {
    pub fn new(rule: DistanceRule) -> Self {
        Self { rule }
    }
}

impl Conformance for HalfPlaneConformance {
    fn conforms(&self, candidate: &EisenFlow, flow: &EisenFlow) -> Result<bool, AlgebraError> {
        if candidate.len() != flow.len() {
            return Ok(false);
        }
        for (c, f) in candidate.iter().zip(flow.iter()) {
            if c.is_zero() {
                continue;
            }
            if f.is_zero() || !agree(c, f)? {
                return Ok(false);
            }
        }
        self.rule.accepts(candidate, flow)
    }

    fn name(&self) -> &str {
        "HalfPlane"
    }
}
