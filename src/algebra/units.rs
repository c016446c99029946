// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The unit group of the Eisenstein integers.
//!
//! The six units are exactly the powers of ζ₆. They act on flows as
//! rotations by multiples of 60°, and the decomposition search tries them
//! in order of increasing exponent.

use super::eisen::Eisen;

/// Number of units (rotations) in the ring.
pub const NROTATIONS: usize = 6;

/// `ζ₆⁰ … ζ₆⁵`, in order of increasing exponent.
pub const ZETA6_POWERS: [Eisen; NROTATIONS] = [
    Eisen::new(1, 0),
    Eisen::new(0, 1),
    Eisen::new(-1, 1),
    Eisen::new(-1, 0),
    Eisen::new(0, -1),
    Eisen::new(1, -1),
];

/// Raise `base` to `exponent` by repeated multiplication.
pub fn eisen_pow(base: Eisen, exponent: u32) -> Eisen {
    base.pow(exponent)
}

/// An ordered set of rotations tried by the search.
///
/// The standard set is [`ZETA6_POWERS`]; tests may restrict it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationSet {
    units: Vec<Eisen>,
}

impl RotationSet {
    /// The six powers of ζ₆, generated from the primitive unit.
    pub fn zeta6() -> Self {
        Self {
            units: (0..NROTATIONS as u32).map(|k| eisen_pow(Eisen::ZETA6, k)).collect(),
        }
    }

    /// A custom ordered set of rotations.
    pub fn from_units(units: Vec<Eisen>) -> Self {
        Self { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Eisen> {
        self.units.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Eisen> + '_ {
        self.units.iter().copied()
    }
}

impl Default for RotationSet {
    fn default() -> Self {
        Self::zeta6()
    }
}
