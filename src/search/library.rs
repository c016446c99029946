// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The circuit library searched by the decomposition.
//!
//! The standard library holds the signed circuits of a matroid on six
//! elements. It was obtained from a nine-element matroid by contracting
//! the series pairs (1,3), (2,5) and (8,9):
//!
//! ```text
//! 1,3,6,4          ->  [1, 1, 0, 1, 0, 0]
//! 2,5,7,4          ->  [0,-1,-1, 0,-1, 0]
//! 1,3,8,9,7,4      ->  [1, 1, 0, 0, 1, 1]
//! 1,3,8,9,-5,-2    ->  [1, 0,-1, 0, 0, 1]
//! -6,8,9,7         ->  [0, 0, 0,-1, 1, 1]
//! 1,3,6,-7,-5,-2   ->  [1, 0,-1, 1,-1, 0]
//! -4,-6,8,9,-5,-2  ->  [0,-1,-1,-1, 0, 1]
//! ```

use crate::algebra::{AlgebraError, EisenFlow};

/// Size of the ground set of the standard library.
pub const STANDARD_GROUND_SET: usize = 6;

/// The standard circuits as signed integer vectors, in search order.
pub const STANDARD_CIRCUITS: [[i64; STANDARD_GROUND_SET]; 7] = [
    [1, 1, 0, 1, 0, 0],
    [0, -1, -1, 0, -1, 0],
    [1, 1, 0, 0, 1, 1],
    [1, 0, -1, 0, 0, 1],
    [0, 0, 0, -1, 1, 1],
    [1, 0, -1, 1, -1, 0],
    [0, -1, -1, -1, 0, 1],
];

/// An ordered, immutable list of equal-length circuits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitLibrary {
    circuits: Vec<EisenFlow>,
    ground_set_size: usize,
}

impl CircuitLibrary {
    /// The seven circuits of the contracted six-element matroid.
    pub fn standard() -> Self {
        Self {
            circuits: STANDARD_CIRCUITS.iter().map(|c| EisenFlow::from_integers(c)).collect(),
            ground_set_size: STANDARD_GROUND_SET,
        }
    }

    /// A custom library. All circuits must share one length.
    pub fn new(circuits: Vec<EisenFlow>) -> Result<Self, AlgebraError> {
        let ground_set_size = circuits.first().map_or(0, EisenFlow::len);
        if let Some(bad) = circuits.iter().find(|c| c.len() != ground_set_size) {
            return Err(AlgebraError::LengthMismatch { left: ground_set_size, right: bad.len() });
        }
        Ok(Self { circuits, ground_set_size })
    }

    pub fn ground_set_size(&self) -> usize {
        self.ground_set_size
    }

    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EisenFlow> {
        self.circuits.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EisenFlow> {
        self.circuits.iter()
    }
}

impl Default for CircuitLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_library_shape() {
        let library = CircuitLibrary::standard();
        assert_eq!(library.len(), 7);
        assert_eq!(library.ground_set_size(), 6);
        assert!(library.iter().all(|c| c.len() == 6 && !c.is_zero()));
        assert_eq!(library.get(0), Some(&EisenFlow::from_integers(&[1, 1, 0, 1, 0, 0])));
        assert_eq!(library.get(7), None);
    }

    #[test]
    fn test_custom_library_rejects_mixed_lengths() {
        let err = CircuitLibrary::new(vec![EisenFlow::zero(3), EisenFlow::zero(4)]).unwrap_err();
        assert_eq!(err, AlgebraError::LengthMismatch { left: 3, right: 4 });
    }

    #[test]
    fn test_empty_library() {
        let library = CircuitLibrary::new(Vec::new()).unwrap();
        assert!(library.is_empty());
        assert_eq!(library.ground_set_size(), 0);
    }
}
