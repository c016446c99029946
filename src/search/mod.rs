// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy decomposition of flows into rotated circuits.
//!
//! Given a flow, an ordered [`CircuitLibrary`] and an ordered
//! [`RotationSet`], the search repeatedly subtracts the first
//! `rotation · circuit` that conforms to the remaining flow, scanning
//! circuits in library order and, for each circuit, rotations in order.
//!
//! There is no backtracking. The search ends in one of three states:
//! - [`Outcome::Success`]: the flow reached zero
//! - [`Outcome::Exhausted`]: no candidate conforms to the remaining flow
//! - [`Outcome::Timeout`]: `max_iterations` moves were applied and the flow
//!   is still non-zero
//!
//! The input flow is never mutated. The result carries the residual flow
//! and the moves applied, so a run can be replayed and inspected.
//!
//! # Example
//!
//! ```
//! use lattice_flows::algebra::{EisenFlow, RotationSet};
//! use lattice_flows::search::{CircuitLibrary, DecompositionSearch, Outcome};
//!
//! let search = DecompositionSearch::new(CircuitLibrary::standard(), RotationSet::zeta6(), 10);
//! let flow = EisenFlow::from_integers(&[1, 1, 0, 1, 0, 0]);
//! let result = search.run(&flow).unwrap();
//! assert_eq!(result.outcome, Outcome::Success);
//! assert_eq!(result.moves.len(), 1);
//! ```

pub mod conformance;
pub mod errors;
pub mod library;
pub mod random;
pub mod trials;

pub use conformance::{agree, Conformance, DistanceRule, HalfPlaneConformance};
pub use errors::SearchFailure;
pub use library::CircuitLibrary;

use std::fmt;

use tracing::{debug, trace};

use crate::algebra::{AlgebraError, Eisen, EisenFlow, RotationSet};
use crate::config::SearchConfig;

/// Terminal state of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Exhausted,
    Timeout,
}

/// One greedy step: subtract `unit · library[circuit]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Index into the circuit library.
    pub circuit: usize,
    /// Index into the rotation set.
    pub rotation: usize,
    /// The rotation itself.
    pub unit: Eisen,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) * C[{}]", self.unit, self.circuit)
    }
}

/// Result of running a search on one flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub outcome: Outcome,
    /// What is left of the flow after the moves.
    pub residual: EisenFlow,
    /// Moves in the order they were applied.
    pub moves: Vec<Move>,
    /// Candidates tested and rejected along the way.
    pub candidates_rejected: u64,
    max_iterations: usize,
}

impl Decomposition {
    /// Number of moves applied.
    pub fn iterations(&self) -> usize {
        self.moves.len()
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    pub fn failure(&self) -> Option<SearchFailure> {
        match self.outcome {
            Outcome::Success => None,
            Outcome::Exhausted => Some(SearchFailure::Exhausted { moves: self.moves.len() }),
            Outcome::Timeout => {
                Some(SearchFailure::Timeout { max_iterations: self.max_iterations })
            }
        }
    }

    /// The applied moves on success, the failure otherwise.
    pub fn into_result(self) -> Result<Vec<Move>, SearchFailure> {
        match self.failure() {
            None => Ok(self.moves),
            Some(failure) => Err(failure),
        }
    }
}

/// The greedy first-match decomposition search.
///
/// Library, rotations and budget are fixed at construction; a single
/// search value can be run on any number of flows.
#[derive(Debug, Clone)]
pub struct DecompositionSearch<C: Conformance = HalfPlaneConformance> {
    library: CircuitLibrary,
    rotations: RotationSet,
    conformance: C,
    max_iterations: usize,
}

impl DecompositionSearch<HalfPlaneConformance> {
    /// Search with the default [`HalfPlaneConformance`].
    pub fn new(library: CircuitLibrary, rotations: RotationSet, max_iterations: usize) -> Self {
        Self::with_conformance(library, rotations, HalfPlaneConformance::default(), max_iterations)
    }

    pub fn from_config(
        library: CircuitLibrary,
        rotations: RotationSet,
        config: &SearchConfig,
    ) -> Self {
        Self::with_conformance(
            library,
            rotations,
            HalfPlaneConformance::new(config.distance_rule),
            config.max_iterations,
        )
    }
}

impl<C: Conformance> DecompositionSearch<C> {
    pub fn with_conformance(
        library: CircuitLibrary,
        rotations: RotationSet,
        conformance: C,
        max_iterations: usize,
    ) -> Self {
        Self { library, rotations, conformance, max_iterations }
    }

    pub fn library(&self) -> &CircuitLibrary {
        &self.library
    }

    pub fn rotations(&self) -> &RotationSet {
        &self.rotations
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Run the greedy search on `flow`.
    ///
    /// Fails if `flow` does not live on the library's ground set, or if its
    /// values are so large that the conformance arithmetic overflows.
    pub fn run(&self, flow: &EisenFlow) -> Result<Decomposition, AlgebraError> {
        if !self.library.is_empty() && flow.len() != self.library.ground_set_size() {
            return Err(AlgebraError::LengthMismatch {
                left: flow.len(),
                right: self.library.ground_set_size(),
            });
        }

        let mut residual = flow.clone();
        let mut moves = Vec::new();
        let mut candidates_rejected = 0;

        let outcome = loop {
            if residual.is_zero() {
                break Outcome::Success;
            }
            if moves.len() >= self.max_iterations {
                break Outcome::Timeout;
            }
            match self.first_conforming(&residual, &mut candidates_rejected)? {
                Some((mv, candidate)) => {
                    residual = residual.checked_sub(&candidate)?;
                    debug!(step = moves.len() + 1, %mv, flow = %residual, "applied move");
                    moves.push(mv);
                }
                None => break Outcome::Exhausted,
            }
        };

        debug!(
            ?outcome,
            moves = moves.len(),
            conformance = self.conformance.name(),
            "search finished"
        );
        Ok(Decomposition {
            outcome,
            residual,
            moves,
            candidates_rejected,
            max_iterations: self.max_iterations,
        })
    }

    /// The first conforming `(move, rotated circuit)` in search order.
    fn first_conforming(
        &self,
        flow: &EisenFlow,
        rejected: &mut u64,
    ) -> Result<Option<(Move, EisenFlow)>, AlgebraError> {
        for (circuit, base) in self.library.iter().enumerate() {
            for (rotation, unit) in self.rotations.iter().enumerate() {
                let candidate = base.scale(unit)?;
                if self.conformance.conforms(&candidate, flow)? {
                    return Ok(Some((Move { circuit, rotation, unit }, candidate)));
                }
                *rejected += 1;
                trace!(circuit, rotation, "candidate rejected");
            }
        }
        Ok(None)
    }

    /// The rotated circuit a move subtracts.
    pub fn candidate(&self, mv: &Move) -> Result<EisenFlow, AlgebraError> {
        let base = self.library.get(mv.circuit).ok_or(AlgebraError::IndexOutOfRange {
            index: mv.circuit,
            len: self.library.len(),
        })?;
        let unit = self.rotations.get(mv.rotation).ok_or(AlgebraError::IndexOutOfRange {
            index: mv.rotation,
            len: self.rotations.len(),
        })?;
        base.scale(unit)
    }

    /// Apply `moves` to `flow` without any conformance checks.
    pub fn replay(&self, flow: &EisenFlow, moves: &[Move]) -> Result<EisenFlow, AlgebraError> {
        moves.iter().try_fold(flow.clone(), |acc, mv| acc.checked_sub(&self.candidate(mv)?))
    }
}
