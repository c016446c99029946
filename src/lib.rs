// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice flows over the Eisenstein integers, and small graph6 utilities.
//!
//! # Flow decomposition
//!
//! A flow assigns an Eisenstein integer `a + b·ζ₆` to each element of a
//! ground set. The question explored here is whether a flow can be written
//! as a sum of rotated circuits `ζ₆ᵏ · C` that are "well behaved": each one
//! agrees in sign with the flow wherever it is non-zero and brings the flow
//! closer to zero.
//!
//! The search is greedy and deterministic:
//!
//! 1. Scan the circuit library in order, and each circuit's six rotations
//!    in order of exponent
//! 2. Subtract the first rotated circuit that conforms to the current flow
//! 3. Repeat until the flow is zero, nothing conforms, or the iteration
//!    budget is spent
//!
//! ## Layers
//!
//! - [`algebra`]: exact ring arithmetic and flows
//! - [`search`]: circuit library, conformance, the greedy search and the
//!   random-trial driver
//! - [`state`]: statistics gathered over many searches
//!
//! # Graphs
//!
//! Independently of the flows, [`graph`] decodes and encodes graph6
//! strings (complement and connectivity filters included), checks the
//! generalized chromatic polynomial for log-concavity ([`graph::stable`]),
//! and [`render`] draws a graph on any [`render::DrawingSurface`].
//!
//! # Binary matrices
//!
//! [`matrix`] counts binary matrices with a fixed number of ones per
//! column, by rank over GF(2).

pub mod algebra;
pub mod config;
pub mod graph;
pub mod matrix;
pub mod render;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use algebra::{AlgebraError, Eisen, EisenFlow, RotationSet};
pub use config::AppConfig;
pub use search::{CircuitLibrary, Decomposition, DecompositionSearch, Outcome};
