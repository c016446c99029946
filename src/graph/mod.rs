// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Simple graphs and the graph6 text format.
//!
//! - adjacency: the upper-triangular graph model, complement, connectivity
//! - g6: graph6 decoding/encoding and the line filters built on it
//! - stable: stable sets and log-concavity of the generalized chromatic polynomial

pub mod adjacency;
pub mod g6;
pub mod stable;

pub use adjacency::{pair_count, Graph};
pub use g6::{decode, decode_strict, encode, FilterStats, G6Error};
