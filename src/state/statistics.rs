// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters accumulated over many decomposition searches. Each
//! [`SearchFailure`] variant gets its own counter after the general ones.

use std::fmt;

use crate::search::{Decomposition, SearchFailure};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    Trials,
    Successes,
    MovesApplied,
    CandidatesRejected,
}

const COUNT: usize = Counters::COUNT + SearchFailure::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Fold the result of one search into the counters.
    pub fn record(&mut self, decomposition: &Decomposition) {
        self.add(Counters::Trials, 1);
        self.add(Counters::MovesApplied, decomposition.iterations() as u64);
        self.add(Counters::CandidatesRejected, decomposition.candidates_rejected);
        match decomposition.failure() {
            None => self.add(Counters::Successes, 1),
            Some(failure) => self.stats[Counters::COUNT + failure.index()] += 1,
        }
    }

    fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// How many searches ended with the same kind of failure as `failure`.
    pub fn failures(&self, failure: &SearchFailure) -> u64 {
        self.stats[Counters::COUNT + failure.index()]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            concat!(
                "{} trials, {} succeeded, {} exhausted, {} timed out ",
                "({} moves, {} rejected candidates)"
            ),
            self.get(Counters::Trials),
            self.get(Counters::Successes),
            self.failures(&SearchFailure::Exhausted { moves: 0 }),
            self.failures(&SearchFailure::Timeout { max_iterations: 0 }),
            self.get(Counters::MovesApplied),
            self.get(Counters::CandidatesRejected),
        )
    }
}
