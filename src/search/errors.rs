// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ways a decomposition search can stop short of the zero flow.

use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// Expected, reportable outcomes of an unsuccessful search.
///
/// Neither proves that no decomposition exists; they only report that the
/// greedy first-match strategy did not reach zero.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro)]
pub enum SearchFailure {
    /// No circuit rotation conforms to the remaining flow.
    #[error("no conforming circuit rotation after {moves} moves")]
    Exhausted { moves: usize },

    /// The flow was still non-zero after the whole iteration budget.
    #[error("timeout: flow not zero after {max_iterations} moves")]
    Timeout { max_iterations: usize },
}

impl SearchFailure {
    /// Position of this variant, used to index statistics counters.
    pub fn index(&self) -> usize {
        match self {
            SearchFailure::Exhausted { .. } => 0,
            SearchFailure::Timeout { .. } => 1,
        }
    }
}
