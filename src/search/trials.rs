// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Random trials of the greedy search.
//!
//! Each trial builds a random flow that is decomposable by construction and
//! runs the search on it. The run stops at the first flow the search fails
//! on, so that flow can be inspected move by move.

use rand::Rng;
use tracing::{info, warn};

use crate::algebra::{AlgebraError, EisenFlow};
use crate::config::TrialConfig;
use crate::state::statistics::Statistics;

use super::conformance::Conformance;
use super::random::random_flow;
use super::{Decomposition, DecompositionSearch};

/// The first flow the search failed to decompose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedTrial {
    /// Zero-based trial number.
    pub trial: usize,
    pub flow: EisenFlow,
    pub decomposition: Decomposition,
}

#[derive(Debug, Clone, Default)]
pub struct TrialReport {
    pub statistics: Statistics,
    pub first_failure: Option<FailedTrial>,
}

/// Run up to `config.count` trials, stopping at the first failure.
pub fn run_trials<C: Conformance, R: Rng + ?Sized>(
    search: &DecompositionSearch<C>,
    config: &TrialConfig,
    rng: &mut R,
) -> Result<TrialReport, AlgebraError> {
    let mut report = TrialReport::default();
    for trial in 0..config.count {
        let flow = random_flow(rng, search.library(), search.rotations(), config.complexity)?;
        let decomposition = search.run(&flow)?;
        report.statistics.record(&decomposition);
        if let Some(failure) = decomposition.failure() {
            warn!(trial, %flow, %failure, "greedy decomposition failed");
            report.first_failure = Some(FailedTrial { trial, flow, decomposition });
            break;
        }
    }
    info!(statistics = %report.statistics, "trials finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::RotationSet;
    use crate::search::{CircuitLibrary, Outcome};
    use crate::state::statistics::Counters;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(count: usize, complexity: usize) -> TrialConfig {
        TrialConfig { count, complexity, seed: None }
    }

    #[test]
    fn test_single_circuit_trials_always_succeed() {
        let search = DecompositionSearch::new(CircuitLibrary::standard(), RotationSet::zeta6(), 10);
        let mut rng = StdRng::seed_from_u64(1);
        let report = run_trials(&search, &config(50, 1), &mut rng).unwrap();
        assert!(report.first_failure.is_none());
        assert_eq!(report.statistics.get(Counters::Trials), 50);
        assert_eq!(report.statistics.get(Counters::Successes), 50);
    }

    #[test]
    fn test_stops_at_first_failure() {
        // A zero budget fails on every non-zero flow.
        let search = DecompositionSearch::new(CircuitLibrary::standard(), RotationSet::zeta6(), 0);
        let mut rng = StdRng::seed_from_u64(5);
        let report = run_trials(&search, &config(20, 1), &mut rng).unwrap();
        let failed = report.first_failure.expect("a failure");
        assert_eq!(failed.trial, 0);
        assert_eq!(failed.decomposition.outcome, Outcome::Timeout);
        assert_eq!(failed.decomposition.residual, failed.flow);
        assert_eq!(report.statistics.get(Counters::Trials), 1);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let search = DecompositionSearch::new(CircuitLibrary::standard(), RotationSet::zeta6(), 10);
        let a = run_trials(&search, &config(30, 4), &mut StdRng::seed_from_u64(9)).unwrap();
        let b = run_trials(&search, &config(30, 4), &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.statistics, b.statistics);
        assert_eq!(a.first_failure, b.first_failure);
    }
}
