// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Random decomposable flows.

use rand::Rng;

use crate::algebra::{AlgebraError, EisenFlow, RotationSet};

use super::library::CircuitLibrary;

/// Sum of `complexity` terms `rotation · circuit`, each chosen uniformly.
///
/// Every flow produced this way has a decomposition by construction, though
/// the greedy search may still fail to find one.
pub fn random_flow<R: Rng + ?Sized>(
    rng: &mut R,
    library: &CircuitLibrary,
    rotations: &RotationSet,
    complexity: usize,
) -> Result<EisenFlow, AlgebraError> {
    let mut flow = EisenFlow::zero(library.ground_set_size());
    if library.is_empty() || rotations.is_empty() {
        return Ok(flow);
    }
    for _ in 0..complexity {
        let circuit = rng.gen_range(0..library.len());
        let rotation = rng.gen_range(0..rotations.len());
        if let (Some(base), Some(unit)) = (library.get(circuit), rotations.get(rotation)) {
            flow = flow.checked_add(&base.scale(unit)?)?;
        }
    }
    Ok(flow)
}
