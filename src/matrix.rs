// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting binary matrices with fixed column support, by rank over GF(2).
//!
//! An `m x n` matrix is held as `n` columns, each a `u32` bit mask with
//! exactly `s` bits set. Matrices that differ only by a permutation of
//! their columns have the same rank, so only non-decreasing column
//! sequences are visited and each is weighted by the number of distinct
//! orderings of its columns, `n! / (c_1! c_2! ...)`.

use num_bigint::BigUint;
use thiserror::Error;
use tracing::{debug, warn};

/// Rows are bits of a `u32`; the top two are left clear.
pub const MAX_ROWS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("matrix needs 1..={max} rows, got {rows}")]
    InvalidRows { rows: usize, max: usize },

    #[error("matrix needs at least one column")]
    NoColumns,
}

/// Number of `rows x columns` binary matrices whose columns each have
/// `support` ones, indexed by rank.
///
/// The result has `min(rows, columns) + 1` entries. A support larger than
/// `rows` is clamped to `rows`.
pub fn count_by_rank(
    rows: usize,
    columns: usize,
    support: usize,
) -> Result<Vec<BigUint>, MatrixError> {
    if rows == 0 || rows > MAX_ROWS {
        return Err(MatrixError::InvalidRows { rows, max: MAX_ROWS });
    }
    if columns == 0 {
        return Err(MatrixError::NoColumns);
    }
    let support = if support > rows {
        warn!(support, rows, "support exceeds the row count, using {}", rows);
        rows
    } else {
        support
    };

    let candidates = columns_with_support(rows, support);
    debug!(rows, columns, support, candidates = candidates.len(), "counting matrices");
    let mut counts = vec![BigUint::default(); rows.min(columns) + 1];
    let mut chosen = Vec::with_capacity(columns);
    let mut counter = Counter { candidates: &candidates, columns, counts: &mut counts };
    counter.extend(0, &mut chosen);
    Ok(counts)
}

/// All `u32` masks below `1 << rows` with `support` bits set, ascending.
pub fn columns_with_support(rows: usize, support: usize) -> Vec<u32> {
    (0u32..(1 << rows)).filter(|c| c.count_ones() as usize == support).collect()
}

/// Rank over GF(2) of the matrix with these columns.
pub fn rank(columns: &[u32]) -> usize {
    // basis[b] has highest set bit b
    let mut basis = [0u32; 32];
    let mut rank = 0;
    for &column in columns {
        let mut v = column;
        while v != 0 {
            let top = 31 - v.leading_zeros() as usize;
            if basis[top] == 0 {
                basis[top] = v;
                rank += 1;
                break;
            }
            v ^= basis[top];
        }
    }
    rank
}

/// Number of distinct orderings of a sorted column sequence.
pub fn orderings(sorted: &[u32]) -> BigUint {
    let mut denominator = BigUint::from(1u32);
    for run in sorted.chunk_by(|a, b| a == b) {
        denominator *= factorial(run.len());
    }
    factorial(sorted.len()) / denominator
}

fn factorial(n: usize) -> BigUint {
    (2..=n).fold(BigUint::from(1u32), |acc, i| acc * i)
}

struct Counter<'a> {
    candidates: &'a [u32],
    columns: usize,
    counts: &'a mut [BigUint],
}

impl Counter<'_> {
    /// Append columns no smaller than `candidates[from]` until the matrix is full.
    fn extend(&mut self, from: usize, chosen: &mut Vec<u32>) {
        if chosen.len() == self.columns {
            self.counts[rank(chosen)] += orderings(chosen);
            return;
        }
        for i in from..self.candidates.len() {
            chosen.push(self.candidates[i]);
            self.extend(i, chosen);
            chosen.pop();
        }
    }
}
