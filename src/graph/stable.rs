// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stable sets and the generalized chromatic polynomial.
//!
//! `P(G; k, l)` (Dohmen, Pönitz and Tittmann) counts the maps
//! `V(G) -> {1, ..., k}` in which every colour `<= l` is a stable set;
//! colours above `l` are unrestricted. `P(G; k, 0) = k^n` and
//! `P(G; k, k)` is the chromatic polynomial.
//!
//! Every colouring induces a set partition of the vertices, so the
//! polynomial is assembled from [`PartitionCounts`]: the number of set
//! partitions with a given number of stable and non-stable blocks.
//! Non-stable blocks need distinct colours above `l`, stable blocks take
//! any of the colours left over.
//!
//! For each `k` the sequence `b_l = P(G; k, l)`, `l = 0..=k`, is checked
//! for log-concavity: `b_l² >= b_{l-1}·b_{l+1}`.

use std::io::{self, BufRead, Write};

use num_bigint::BigUint;
use thiserror::Error;
use tracing::{info, warn};

use super::adjacency::Graph;
use super::g6;

/// Largest graph whose set partitions are enumerated.
///
/// The Bell number B(12) is about four million.
pub const MAX_PARTITION_VERTICES: usize = 12;

/// Lines between progress reports of [`check_lines`].
const PROGRESS_INTERVAL: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StableError {
    #[error("graph has {vertices} vertices; partitions are enumerated for at most {max}")]
    TooManyVertices { vertices: usize, max: usize },
}

/// Number of stable sets of each size, including the empty set.
///
/// Entry `i` counts the stable sets with `i` vertices.
pub fn stable_set_counts(graph: &Graph) -> Result<Vec<u64>, StableError> {
    let n = graph.vertex_count();
    check_size(n)?;
    let neighbours = neighbour_masks(graph);
    let mut counts = vec![0u64; n + 1];
    for set in 0u64..(1 << n) {
        let stable = (0..n)
            .filter(|&v| set & (1 << v) != 0)
            .all(|v| neighbours[v] & set == 0);
        if stable {
            counts[set.count_ones() as usize] += 1;
        }
    }
    Ok(counts)
}

/// Set partitions of the vertices, by number of non-stable and stable blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionCounts {
    vertex_count: usize,
    /// `counts[ns][s]`; a non-stable block has at least two vertices, so
    /// `ns <= n / 2`.
    counts: Vec<Vec<u64>>,
}

impl PartitionCounts {
    pub fn new(graph: &Graph) -> Result<Self, StableError> {
        let n = graph.vertex_count();
        check_size(n)?;
        let mut counts = vec![vec![0u64; n + 1]; n / 2 + 1];
        let mut blocks = Vec::with_capacity(n);
        extend_partitions(&neighbour_masks(graph), 0, &mut blocks, &mut counts);
        Ok(Self { vertex_count: n, counts })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Partitions with `non_stable` non-stable blocks and `stable` stable ones.
    pub fn get(&self, non_stable: usize, stable: usize) -> u64 {
        self.counts
            .get(non_stable)
            .and_then(|row| row.get(stable))
            .copied()
            .unwrap_or(0)
    }

    /// Total number of set partitions (a Bell number).
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// `P(G; k, l)`.
    pub fn generalized_chromatic(&self, k: usize, l: usize) -> BigUint {
        let mut total = BigUint::default();
        let Some(free) = k.checked_sub(l) else { return total };
        for (ns, row) in self.counts.iter().enumerate() {
            // Non-stable blocks take distinct colours from {l+1, ..., k}.
            let Some(remaining) = k.checked_sub(ns) else { continue };
            let non_stable_ways = falling_factorial(free, ns);
            for (s, &count) in row.iter().enumerate() {
                if count == 0 {
                    continue;
                }
                total += &non_stable_ways * falling_factorial(remaining, s) * count;
            }
        }
        total
    }

    /// The sequence `P(G; k, l)` for `l = 0..=k`.
    pub fn b_sequence(&self, k: usize) -> Vec<BigUint> {
        (0..=k).map(|l| self.generalized_chromatic(k, l)).collect()
    }
}

/// `n (n-1) ... (n-k+1)`, zero when `k > n`.
pub fn falling_factorial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::default();
    }
    ((n - k + 1)..=n).fold(BigUint::from(1u32), |acc, i| acc * i)
}

/// Interior indices `i` with `b[i]² < b[i-1]·b[i+1]`.
pub fn log_concavity_violations(b: &[BigUint]) -> Vec<usize> {
    b.windows(3)
        .enumerate()
        .filter(|(_, w)| &w[1] * &w[1] < &w[0] * &w[2])
        .map(|(i, _)| i + 1)
        .collect()
}

/// A `(k, l)` where the b-sequence of a graph is not log-concave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub colours: usize,
    pub index: usize,
}

/// Check the b-sequence of `graph` for every `k` in `0..=n+1`.
pub fn check_graph(graph: &Graph) -> Result<Vec<Violation>, StableError> {
    let partitions = PartitionCounts::new(graph)?;
    let max_colours = graph.vertex_count() + 1;
    let mut violations = Vec::new();
    for k in 0..=max_colours {
        for index in log_concavity_violations(&partitions.b_sequence(k)) {
            violations.push(Violation { colours: k, index });
        }
    }
    Ok(violations)
}

/// Counts reported by [`check_lines`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConcavityStats {
    pub graphs: usize,
    pub violations: usize,
    pub skipped: usize,
}

/// Check every graph6 line of `input`, writing one line per violation.
///
/// Lines are numbered from 1. Malformed or oversized graphs are skipped
/// with a warning.
pub fn check_lines<R: BufRead, W: Write>(
    input: R,
    mut output: W,
) -> io::Result<LogConcavityStats> {
    let mut stats = LogConcavityStats::default();
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let number = i + 1;
        let violations = match g6::decode_strict(line)
            .map_err(|err| err.to_string())
            .and_then(|g| check_graph(&g).map_err(|err| err.to_string()))
        {
            Ok(v) => v,
            Err(err) => {
                warn!(line = number, %err, "skipping graph");
                stats.skipped += 1;
                continue;
            }
        };
        stats.graphs += 1;
        for v in &violations {
            writeln!(output, "line = {} -- k = {} -- i = {}", number, v.colours, v.index)?;
        }
        stats.violations += violations.len();
        if stats.graphs % PROGRESS_INTERVAL == 0 {
            info!(line = number, graphs = stats.graphs, "log-concavity progress");
        }
    }
    output.flush()?;
    Ok(stats)
}

fn check_size(vertices: usize) -> Result<(), StableError> {
    if vertices > MAX_PARTITION_VERTICES {
        return Err(StableError::TooManyVertices { vertices, max: MAX_PARTITION_VERTICES });
    }
    Ok(())
}

fn neighbour_masks(graph: &Graph) -> Vec<u64> {
    let n = graph.vertex_count();
    (0..n)
        .map(|v| (0..n).filter(|&w| graph.are_adjacent(v, w)).fold(0, |m, w| m | (1 << w)))
        .collect()
}

/// A block under construction: its vertex mask and whether it is stable.
#[derive(Clone, Copy)]
struct Block {
    members: u64,
    stable: bool,
}

/// Place vertex `v` into each existing block and into a new block, in turn.
fn extend_partitions(
    neighbours: &[u64],
    v: usize,
    blocks: &mut Vec<Block>,
    counts: &mut [Vec<u64>],
) {
    if v == neighbours.len() {
        let stable = blocks.iter().filter(|b| b.stable).count();
        counts[blocks.len() - stable][stable] += 1;
        return;
    }
    let bit = 1u64 << v;
    for i in 0..blocks.len() {
        let saved = blocks[i];
        blocks[i] = Block {
            members: saved.members | bit,
            stable: saved.stable && neighbours[v] & saved.members == 0,
        };
        extend_partitions(neighbours, v + 1, blocks, counts);
        blocks[i] = saved;
    }
    blocks.push(Block { members: bit, stable: true });
    extend_partitions(neighbours, v + 1, blocks, counts);
    blocks.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    /// Count the colourings directly.
    fn brute_force(graph: &Graph, k: usize, l: usize) -> u64 {
        let n = graph.vertex_count();
        let total = (k as u64).pow(n as u32);
        let mut count = 0;
        for code in 0..total {
            let mut rest = code;
            let colours: Vec<usize> = (0..n)
                .map(|_| {
                    let c = (rest % k as u64) as usize;
                    rest /= k as u64;
                    c
                })
                .collect();
            let ok = graph.edges().all(|(u, w)| colours[u] != colours[w] || colours[u] >= l);
            if ok {
                count += 1;
            }
        }
        count
    }

    #[test]
    fn test_stable_set_counts() {
        let triangle = g6::decode("Bw").unwrap();
        assert_eq!(stable_set_counts(&triangle).unwrap(), vec![1, 3, 0, 0]);
        // Path 1-0-2: {1, 2} is the only stable pair.
        let path = g6::decode("Bo").unwrap();
        assert_eq!(stable_set_counts(&path).unwrap(), vec![1, 3, 1, 0]);
        assert_eq!(stable_set_counts(&Graph::empty(0)).unwrap(), vec![1]);
    }

    #[test]
    fn test_partition_counts_of_single_edge() {
        let edge = g6::decode("A_").unwrap();
        let counts = PartitionCounts::new(&edge).unwrap();
        assert_eq!(counts.get(0, 2), 1);
        assert_eq!(counts.get(1, 0), 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_partition_total_is_bell_number() {
        let bell = [1, 1, 2, 5, 15, 52, 203];
        for (n, &expected) in bell.iter().enumerate() {
            let counts = PartitionCounts::new(&Graph::empty(n)).unwrap();
            assert_eq!(counts.total(), expected, "n = {}", n);
            // Every block of an edgeless graph is stable.
            assert_eq!(counts.get(1, 0), 0);
        }
    }

    #[test]
    fn test_b_sequence_of_single_edge() {
        let counts = PartitionCounts::new(&g6::decode("A_").unwrap()).unwrap();
        assert_eq!(counts.b_sequence(2), big(&[4, 3, 2]));
        assert_eq!(counts.b_sequence(0), big(&[0]));
    }

    #[test]
    fn test_endpoints_are_power_and_chromatic_polynomial() {
        let counts = PartitionCounts::new(&g6::decode("Bw").unwrap()).unwrap();
        for k in 0..5u64 {
            let b = counts.b_sequence(k as usize);
            assert_eq!(b[0], BigUint::from(k.pow(3)));
            // k(k-1)(k-2) for the triangle
            assert_eq!(b[k as usize], falling_factorial(k as usize, 3));
        }
    }

    #[test]
    fn test_matches_direct_count() {
        for text in ["Bw", "Bo", "Co", "C~", "D?_", "DQc"] {
            let graph = g6::decode(text).unwrap();
            let counts = PartitionCounts::new(&graph).unwrap();
            for k in 1..=graph.vertex_count() {
                for l in 0..=k {
                    assert_eq!(
                        counts.generalized_chromatic(k, l),
                        BigUint::from(brute_force(&graph, k, l)),
                        "{} k = {} l = {}",
                        text,
                        k,
                        l
                    );
                }
            }
        }
    }

    #[test]
    fn test_falling_factorial() {
        assert_eq!(falling_factorial(5, 0), BigUint::from(1u32));
        assert_eq!(falling_factorial(5, 2), BigUint::from(20u32));
        assert_eq!(falling_factorial(2, 3), BigUint::default());
        assert_eq!(falling_factorial(25, 25).to_string(), "15511210043330985984000000");
    }

    #[test]
    fn test_log_concavity_violations() {
        assert!(log_concavity_violations(&big(&[1, 2, 4])).is_empty());
        assert_eq!(log_concavity_violations(&big(&[1, 1, 4, 4])), vec![1]);
        assert!(log_concavity_violations(&big(&[3])).is_empty());
    }

    #[test]
    fn test_small_graphs_are_log_concave() {
        for text in ["@", "A_", "Bw", "Co", "C~", "D?_"] {
            assert!(check_graph(&g6::decode(text).unwrap()).unwrap().is_empty(), "{}", text);
        }
    }

    #[test]
    fn test_too_many_vertices() {
        let err = PartitionCounts::new(&Graph::empty(13)).unwrap_err();
        assert_eq!(err, StableError::TooManyVertices { vertices: 13, max: 12 });
    }

    #[test]
    fn test_check_lines_skips_bad_graphs() {
        let mut out = Vec::new();
        let stats = check_lines("Bw\n\nB\nCo\n".as_bytes(), &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(stats, LogConcavityStats { graphs: 2, violations: 0, skipped: 1 });
    }
}
