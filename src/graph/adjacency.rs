// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Simple undirected graphs stored as an upper-triangular bit matrix.
//!
//! Pair `(u, w)` with `u < w` lives at position `w·(w-1)/2 + u`, which is
//! the order graph6 writes the matrix in: column by column, top to bottom.

use std::collections::VecDeque;

/// A simple undirected graph on vertices `0..vertex_count`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<bool>,
}

/// Number of unordered pairs of `n` vertices.
pub const fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

impl Graph {
    /// The graph on `n` vertices with no edges.
    pub fn empty(vertex_count: usize) -> Self {
        Self { vertex_count, adjacency: vec![false; pair_count(vertex_count)] }
    }

    /// Build from a flattened upper-triangular matrix.
    ///
    /// Returns `None` unless `adjacency` has exactly one entry per pair.
    pub fn from_adjacency(vertex_count: usize, adjacency: Vec<bool>) -> Option<Self> {
        (adjacency.len() == pair_count(vertex_count)).then_some(Self { vertex_count, adjacency })
    }

    /// Build from a stream of matrix bits, padding with `false` or
    /// dropping surplus bits so exactly one bit per pair is kept.
    pub fn from_bits(vertex_count: usize, bits: impl IntoIterator<Item = bool>) -> Self {
        let expected = pair_count(vertex_count);
        let mut adjacency: Vec<bool> = bits.into_iter().take(expected).collect();
        adjacency.resize(expected, false);
        Self { vertex_count, adjacency }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The flattened upper-triangular matrix.
    pub fn adjacency(&self) -> &[bool] {
        &self.adjacency
    }

    /// Position of the unordered pair `{u, w}` in the flattened matrix.
    ///
    /// # Panics
    ///
    /// Panics if `u == w` or either vertex is out of range.
    pub fn pair_index(&self, u: usize, w: usize) -> usize {
        assert!(
            u < self.vertex_count && w < self.vertex_count,
            "Vertex out of range: ({}, {}) with {} vertices",
            u,
            w,
            self.vertex_count
        );
        assert_ne!(u, w, "No loops in a simple graph");
        let (u, w) = if u < w { (u, w) } else { (w, u) };
        w * (w - 1) / 2 + u
    }

    /// Whether `u` and `w` are joined by an edge. Argument order is irrelevant.
    pub fn are_adjacent(&self, u: usize, w: usize) -> bool {
        u != w && self.adjacency[self.pair_index(u, w)]
    }

    pub fn set_edge(&mut self, u: usize, w: usize, present: bool) {
        let index = self.pair_index(u, w);
        self.adjacency[index] = present;
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().filter(|&&b| b).count()
    }

    /// Edges `(u, w)` with `u < w`, in matrix order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..self.vertex_count)
            .flat_map(|w| (0..w).map(move |u| (u, w)))
            .filter(|&(u, w)| self.are_adjacent(u, w))
    }

    /// The graph with every pair flipped.
    pub fn complement(&self) -> Graph {
        Graph {
            vertex_count: self.vertex_count,
            adjacency: self.adjacency.iter().map(|b| !b).collect(),
        }
    }

    /// Whether every vertex is reachable from vertex 0.
    ///
    /// Graphs with fewer than two vertices are connected.
    pub fn is_connected(&self) -> bool {
        if self.vertex_count < 2 {
            return true;
        }
        let mut reached = vec![false; self.vertex_count];
        let mut queue = VecDeque::from([0]);
        reached[0] = true;
        while let Some(v) = queue.pop_front() {
            for w in 0..self.vertex_count {
                if !reached[w] && self.are_adjacent(v, w) {
                    reached[w] = true;
                    queue.push_back(w);
                }
            }
        }
        reached.into_iter().all(|r| r)
    }
}
