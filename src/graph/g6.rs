// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The graph6 text encoding (short form, up to 62 vertices).
//!
//! The first character encodes the vertex count `n` as `n + 63`. Every
//! following character carries six bits of the upper-triangular adjacency
//! matrix (`value - 63`, most significant bit first), column by column.
//! The last character is padded with zero bits.
//!
//! Two decoders are provided:
//! - [`decode`] pads a short matrix with `false` and ignores surplus
//!   characters, which is what drawing wants;
//! - [`decode_strict`] rejects strings of the wrong length, which is what
//!   the line filters want.
//!
//! # Examples
//!
//! ```
//! use lattice_flows::graph::g6;
//!
//! let g = g6::decode("Bw").unwrap(); // the triangle
//! assert_eq!(g.vertex_count(), 3);
//! assert_eq!(g.edge_count(), 3);
//! assert_eq!(g6::encode(&g.complement()).unwrap(), "B?");
//! ```

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::warn;

use super::adjacency::{pair_count, Graph};

/// Offset added to every 6-bit value.
pub const G6_START_CHAR: u32 = 63;

/// Largest vertex count the short form can express.
pub const MAX_SHORT_VERTICES: usize = 62;

const BITS_PER_CHAR: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum G6Error {
    #[error("empty graph6 string")]
    Empty,

    #[error("invalid graph6 character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("graph6 string declares {vertices} vertices (at most {max} supported)")]
    UnsupportedVertexCount { vertices: usize, max: usize },

    #[error("graph6 string too long: {extra} characters after the adjacency matrix")]
    TooLong { extra: usize },

    #[error("graph6 string ended prematurely: {bits} of {expected} adjacency bits")]
    EndedPrematurely { bits: usize, expected: usize },
}

fn sextet(ch: char, position: usize) -> Result<u32, G6Error> {
    let code = ch as u32;
    if (G6_START_CHAR..G6_START_CHAR + 64).contains(&code) {
        Ok(code - G6_START_CHAR)
    } else {
        Err(G6Error::InvalidCharacter { ch, position })
    }
}

/// Vertex count and matrix bits, plus how many body characters were unused.
fn parse(line: &str) -> Result<(usize, Vec<bool>, usize), G6Error> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut chars = line.chars();
    let first = chars.next().ok_or(G6Error::Empty)?;
    let vertices = sextet(first, 0)? as usize;
    if vertices > MAX_SHORT_VERTICES {
        return Err(G6Error::UnsupportedVertexCount { vertices, max: MAX_SHORT_VERTICES });
    }

    let expected = pair_count(vertices);
    let mut bits = Vec::with_capacity(expected);
    let mut extra = 0;
    for (i, ch) in chars.enumerate() {
        if bits.len() >= expected {
            extra += 1;
            continue;
        }
        let value = sextet(ch, i + 1)?;
        for shift in (0..BITS_PER_CHAR).rev() {
            if bits.len() == expected {
                break;
            }
            bits.push((value >> shift) & 1 == 1);
        }
    }
    Ok((vertices, bits, extra))
}

/// Decode one graph6 line, padding or truncating the matrix to size.
pub fn decode(line: &str) -> Result<Graph, G6Error> {
    let (vertices, bits, _) = parse(line)?;
    Ok(Graph::from_bits(vertices, bits))
}

/// Decode one graph6 line that must carry exactly the matrix bits.
pub fn decode_strict(line: &str) -> Result<Graph, G6Error> {
    let (vertices, bits, extra) = parse(line)?;
    let expected = pair_count(vertices);
    if extra > 0 {
        return Err(G6Error::TooLong { extra });
    }
    if bits.len() < expected {
        return Err(G6Error::EndedPrematurely { bits: bits.len(), expected });
    }
    Ok(Graph::from_bits(vertices, bits))
}

/// Encode a graph in the short graph6 form.
pub fn encode(graph: &Graph) -> Result<String, G6Error> {
    let vertices = graph.vertex_count();
    if vertices > MAX_SHORT_VERTICES {
        return Err(G6Error::UnsupportedVertexCount { vertices, max: MAX_SHORT_VERTICES });
    }
    let mut out = String::with_capacity(1 + graph.adjacency().len().div_ceil(BITS_PER_CHAR));
    out.push(to_char(vertices as u32));
    for chunk in graph.adjacency().chunks(BITS_PER_CHAR) {
        let value = chunk
            .iter()
            .chain(std::iter::repeat(&false))
            .take(BITS_PER_CHAR)
            .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit));
        out.push(to_char(value));
    }
    Ok(out)
}

fn to_char(value: u32) -> char {
    // value < 64, so the result is printable ASCII.
    char::from_u32(value + G6_START_CHAR).unwrap_or('?')
}

/// Counts reported by the line filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Non-empty lines read.
    pub read: usize,
    /// Lines written to the output.
    pub written: usize,
    /// Lines skipped as malformed or too large.
    pub skipped: usize,
}

fn filter_lines<R, W, F>(
    input: R,
    mut output: W,
    max_vertices: usize,
    filter: &str,
    mut emit: F,
) -> io::Result<FilterStats>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str, &Graph) -> Option<String>,
{
    let mut stats = FilterStats::default();
    for line in input.lines() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        stats.read += 1;
        let graph = match decode_strict(line) {
            Ok(g) if g.vertex_count() > max_vertices => {
                warn!(filter, line, vertices = g.vertex_count(), max_vertices, "graph too large");
                stats.skipped += 1;
                continue;
            }
            Ok(g) => g,
            Err(err) => {
                warn!(filter, line, %err, "skipping malformed graph6 line");
                stats.skipped += 1;
                continue;
            }
        };
        if let Some(text) = emit(line, &graph) {
            writeln!(output, "{}", text)?;
            stats.written += 1;
        }
    }
    output.flush()?;
    Ok(stats)
}

/// Copy the connected graphs from `input` to `output`, one graph6 per line.
pub fn filter_connected<R: BufRead, W: Write>(
    input: R,
    output: W,
    max_vertices: usize,
) -> io::Result<FilterStats> {
    filter_lines(input, output, max_vertices, "connected", |line, graph| {
        graph.is_connected().then(|| line.to_string())
    })
}

/// Write the complement of every graph in `input` to `output`.
pub fn complement_lines<R: BufRead, W: Write>(
    input: R,
    output: W,
    max_vertices: usize,
) -> io::Result<FilterStats> {
    filter_lines(input, output, max_vertices, "complement", |_, graph| {
        encode(&graph.complement()).ok()
    })
}
