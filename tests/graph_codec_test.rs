// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for graph6 decoding and the line filters.

use lattice_flows::graph::g6::{self, complement_lines, filter_connected};
use lattice_flows::graph::{G6Error, Graph};

#[test]
fn test_single_vertex() {
    let g = g6::decode("@").unwrap();
    assert_eq!(g.vertex_count(), 1);
    assert_eq!(g.edge_count(), 0);
    assert!(g.is_connected());
}

#[test]
fn test_edgeless_strings_have_no_adjacency() {
    for text in ["A?", "B?", "C?", "D??", "E???"] {
        let g = g6::decode_strict(text).unwrap();
        assert!(g.adjacency().iter().all(|&bit| !bit), "{}", text);
        for u in 0..g.vertex_count() {
            for w in 0..g.vertex_count() {
                assert!(!g.are_adjacent(u, w));
            }
        }
    }
}

#[test]
fn test_adjacency_is_symmetric() {
    let g = g6::decode("D?_").unwrap();
    assert!(g.are_adjacent(0, 4));
    assert!(g.are_adjacent(4, 0));
    assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 4)]);
    assert!(!g.is_connected());
}

#[test]
fn test_strict_and_lenient_disagree_on_length() {
    assert_eq!(g6::decode("D?").unwrap(), Graph::empty(5));
    assert_eq!(
        g6::decode_strict("D?"),
        Err(G6Error::EndedPrematurely { bits: 6, expected: 10 })
    );
    assert_eq!(g6::decode("Bw?").unwrap(), g6::decode("Bw").unwrap());
    assert_eq!(g6::decode_strict("Bw?"), Err(G6Error::TooLong { extra: 1 }));
}

#[test]
fn test_rejects_bad_input() {
    assert_eq!(g6::decode(""), Err(G6Error::Empty));
    assert_eq!(
        g6::decode("B w"),
        Err(G6Error::InvalidCharacter { ch: ' ', position: 1 })
    );
    assert!(matches!(
        g6::decode("\u{7f}"),
        Err(G6Error::InvalidCharacter { position: 0, .. })
    ));
}

#[test]
fn test_encode_matches_decode() {
    for text in ["?", "@", "Bw", "Co", "D?_", "D~[", "E~~w"] {
        let g = g6::decode_strict(text).unwrap();
        assert_eq!(g6::encode(&g).unwrap(), text);
    }
}

#[test]
fn test_connected_filter() {
    let input = "Bw\nD?_\n\n@\nzz\nBw~\n";
    let mut out = Vec::new();
    let stats = filter_connected(input.as_bytes(), &mut out, 20).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Bw\n@\n");
    assert_eq!(stats.read, 5);
    assert_eq!(stats.written, 2);
    assert_eq!(stats.skipped, 2);
}

#[test]
fn test_connected_filter_respects_vertex_limit() {
    let mut out = Vec::new();
    let stats = filter_connected("Bw\nE~~w\n".as_bytes(), &mut out, 4).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Bw\n");
    assert_eq!(stats.skipped, 1);
}

#[test]
fn test_complement_filter() {
    let mut out = Vec::new();
    let stats = complement_lines("Bw\nD?_\n".as_bytes(), &mut out, 20).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "B?\nD~[\n");
    assert_eq!(stats.written, 2);
}

#[test]
fn test_complement_twice_is_identity() {
    let g = g6::decode("E~~w").unwrap();
    assert_eq!(g.complement().complement(), g);
    assert_eq!(g.complement().edge_count() + g.edge_count(), 15);
}
