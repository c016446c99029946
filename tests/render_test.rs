// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for drawing graphs on a surface.
//!
//! The recording surface checks the call sequence and that every
//! primitive is removed again, on success and on failure.

mod common;

use std::fs;

use common::{Event, RecordingSurface};
use lattice_flows::config::RenderConfig;
use lattice_flows::graph::g6;
use lattice_flows::render::{draw_graph, vertex_positions, DrawingSurface, PrimitiveId, SvgSurface};

#[test]
fn test_draw_sequence_for_triangle() {
    let config = RenderConfig::default();
    let graph = g6::decode("Bw").unwrap();
    let mut surface = RecordingSurface::new();
    draw_graph(&mut surface, &graph, "Bw", &config).unwrap();

    let positions = vertex_positions(3, &config);
    let expected_draws = vec![
        Event::Circle(PrimitiveId(0)),
        Event::Text(PrimitiveId(1), "1".to_string(), config.label_font_size),
        Event::Circle(PrimitiveId(2)),
        Event::Text(PrimitiveId(3), "2".to_string(), config.label_font_size),
        Event::Circle(PrimitiveId(4)),
        Event::Text(PrimitiveId(5), "3".to_string(), config.label_font_size),
        Event::Line(PrimitiveId(6), positions[0].0, positions[1].0),
        Event::Line(PrimitiveId(7), positions[0].0, positions[2].0),
        Event::Line(PrimitiveId(8), positions[1].0, positions[2].0),
        Event::Text(PrimitiveId(9), "Bw".to_string(), config.title_font_size),
        Event::Update,
        Event::Click,
    ];
    assert_eq!(&surface.events[..12], &expected_draws[..]);

    let removed: Vec<_> = surface.events[12..].to_vec();
    let in_order: Vec<_> = (0..10).map(|i| Event::Remove(PrimitiveId(i))).collect();
    assert_eq!(removed, in_order);
    assert_eq!(surface.live(), 0);
}

#[test]
fn test_surface_reusable_across_graphs() {
    let config = RenderConfig::default();
    let mut surface = RecordingSurface::new();
    for text in ["@", "Co", "E~~w"] {
        draw_graph(&mut surface, &g6::decode(text).unwrap(), text, &config).unwrap();
        assert_eq!(surface.live(), 0);
    }
    assert_eq!(surface.count(|e| matches!(e, Event::Click)), 3);
    // K6 contributes 15 lines, the path on 4 vertices 2.
    assert_eq!(surface.count(|e| matches!(e, Event::Line(..))), 17);
}

#[test]
fn test_teardown_after_draw_failure() {
    let config = RenderConfig::default();
    let mut surface = RecordingSurface::new();
    surface.fail_on_draw = Some(4);
    let result = draw_graph(&mut surface, &g6::decode("Bw").unwrap(), "Bw", &config);
    assert!(result.is_err());
    assert_eq!(surface.live(), 0);
    assert_eq!(surface.count(|e| matches!(e, Event::Update)), 0);
    assert_eq!(surface.count(|e| matches!(e, Event::Remove(_))), 4);
}

#[test]
fn test_teardown_after_click_failure() {
    let config = RenderConfig::default();
    let mut surface = RecordingSurface::new();
    surface.fail_click = true;
    let result = draw_graph(&mut surface, &g6::decode("Bw").unwrap(), "Bw", &config);
    assert!(result.is_err());
    assert_eq!(surface.live(), 0);
    assert_eq!(surface.count(|e| matches!(e, Event::Remove(_))), 10);
}

#[test]
fn test_svg_file_written() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig::default();
    let target = dir.path().join("graph_00000.svg");
    let mut surface = SvgSurface::new(config.width, config.height, &target);
    draw_graph(&mut surface, &g6::decode("Bw").unwrap(), "Bw", &config).unwrap();
    assert!(surface.is_empty());
    surface.close().unwrap();

    let svg = fs::read_to_string(&target).unwrap();
    assert!(svg.contains(r#"width="300" height="400""#));
    assert_eq!(svg.matches("<circle").count(), 3);
    assert_eq!(svg.matches("<line").count(), 3);
    assert!(svg.contains(">Bw</text>"));
}

#[test]
fn test_svg_write_error_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig::default();
    let mut surface = SvgSurface::new(10, 10, dir.path().join("missing").join("graph.svg"));
    let result = draw_graph(&mut surface, &g6::decode("@").unwrap(), "@", &config);
    assert!(result.is_err());
    assert!(surface.is_empty());
}
