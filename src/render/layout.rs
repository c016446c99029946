// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Drawing a graph on a surface.
//!
//! Vertices sit evenly on a circle, labelled `1..n` just outside it, with
//! straight edges between adjacent vertices and a title above. After the
//! user dismisses the drawing every primitive is removed again, so one
//! surface can show many graphs in turn.

use std::collections::VecDeque;
use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::graph::Graph;

use super::surface::{DrawingSurface, Point, PrimitiveId};

/// Position of each vertex and of its label.
///
/// Vertex `i` sits at angle `2π(i + ½)/n`, measured from the negative `x`
/// axis.
pub fn vertex_positions(vertex_count: usize, config: &RenderConfig) -> Vec<(Point, Point)> {
    let center = Point::new(f64::from(config.width) / 2.0, config.center_y);
    (0..vertex_count)
        .map(|i| {
            let angle = 2.0 * PI * (i as f64 + 0.5) / vertex_count as f64;
            let (dx, dy) = (-angle.cos(), -angle.sin());
            let vertex = Point::new(
                center.x + config.vertex_radius * dx,
                center.y + config.vertex_radius * dy,
            );
            let label_radius = config.vertex_radius + config.label_spacing;
            let label = Point::new(center.x + label_radius * dx, center.y + label_radius * dy);
            (vertex, label)
        })
        .collect()
}

/// Everything drawn for one graph. Dropping the scene removes whatever is
/// still on the surface.
struct Scene<'a, S: DrawingSurface> {
    surface: &'a mut S,
    drawn: VecDeque<PrimitiveId>,
}

impl<'a, S: DrawingSurface> Scene<'a, S> {
    fn new(surface: &'a mut S) -> Self {
        Self { surface, drawn: VecDeque::new() }
    }

    fn keep(&mut self, id: PrimitiveId) {
        self.drawn.push_back(id);
    }

    /// Remove every primitive, in drawing order.
    fn clear(mut self) -> Result<(), S::Error> {
        while let Some(id) = self.drawn.pop_front() {
            if let Err(err) = self.surface.remove(id) {
                // Still owned by the scene, so Drop retries it.
                self.drawn.push_front(id);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<S: DrawingSurface> Drop for Scene<'_, S> {
    fn drop(&mut self) {
        while let Some(id) = self.drawn.pop_front() {
            if let Err(err) = self.surface.remove(id) {
                warn!(%id, %err, "could not remove primitive");
            }
        }
    }
}

/// Draw `graph`, wait for a click, then tear the drawing down.
///
/// The surface is left empty on every return path.
pub fn draw_graph<S: DrawingSurface>(
    surface: &mut S,
    graph: &Graph,
    title: &str,
    config: &RenderConfig,
) -> Result<(), S::Error> {
    let mut scene = Scene::new(surface);
    let positions = vertex_positions(graph.vertex_count(), config);

    for (i, (vertex, label)) in positions.iter().enumerate() {
        let id = scene.surface.draw_circle(*vertex, config.vertex_size, &config.vertex_colour)?;
        scene.keep(id);
        let id = scene.surface.draw_text(*label, &(i + 1).to_string(), config.label_font_size)?;
        scene.keep(id);
    }

    for (u, w) in graph.edges() {
        let id = scene.surface.draw_line(positions[u].0, positions[w].0)?;
        scene.keep(id);
    }

    let title_anchor = Point::new(f64::from(config.width) / 2.0, config.title_y);
    let id = scene.surface.draw_text(title_anchor, title, config.title_font_size)?;
    scene.keep(id);

    debug!(title, vertices = graph.vertex_count(), edges = graph.edge_count(), "graph drawn");
    scene.surface.update()?;
    scene.surface.wait_for_click()?;
    scene.clear()
}
