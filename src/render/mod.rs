// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Drawing graphs.
//!
//! - surface: the drawing capability (canvas, primitives, click, removal)
//! - layout: places a graph on a surface and tears it down again
//! - svg: a surface that renders to SVG files

pub mod layout;
pub mod surface;
pub mod svg;

pub use layout::{draw_graph, vertex_positions};
pub use surface::{DrawingSurface, Point, PrimitiveId};
pub use svg::{RenderError, SvgSurface};
