// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A drawing surface backed by an SVG file.
//!
//! Every [`update`](DrawingSurface::update) rewrites the target file with
//! the primitives currently on the canvas. There is nobody to click, so
//! [`wait_for_click`](DrawingSurface::wait_for_click) returns immediately.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::surface::{DrawingSurface, Point, PrimitiveId};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no primitive {0} on this surface")]
    UnknownPrimitive(PrimitiveId),
}

#[derive(Debug, Clone, PartialEq)]
enum Primitive {
    Circle { center: Point, radius: f64, fill: String },
    Line { from: Point, to: Point },
    Text { anchor: Point, text: String, font_size: u32 },
}

impl fmt::Display for Primitive {
    /// One SVG element, without the trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Circle { center, radius, fill } => write!(
                f,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="black"/>"#,
                center.x,
                center.y,
                radius,
                escape(fill)
            ),
            Primitive::Line { from, to } => write!(
                f,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black"/>"#,
                from.x, from.y, to.x, to.y
            ),
            Primitive::Text { anchor, text, font_size } => write!(
                f,
                concat!(
                    r#"<text x="{:.2}" y="{:.2}" font-size="{}" "#,
                    r#"text-anchor="middle" dominant-baseline="middle">{}</text>"#
                ),
                anchor.x,
                anchor.y,
                font_size,
                escape(text)
            ),
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Fixed-size canvas rendered to an SVG file.
#[derive(Debug)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    target: PathBuf,
    primitives: BTreeMap<PrimitiveId, Primitive>,
    next_id: u64,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32, target: impl Into<PathBuf>) -> Self {
        Self {
            width,
            height,
            target: target.into(),
            primitives: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// File written by the next update.
    pub fn set_target(&mut self, target: impl Into<PathBuf>) {
        self.target = target.into();
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Number of primitives currently on the canvas.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// The SVG document for the current canvas.
    pub fn render_document(&self) -> String {
        self.to_string()
    }

    fn add(&mut self, primitive: Primitive) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        self.primitives.insert(id, primitive);
        id
    }
}

impl fmt::Display for SvgSurface {
    /// The whole SVG document for the current canvas.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
            ),
            w = self.width,
            h = self.height
        )?;
        writeln!(f, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;
        for primitive in self.primitives.values() {
            writeln!(f, "  {}", primitive)?;
        }
        writeln!(f, "</svg>")
    }
}

impl DrawingSurface for SvgSurface {
    type Error = RenderError;

    fn draw_circle(
        &mut self,
        center: Point,
        radius: f64,
        fill: &str,
    ) -> Result<PrimitiveId, RenderError> {
        Ok(self.add(Primitive::Circle { center, radius, fill: fill.to_string() }))
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<PrimitiveId, RenderError> {
        Ok(self.add(Primitive::Line { from, to }))
    }

    fn draw_text(
        &mut self,
        anchor: Point,
        text: &str,
        font_size: u32,
    ) -> Result<PrimitiveId, RenderError> {
        Ok(self.add(Primitive::Text { anchor, text: text.to_string(), font_size }))
    }

    fn update(&mut self) -> Result<(), RenderError> {
        fs::write(&self.target, self.render_document())
            .map_err(|source| RenderError::Io { path: self.target.clone(), source })?;
        debug!(path = %self.target.display(), primitives = self.primitives.len(), "wrote svg");
        Ok(())
    }

    fn wait_for_click(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn remove(&mut self, id: PrimitiveId) -> Result<(), RenderError> {
        self.primitives.remove(&id).map(|_| ()).ok_or(RenderError::UnknownPrimitive(id))
    }

    fn close(self) -> Result<(), RenderError> {
        debug!(path = %self.target.display(), "closed svg surface");
        Ok(())
    }
}
