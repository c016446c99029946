// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The drawing capability a renderer needs.
//!
//! A surface is a fixed-size canvas that can draw a few primitives, hand
//! back a handle for each, and later remove them again. Implementations
//! decide what "display" and "click" mean: an interactive window blocks in
//! [`DrawingSurface::wait_for_click`], a file-backed surface returns at once.

use std::fmt;

/// Handle to a primitive drawn on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(pub u64);

impl fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Canvas coordinates; `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub trait DrawingSurface {
    type Error: std::error::Error + Send + Sync + 'static;

    /// A filled circle.
    fn draw_circle(
        &mut self,
        center: Point,
        radius: f64,
        fill: &str,
    ) -> Result<PrimitiveId, Self::Error>;

    fn draw_line(&mut self, from: Point, to: Point) -> Result<PrimitiveId, Self::Error>;

    /// Text centred on `anchor`.
    fn draw_text(
        &mut self,
        anchor: Point,
        text: &str,
        font_size: u32,
    ) -> Result<PrimitiveId, Self::Error>;

    /// Flush pending drawing to the display.
    fn update(&mut self) -> Result<(), Self::Error>;

    /// Block until the user clicks the canvas.
    fn wait_for_click(&mut self) -> Result<(), Self::Error>;

    /// Remove a primitive previously drawn on this surface.
    fn remove(&mut self, id: PrimitiveId) -> Result<(), Self::Error>;

    fn close(self) -> Result<(), Self::Error>
    where
        Self: Sized;
}
