// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use lattice_flows::algebra::{Eisen, EisenFlow};
use lattice_flows::render::{DrawingSurface, Point, PrimitiveId};
use thiserror::Error;

/// Build a flow from `(re, z6)` pairs.
pub fn flow(values: &[(i64, i64)]) -> EisenFlow {
    EisenFlow::from_values(values.iter().map(|&(a, b)| Eisen::new(a, b)).collect())
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Circle(PrimitiveId),
    Line(PrimitiveId, Point, Point),
    Text(PrimitiveId, String, u32),
    Update,
    Click,
    Remove(PrimitiveId),
}

#[derive(Debug, Error)]
#[error("injected surface failure: {0}")]
pub struct SurfaceFailure(pub &'static str);

/// A surface that records every call, optionally failing on request.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<Event>,
    live: BTreeSet<PrimitiveId>,
    next_id: u64,
    /// Fail the n-th draw call (0-based).
    pub fail_on_draw: Option<usize>,
    pub fail_click: bool,
    draws: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives drawn and not yet removed.
    pub fn live(&self) -> usize {
        self.live.len()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    fn next(&mut self) -> Result<PrimitiveId, SurfaceFailure> {
        let n = self.draws;
        self.draws += 1;
        if self.fail_on_draw == Some(n) {
            return Err(SurfaceFailure("draw"));
        }
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        self.live.insert(id);
        Ok(id)
    }
}

impl DrawingSurface for RecordingSurface {
    type Error = SurfaceFailure;

    fn draw_circle(
        &mut self,
        _center: Point,
        _radius: f64,
        _fill: &str,
    ) -> Result<PrimitiveId, SurfaceFailure> {
        let id = self.next()?;
        self.events.push(Event::Circle(id));
        Ok(id)
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<PrimitiveId, SurfaceFailure> {
        let id = self.next()?;
        self.events.push(Event::Line(id, from, to));
        Ok(id)
    }

    fn draw_text(
        &mut self,
        _anchor: Point,
        text: &str,
        font_size: u32,
    ) -> Result<PrimitiveId, SurfaceFailure> {
        let id = self.next()?;
        self.events.push(Event::Text(id, text.to_string(), font_size));
        Ok(id)
    }

    fn update(&mut self) -> Result<(), SurfaceFailure> {
        self.events.push(Event::Update);
        Ok(())
    }

    fn wait_for_click(&mut self) -> Result<(), SurfaceFailure> {
        self.events.push(Event::Click);
        if self.fail_click {
            return Err(SurfaceFailure("click"));
        }
        Ok(())
    }

    fn remove(&mut self, id: PrimitiveId) -> Result<(), SurfaceFailure> {
        if !self.live.remove(&id) {
            return Err(SurfaceFailure("remove"));
        }
        self.events.push(Event::Remove(id));
        Ok(())
    }

    fn close(self) -> Result<(), SurfaceFailure> {
        Ok(())
    }
}
