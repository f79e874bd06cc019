//! Trace replay: drive the mask engine from a recorded pointer trace.
//!
//! A trace is a JSON file describing the canvas, the brush, an ordered list
//! of input events, and the mask target dimensions. Replaying it produces
//! the same PNG mask bytes an interactive session would have.

use inkmask_core::{BrushConfig, EngineError, MaskEngine};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid trace: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// On-screen canvas description.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    /// Canvas top-left corner in raw pointer coordinates. Defaults to the
    /// screen origin.
    #[serde(default)]
    pub origin: Option<[f64; 2]>,
}

/// Mask target dimensions, normally the masked image's native resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaskSpec {
    pub width: u32,
    pub height: u32,
}

/// One recorded input event. Pointer coordinates are raw screen positions,
/// exactly as a window event loop would report them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    PointerDown,
    PointerMove { x: f64, y: f64 },
    PointerUp,
    Undo,
    Clear,
    ZoomIn,
    ZoomOut,
}

/// A complete recorded session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    pub canvas: CanvasSpec,
    pub brush_radius: f64,
    #[serde(default)]
    pub events: Vec<TraceEvent>,
    pub mask: MaskSpec,
}

impl Trace {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Replay a trace and return the resulting mask PNG bytes.
pub fn replay(trace: &Trace) -> Result<Vec<u8>, ReplayError> {
    let mut engine = MaskEngine::new(BrushConfig::new(trace.brush_radius));
    let origin = trace
        .canvas
        .origin
        .map(|[x, y]| Point::new(x, y))
        .unwrap_or(Point::ZERO);
    engine.mount_surface(origin, trace.canvas.width, trace.canvas.height);

    for event in &trace.events {
        match *event {
            TraceEvent::PointerDown => engine.pointer_down(),
            TraceEvent::PointerMove { x, y } => engine.pointer_move(Point::new(x, y))?,
            TraceEvent::PointerUp => engine.pointer_up(),
            TraceEvent::Undo => {
                engine.undo()?;
            }
            TraceEvent::Clear => engine.clear()?,
            TraceEvent::ZoomIn => {
                engine.zoom_in()?;
            }
            TraceEvent::ZoomOut => {
                engine.zoom_out()?;
            }
        }
    }
    log::info!(
        "replayed {} event(s), {} stroke(s) on the canvas",
        trace.events.len(),
        engine.stroke_count()
    );

    Ok(engine.mask_png(trace.mask.width, trace.mask.height)?)
}

/// Load a trace from disk, replay it, and write the mask PNG to `output`.
pub fn replay_file(trace_path: &Path, output: &Path) -> Result<(), ReplayError> {
    let json = std::fs::read_to_string(trace_path)?;
    let trace = Trace::from_json(&json)?;
    let mask = replay(&trace)?;
    std::fs::write(output, &mask)?;
    log::info!(
        "wrote {}x{} mask ({} bytes) to {}",
        trace.mask.width,
        trace.mask.height,
        mask.len(),
        output.display()
    );
    Ok(())
}
