//! The mask-painting engine.
//!
//! Owns the live raster, the snapshot stack and the zoom state, and wires
//! pointer samples through coordinate mapping, stroke rendering and
//! snapshotting. All operations are synchronous and run on the caller's
//! event loop; the engine is `&mut self` throughout and needs no locking.

use crate::brush::BrushConfig;
use crate::cursor::CursorState;
use crate::history::History;
use crate::mask;
use crate::stroke::{self, StrokeState};
use crate::surface::Surface;
use crate::zoom::Zoom;
use kurbo::Point;
use thiserror::Error;

/// Engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A raster-touching operation ran before `mount_surface`.
    #[error("drawing surface is not mounted")]
    SurfaceNotMounted,
    /// Mask extraction was asked for a zero-sized raster.
    #[error("invalid mask dimensions: {width}x{height}")]
    InvalidMaskSize { width: u32, height: u32 },
    /// PNG encoding failed.
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Interactive mask-drawing engine.
///
/// Lifecycle: create with a brush, [`mount_surface`](Self::mount_surface)
/// once the canvas exists, then feed pointer events. `pointer_down` and
/// `pointer_up` only flip stroke state and are infallible; every operation
/// that touches the raster fails with [`EngineError::SurfaceNotMounted`]
/// until a surface is mounted. Pointer-up must be routed to the engine even
/// when the release happens outside the canvas, otherwise the stroke never
/// finalizes.
#[derive(Debug)]
pub struct MaskEngine {
    brush: BrushConfig,
    surface: Option<Surface>,
    zoom: Zoom,
    history: History,
    stroke: StrokeState,
    cursor: CursorState,
}

impl MaskEngine {
    /// Create an engine with no mounted surface.
    pub fn new(brush: BrushConfig) -> Self {
        Self {
            brush,
            surface: None,
            zoom: Zoom::new(),
            history: History::new(),
            stroke: StrokeState::Idle,
            cursor: CursorState::default(),
        }
    }

    /// Mount the drawing surface: a transparent raster of the given pixel
    /// dimensions placed at `origin` in screen coordinates.
    ///
    /// Remounting replaces the surface and resets zoom, history, stroke and
    /// cursor state.
    pub fn mount_surface(&mut self, origin: Point, width: u32, height: u32) {
        log::debug!("mounting {width}x{height} surface at {origin:?}");
        self.surface = Some(Surface::new(origin, width, height));
        self.zoom.reset();
        self.history.clear();
        self.stroke = StrokeState::Idle;
        self.cursor = CursorState::default();
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    /// Current zoom factor.
    pub fn zoom_factor(&self) -> f64 {
        self.zoom.factor()
    }

    /// Read-only cursor state for the brush-preview overlay.
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    /// Number of undoable strokes.
    pub fn stroke_count(&self) -> usize {
        self.history.len()
    }

    /// Begin a stroke. No raster mutation happens yet; the snapshot is
    /// taken at the first move sample.
    pub fn pointer_down(&mut self) {
        if !self.stroke.is_drawing() {
            self.stroke.begin();
        }
    }

    /// Finish the current stroke, if any. Safe to call for releases that
    /// happen outside the canvas bounds.
    pub fn pointer_up(&mut self) {
        self.stroke.end();
    }

    /// Process one pointer-move sample.
    ///
    /// Always updates the cursor tracker. While a stroke is active, maps
    /// the raw position into canvas space, pushes the pre-stroke snapshot
    /// on the first sample, and paints one brush segment.
    pub fn pointer_move(&mut self, raw: Point) -> EngineResult<()> {
        let surface = self.surface.as_mut().ok_or(EngineError::SurfaceNotMounted)?;

        self.cursor.update(raw, surface, self.brush.radius);

        if let StrokeState::Drawing { prev } = &mut self.stroke {
            let point = self.zoom.to_canvas_space(raw, surface.origin());
            if prev.is_none() {
                // Snapshot strictly before the stroke's first pixel, so
                // undo restores the pre-stroke state.
                self.history.push(surface.raster());
            }
            let start = prev.unwrap_or(point);
            stroke::draw_segment(
                surface.raster_mut(),
                start,
                point,
                &self.brush,
                self.zoom.factor(),
            );
            *prev = Some(point);
        }
        Ok(())
    }

    /// Undo the most recent stroke. Returns whether a stroke was undone;
    /// an empty stack is a no-op, not an error.
    pub fn undo(&mut self) -> EngineResult<bool> {
        let surface = self.surface.as_mut().ok_or(EngineError::SurfaceNotMounted)?;
        let undone = self.history.undo_into(surface.raster_mut());
        if undone {
            log::debug!("undo, {} snapshot(s) remaining", self.history.len());
        }
        Ok(undone)
    }

    /// Erase the raster, drop all snapshots and reset the zoom factor to 1.
    ///
    /// Also finalizes any stroke in progress: a clear issued mid-stroke
    /// must not let later move samples paint a continuation that was never
    /// snapshotted and so could never be undone.
    pub fn clear(&mut self) -> EngineResult<()> {
        let surface = self.surface.as_mut().ok_or(EngineError::SurfaceNotMounted)?;
        surface.clear_pixels();
        self.history.clear();
        self.zoom.reset();
        self.stroke = StrokeState::Idle;
        log::debug!("canvas cleared");
        Ok(())
    }

    /// Multiply the zoom factor by one step. Affects future strokes and
    /// coordinate mapping only; drawn pixels stay as they are.
    pub fn zoom_in(&mut self) -> EngineResult<f64> {
        if self.surface.is_none() {
            return Err(EngineError::SurfaceNotMounted);
        }
        self.zoom.zoom_in();
        Ok(self.zoom.factor())
    }

    /// Divide the zoom factor by one step.
    pub fn zoom_out(&mut self) -> EngineResult<f64> {
        if self.surface.is_none() {
            return Err(EngineError::SurfaceNotMounted);
        }
        self.zoom.zoom_out();
        Ok(self.zoom.factor())
    }

    /// Extract the binary mask as PNG bytes at the given target dimensions,
    /// typically the masked image's native resolution.
    ///
    /// Idempotent and side-effect free: the raster, snapshot stack and zoom
    /// state are left untouched.
    pub fn mask_png(&self, width: u32, height: u32) -> EngineResult<Vec<u8>> {
        let surface = self.surface.as_ref().ok_or(EngineError::SurfaceNotMounted)?;
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidMaskSize { width, height });
        }
        log::debug!(
            "extracting {width}x{height} mask from {}x{} raster",
            surface.width(),
            surface.height()
        );
        Ok(mask::extract(surface.raster(), width, height)?)
    }
}
