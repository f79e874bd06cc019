//! Brush-preview cursor tracking.
//!
//! Runs on every pointer move, independent of draw state, and is purely
//! informational: it never touches the raster. The collaborator uses it to
//! render a circular brush preview over the canvas.

use crate::surface::Surface;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Read-only cursor state exposed for overlay rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorState {
    /// Pointer position translated to canvas-local coordinates. Not
    /// zoom-adjusted; the overlay lives in screen space. Holds the last
    /// visible position while the cursor is hidden.
    pub position: Point,
    /// Whether the brush preview should be shown.
    pub visible: bool,
}

impl CursorState {
    /// Update from a raw pointer position.
    ///
    /// The preview is visible iff the pointer lies strictly inside the
    /// canvas bounds inset by the brush radius on all four sides; a pointer
    /// exactly `radius` pixels from an edge counts as outside.
    pub fn update(&mut self, raw: Point, surface: &Surface, brush_radius: f64) {
        let origin = surface.origin();
        let width = surface.width() as f64;
        let height = surface.height() as f64;

        let inside = raw.x > origin.x + brush_radius
            && raw.x < origin.x + width - brush_radius
            && raw.y > origin.y + brush_radius
            && raw.y < origin.y + height - brush_radius;

        if !inside {
            self.visible = false;
            return;
        }
        self.visible = true;
        self.position = Point::new(raw.x - origin.x, raw.y - origin.y);
    }
}
