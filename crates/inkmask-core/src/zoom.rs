//! Zoom state and pointer-to-canvas coordinate mapping.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Multiplicative step applied by a single zoom-in or zoom-out.
pub const ZOOM_STEP: f64 = 1.1;

/// Zoom controls the scale factor applied to the drawing transform and to
/// pointer coordinate interpretation.
///
/// Zooming only affects strokes drawn afterwards; pixels already on the
/// raster are never rescaled. A zoom-in followed by a zoom-out lands close
/// to, but not necessarily bit-exactly on, the previous factor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Zoom {
    factor: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

impl Zoom {
    /// Create a zoom state at the default factor of 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scale factor, always positive.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Multiply the factor by one step.
    pub fn zoom_in(&mut self) {
        self.factor *= ZOOM_STEP;
    }

    /// Divide the factor by one step.
    pub fn zoom_out(&mut self) {
        self.factor /= ZOOM_STEP;
    }

    /// Reset to the default factor of 1.
    pub fn reset(&mut self) {
        self.factor = 1.0;
    }

    /// Map a raw pointer position into canvas-local, zoom-adjusted
    /// coordinates: subtract the surface's on-screen origin, then divide
    /// both axes by the current factor.
    pub fn to_canvas_space(&self, raw: Point, origin: Point) -> Point {
        Point::new(
            (raw.x - origin.x) / self.factor,
            (raw.y - origin.y) / self.factor,
        )
    }
}
