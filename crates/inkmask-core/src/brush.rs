//! Brush configuration for mask painting.

use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Convert to an `image` crate pixel.
    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

/// Default brush color: translucent red, so the image stays visible
/// underneath the painted mask. Mask extraction only cares that alpha is
/// non-zero.
pub const DEFAULT_BRUSH_COLOR: Color = Color {
    r: 255,
    g: 70,
    b: 70,
    a: 200,
};

/// Default brush radius in canvas pixels.
pub const DEFAULT_BRUSH_RADIUS: f64 = 25.0;

/// Brush settings, fixed for the duration of a drawing session.
///
/// The radius is the half-width of the stroke footprint in canvas-local
/// pixels (before the zoom transform is applied).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushConfig {
    /// Brush radius, must be positive.
    pub radius: f64,
    /// Stroke color painted onto the live raster.
    pub color: Color,
}

impl BrushConfig {
    /// Create a brush with the given radius and the default color.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            color: DEFAULT_BRUSH_COLOR,
        }
    }
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BRUSH_RADIUS)
    }
}
