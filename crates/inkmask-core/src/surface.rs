//! The mounted drawing surface: an owned RGBA raster plus its on-screen
//! placement.

use image::RgbaImage;
use kurbo::Point;

/// A drawing surface the engine paints on.
///
/// The raster matches the on-screen canvas pixel for pixel and is
/// exclusively owned by the engine while drawing is active. `origin` is the
/// canvas's top-left corner in raw pointer (screen) coordinates and is what
/// anchors pointer-to-canvas mapping.
#[derive(Debug, Clone)]
pub struct Surface {
    origin: Point,
    raster: RgbaImage,
}

impl Surface {
    /// Create a fully transparent surface of the given pixel dimensions,
    /// placed at `origin` in screen coordinates.
    pub fn new(origin: Point, width: u32, height: u32) -> Self {
        Self {
            origin,
            raster: RgbaImage::new(width, height),
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn raster(&self) -> &RgbaImage {
        &self.raster
    }

    pub fn raster_mut(&mut self) -> &mut RgbaImage {
        &mut self.raster
    }

    /// Erase all pixels back to fully transparent.
    pub fn clear_pixels(&mut self) {
        self.raster = RgbaImage::new(self.raster.width(), self.raster.height());
    }
}
