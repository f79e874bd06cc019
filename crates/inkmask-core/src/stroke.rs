//! Stroke state machine and brush footprint rendering.

use crate::brush::BrushConfig;
use crate::raster;
use image::RgbaImage;
use kurbo::Point;

/// State of the stroke renderer.
///
/// A stroke spans one pointer-down to the matching pointer-up. The previous
/// point exists only strictly between those two events, so consecutive
/// strokes never get an implicit connecting segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeState {
    /// No active stroke.
    #[default]
    Idle,
    /// Between pointer-down and pointer-up.
    Drawing {
        /// Last sampled point of this stroke, canvas-local and
        /// zoom-adjusted. `None` until the first move sample arrives.
        prev: Option<Point>,
    },
}

impl StrokeState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, StrokeState::Drawing { .. })
    }

    /// Enter the Drawing state with no previous point recorded.
    pub fn begin(&mut self) {
        *self = StrokeState::Drawing { prev: None };
    }

    /// Return to Idle, clearing the previous point.
    pub fn end(&mut self) {
        *self = StrokeState::Idle;
    }
}

/// Paint one brush segment from `start` to `end` onto the raster.
///
/// The footprint is a flat-ended line of width twice the brush radius plus a
/// filled disc of the brush radius at the segment's start point. Chained
/// segments therefore stay gap-free under fast pointer motion, every join
/// gets a rounded cap, and a segment from a point to itself degenerates to a
/// single dot.
///
/// `scale` is the current zoom factor: canvas-local coordinates and the
/// brush radius are scaled up at rasterization time, which is how the zoom
/// transform reaches pixels without rescaling existing raster content.
pub fn draw_segment(
    img: &mut RgbaImage,
    start: Point,
    end: Point,
    brush: &BrushConfig,
    scale: f64,
) {
    let a = Point::new(start.x * scale, start.y * scale);
    let b = Point::new(end.x * scale, end.y * scale);
    let radius = brush.radius * scale;
    let color = brush.color.to_pixel();

    raster::fill_segment(img, a, b, radius, color);
    raster::fill_disc(img, a, radius, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let mut state = StrokeState::default();
        assert!(!state.is_drawing());

        state.begin();
        assert_eq!(state, StrokeState::Drawing { prev: None });

        state = StrokeState::Drawing {
            prev: Some(Point::new(3.0, 4.0)),
        };
        state.end();
        assert_eq!(state, StrokeState::Idle);
    }

    #[test]
    fn test_dot_at_stroke_start() {
        let mut img = RgbaImage::new(40, 40);
        let brush = BrushConfig::new(5.0);
        let p = Point::new(20.0, 20.0);
        draw_segment(&mut img, p, p, &brush, 1.0);

        assert!(img.get_pixel(20, 20)[3] > 0);
        // Within the disc.
        assert!(img.get_pixel(23, 20)[3] > 0);
        // Outside the disc.
        assert_eq!(img.get_pixel(28, 20)[3], 0);
    }

    #[test]
    fn test_segment_has_start_cap_and_flat_end() {
        let mut img = RgbaImage::new(60, 60);
        let brush = BrushConfig::new(5.0);
        draw_segment(
            &mut img,
            Point::new(20.0, 30.0),
            Point::new(40.0, 30.0),
            &brush,
            1.0,
        );

        // Rounded cap reaches behind the start point.
        assert!(img.get_pixel(16, 30)[3] > 0);
        // The end is flat: nothing beyond the endpoint.
        assert_eq!(img.get_pixel(43, 30)[3], 0);
        // Line body.
        assert!(img.get_pixel(30, 33)[3] > 0);
    }

    #[test]
    fn test_zoom_scales_footprint() {
        let brush = BrushConfig::new(10.0);
        let p = Point::new(25.0, 25.0);

        let mut unzoomed = RgbaImage::new(100, 100);
        draw_segment(&mut unzoomed, p, p, &brush, 1.0);

        let mut zoomed = RgbaImage::new(100, 100);
        let halved = Point::new(25.0 / 2.0, 25.0 / 2.0);
        draw_segment(&mut zoomed, halved, halved, &brush, 2.0);

        // At scale 2 the dot lands at the same screen position but with
        // twice the radius.
        assert_eq!(unzoomed.get_pixel(40, 25)[3], 0);
        assert!(zoomed.get_pixel(40, 25)[3] > 0);
        assert!(zoomed.get_pixel(25, 25)[3] > 0);
    }
}
