//! CPU rasterization primitives for brush strokes.
//!
//! Pixels are tested at their centers; a pixel is painted when its center
//! falls inside the shape. Colors are written directly (no alpha blending),
//! so repainting the same pixel is idempotent.

use image::{Rgba, RgbaImage};
use kurbo::Point;

/// Clamp a floating-point bounding box to pixel indices inside the image.
/// Returns `None` when the box lies entirely outside.
fn clamp_bounds(
    img: &RgbaImage,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
) -> Option<(u32, u32, u32, u32)> {
    let w = img.width() as f64;
    let h = img.height() as f64;
    if max_x <= 0.0 || max_y <= 0.0 || min_x >= w || min_y >= h {
        return None;
    }
    let x0 = min_x.floor().max(0.0) as u32;
    let y0 = min_y.floor().max(0.0) as u32;
    let x1 = max_x.ceil().min(w) as u32;
    let y1 = max_y.ceil().min(h) as u32;
    Some((x0, y0, x1, y1))
}

/// Fill a disc of the given radius centered at `center`.
pub fn fill_disc(img: &mut RgbaImage, center: Point, radius: f64, color: Rgba<u8>) {
    if radius <= 0.0 {
        return;
    }
    let Some((x0, y0, x1, y1)) = clamp_bounds(
        img,
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    ) else {
        return;
    };

    let r_sq = radius * radius;
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = (x as f64 + 0.5) - center.x;
            let dy = (y as f64 + 0.5) - center.y;
            if dx * dx + dy * dy <= r_sq {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill a thick line segment from `a` to `b` with flat (butt) ends.
///
/// A pixel is painted when its center projects onto the segment between the
/// endpoints and its perpendicular distance is within `half_width`. End caps
/// are not part of this primitive; the stroke renderer adds a disc at the
/// segment start separately.
pub fn fill_segment(img: &mut RgbaImage, a: Point, b: Point, half_width: f64, color: Rgba<u8>) {
    if half_width <= 0.0 {
        return;
    }
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq < f64::EPSILON {
        // Degenerate segment; the start cap covers the dot case.
        return;
    }
    let len = len_sq.sqrt();

    let Some((x0, y0, x1, y1)) = clamp_bounds(
        img,
        a.x.min(b.x) - half_width,
        a.y.min(b.y) - half_width,
        a.x.max(b.x) + half_width,
        a.y.max(b.y) + half_width,
    ) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let px = (x as f64 + 0.5) - a.x;
            let py = (y as f64 + 0.5) - a.y;
            let t = (px * dx + py * dy) / len_sq;
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let perp = (px * dy - py * dx).abs() / len;
            if perp <= half_width {
                img.put_pixel(x, y, color);
            }
        }
    }
}
