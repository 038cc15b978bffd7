//! Clipped opaque painting primitives over RGBA canvases

use image::{Rgba, RgbaImage};

/// Fill an axis-aligned rectangle, clipping to the canvas bounds
///
/// Coordinates are signed so callers can paint rectangles that overhang
/// the canvas on any side; only the visible intersection is written.
/// Rectangles with non-positive width or height paint nothing.
pub fn fill_rect(canvas: &mut RgbaImage, x: i64, y: i64, width: i64, height: i64, color: [u8; 4]) {
    if width <= 0 || height <= 0 {
        return;
    }

    let canvas_w = i64::from(canvas.width());
    let canvas_h = i64::from(canvas.height());

    let x_start = x.max(0);
    let y_start = y.max(0);
    let x_end = x.saturating_add(width).min(canvas_w);
    let y_end = y.saturating_add(height).min(canvas_h);

    if x_start >= x_end || y_start >= y_end {
        return;
    }

    let pixel = Rgba(color);
    for py in y_start..y_end {
        for px in x_start..x_end {
            if let Some(target) = canvas.get_pixel_mut_checked(px as u32, py as u32) {
                *target = pixel;
            }
        }
    }
}
