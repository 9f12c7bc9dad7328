//! Stroked and filled primitives that imageproc only offers at 1px
//!
//! Coordinates follow the pixel-box convention: pixel (x, y) is filled
//! when its center (x + 0.5, y + 0.5) lies inside the shape.

use image::{ImageBuffer, Pixel};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

/// Fill pixels whose centers fall between `radius - stroke` and `radius`
/// from `center`. Pixels outside the canvas are skipped.
pub fn draw_ring_mut<P>(
    canvas: &mut ImageBuffer<P, Vec<u8>>,
    center: (f32, f32),
    radius: f32,
    stroke: f32,
    color: P,
) where
    P: Pixel<Subpixel = u8>,
{
    let inner = (radius - stroke).max(0.0);
    let (cx, cy) = center;
    let (w, h) = canvas.dimensions();

    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil().max(0.0) as u32).min(w);
    let y1 = ((cy + radius).ceil().max(0.0) as u32).min(h);

    for y in y0..y1 {
        for x in x0..x1 {
            let fx = x as f32 + 0.5 - cx;
            let fy = y as f32 + 0.5 - cy;
            let dist = (fx * fx + fy * fy).sqrt();
            if dist >= inner && dist <= radius {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill the whole canvas with a rectangle whose corners are rounded to
/// `radius`. Corner pixels outside the arcs are left untouched.
pub fn fill_rounded_rect_mut<P>(canvas: &mut ImageBuffer<P, Vec<u8>>, radius: f32, color: P)
where
    P: Pixel<Subpixel = u8>,
{
    let (w, h) = canvas.dimensions();
    let (wf, hf) = (w as f32, h as f32);
    let r = radius.min(wf / 2.0).min(hf / 2.0);

    for y in 0..h {
        for x in 0..w {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            // Distance past the straight edges, zero inside the cross
            let dx = (r - px).max(px - (wf - r)).max(0.0);
            let dy = (r - py).max(py - (hf - r)).max(0.0);
            if dx * dx + dy * dy <= r * r {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Draw a straight stroke of `width` pixels from `start` to `end`.
pub fn draw_thick_line_mut<P>(
    canvas: &mut ImageBuffer<P, Vec<u8>>,
    start: (f32, f32),
    end: (f32, f32),
    width: f32,
    color: P,
) where
    P: Pixel<Subpixel = u8>,
{
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < f32::EPSILON {
        return;
    }

    // Half-width offset perpendicular to the stroke
    let nx = -dy / len * width / 2.0;
    let ny = dx / len * width / 2.0;

    let corners = [
        (start.0 + nx, start.1 + ny),
        (end.0 + nx, end.1 + ny),
        (end.0 - nx, end.1 - ny),
        (start.0 - nx, start.1 - ny),
    ];
    let mut poly: Vec<Point<i32>> = corners
        .iter()
        .map(|&(x, y)| Point::new(x.round() as i32, y.round() as i32))
        .collect();
    poly.dedup();
    if poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() < 3 {
        return;
    }
    draw_polygon_mut(canvas, &poly, color);
}
