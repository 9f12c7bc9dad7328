//! Favicon and Apple touch icon
//!
//! Both icons share one motif: a dark rounded square, a cyan ring and a
//! single clock hand pointing to the upper right. Only the proportions
//! differ between the two.

use crate::constants::*;
use crate::encode::{save_ico, save_png};
use crate::error::Result;
use crate::shapes::{draw_ring_mut, draw_thick_line_mut, fill_rounded_rect_mut};
use image::{Rgb, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Proportions of the clock motif on an `size`-pixel canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconGeometry {
    pub size: u32,
    /// Padding is `size / pad_divisor` on each side of the ring.
    pub pad_divisor: u32,
    /// Stroke is `max(2, size / stroke_divisor)`.
    pub stroke_divisor: u32,
    /// Hand stops this many strokes short of the ring radius.
    pub hand_inset: u32,
}

pub const FAVICON_GEOMETRY: IconGeometry = IconGeometry {
    size: FAVICON_CANVAS,
    pad_divisor: 8,
    stroke_divisor: 16,
    hand_inset: 1,
};

pub const TOUCH_ICON_GEOMETRY: IconGeometry = IconGeometry {
    size: TOUCH_ICON_SIZE,
    pad_divisor: 10,
    stroke_divisor: 20,
    hand_inset: 2,
};

impl IconGeometry {
    pub fn pad(&self) -> u32 {
        self.size / self.pad_divisor
    }

    pub fn radius(&self) -> u32 {
        (self.size - 2 * self.pad()) / 2
    }

    pub fn stroke(&self) -> u32 {
        (self.size / self.stroke_divisor).max(2)
    }

    pub fn corner_radius(&self) -> u32 {
        self.size / 6
    }

    pub fn hand_length(&self) -> u32 {
        self.radius().saturating_sub(self.stroke() * self.hand_inset)
    }

    /// Hand end point, measured from the pixel grid origin.
    pub fn hand_end(&self) -> (f32, f32) {
        let c = (self.size / 2) as f32;
        let len = self.hand_length() as f32;
        (c + len * HAND_SLOPE, c - len * HAND_SLOPE)
    }
}

fn opaque(c: Rgb<u8>) -> Rgba<u8> {
    Rgba([c[0], c[1], c[2], 255])
}

/// Render the clock motif on a transparent canvas.
pub fn draw_clock_icon(geom: &IconGeometry) -> RgbaImage {
    let s = geom.size;
    let mut img = RgbaImage::new(s, s);
    let cyan = opaque(ACCENT_CYAN);

    fill_rounded_rect_mut(&mut img, geom.corner_radius() as f32, opaque(BG_DARK));

    // Ring spans pixels c - r ..= c + r, so its outer edge sits half a pixel past r
    let c = (s / 2) as f32;
    let stroke = geom.stroke() as f32;
    draw_ring_mut(
        &mut img,
        (c + 0.5, c + 0.5),
        geom.radius() as f32 + 0.5,
        stroke,
        cyan,
    );

    draw_thick_line_mut(&mut img, (c, c), geom.hand_end(), stroke, cyan);

    img
}

/// The 48px favicon source canvas.
pub fn draw_favicon() -> RgbaImage {
    draw_clock_icon(&FAVICON_GEOMETRY)
}

pub fn draw_touch_icon() -> RgbaImage {
    draw_clock_icon(&TOUCH_ICON_GEOMETRY)
}

/// Write `favicon.ico` with 16, 32 and 48px entries from one source canvas.
pub fn write_favicon(out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(FAVICON_FILE);
    save_ico(&path, &draw_favicon(), &FAVICON_SIZES)?;
    Ok(path)
}

pub fn write_touch_icon(out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(TOUCH_ICON_FILE);
    save_png(&path, &draw_touch_icon())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favicon_geometry_matches_48px_layout() {
        let g = FAVICON_GEOMETRY;
        assert_eq!(g.pad(), 6);
        assert_eq!(g.radius(), 18);
        assert_eq!(g.stroke(), 3);
        assert_eq!(g.corner_radius(), 8);
        assert_eq!(g.hand_length(), 15);
        assert_eq!(g.hand_end(), (24.0 + 15.0 * HAND_SLOPE, 24.0 - 15.0 * HAND_SLOPE));
    }

    #[test]
    fn touch_icon_geometry_scales_up() {
        let g = TOUCH_ICON_GEOMETRY;
        assert_eq!(g.pad(), 18);
        assert_eq!(g.radius(), 72);
        assert_eq!(g.stroke(), 9);
        assert_eq!(g.corner_radius(), 30);
        assert_eq!(g.hand_length(), 54);
    }

    #[test]
    fn stroke_never_drops_below_two() {
        let tiny = IconGeometry {
            size: 16,
            ..FAVICON_GEOMETRY
        };
        assert_eq!(tiny.stroke(), 2);
    }

    #[test]
    fn icons_have_documented_sizes() {
        assert_eq!(draw_favicon().dimensions(), (48, 48));
        assert_eq!(draw_touch_icon().dimensions(), (180, 180));
    }

    #[test]
    fn icon_corners_are_transparent() {
        for img in [draw_favicon(), draw_touch_icon()] {
            let last = img.width() - 1;
            assert_eq!(img.get_pixel(0, 0)[3], 0);
            assert_eq!(img.get_pixel(last, last)[3], 0);
        }
    }

    #[test]
    fn icon_draws_ring_hand_and_background() {
        let img = draw_touch_icon();
        let cyan = opaque(ACCENT_CYAN);
        let dark = opaque(BG_DARK);
        // Ring crosses the vertical axis at the top, inside the padding
        assert_eq!(*img.get_pixel(90, 20), cyan);
        // Hand passes through the center
        assert_eq!(*img.get_pixel(90, 90), cyan);
        // Lower-left quadrant inside the ring is plain background
        assert_eq!(*img.get_pixel(70, 110), dark);
    }
}
