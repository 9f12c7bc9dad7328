//! Open Graph banner
//!
//! 1200x630 social preview: dark background, an accent ring hanging off
//! the bottom-right corner, centered title and subtitle, and a tagline.

use crate::constants::*;
use crate::encode::save_png;
use crate::error::Result;
use crate::font::{AssetFont, FontResolver};
use crate::shapes::draw_ring_mut;
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Left edge that centers a run of `text_width` pixels in `canvas_width`.
fn centered_x(canvas_width: u32, text_width: u32) -> i32 {
    (canvas_width as i32 - text_width as i32) / 2
}

fn draw_centered(img: &mut RgbImage, font: &AssetFont, text: &str, y: i32, color: Rgb<u8>) {
    let (tw, _) = font.text_size(text);
    let x = centered_x(img.width(), tw);
    font.draw_text(img, color, x, y, text);
}

/// Render the banner. Fonts are resolved fresh on every call.
pub fn draw_og_image(fonts: &FontResolver) -> RgbImage {
    let (w, h) = (OG_WIDTH, OG_HEIGHT);
    let mut img = RgbImage::from_pixel(w, h, BG_DARK);

    // Ring's bounding box starts 280px in from the corner and overhangs by 20
    let radius = ACCENT_RING_DIAMETER as f32 / 2.0;
    let inset = (ACCENT_RING_DIAMETER - ACCENT_RING_OVERHANG) as f32;
    let center = (w as f32 - inset + radius, h as f32 - inset + radius);
    draw_ring_mut(&mut img, center, radius, ACCENT_RING_STROKE, ACCENT_CYAN);

    let font_large = fonts.resolve(TITLE_FONT_PX, true);
    let font_small = fonts.resolve(BODY_FONT_PX, false);

    let (tw, th) = font_large.text_size(TITLE);
    let x = centered_x(w, tw);
    let y = h as i32 / 2 - th as i32 - TITLE_RAISE;

    font_large.draw_text(
        &mut img,
        BG_NAVY,
        x + TITLE_SHADOW_OFFSET,
        y + TITLE_SHADOW_OFFSET,
        TITLE,
    );
    font_large.draw_text(&mut img, TEXT_PRIMARY, x, y, TITLE);

    draw_centered(
        &mut img,
        &font_small,
        SUBTITLE,
        y + th as i32 + SUBTITLE_GAP,
        ACCENT_CYAN,
    );
    draw_centered(
        &mut img,
        &font_small,
        TAGLINE,
        h as i32 - TAGLINE_BOTTOM_MARGIN,
        TEXT_MUTED,
    );

    img
}

/// Render the banner and write it to `out_dir`.
pub fn write_og_image(out_dir: &Path, fonts: &FontResolver) -> Result<PathBuf> {
    let img = draw_og_image(fonts);
    let path = out_dir.join(OG_IMAGE_FILE);
    save_png(&path, &img)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_only() -> FontResolver {
        FontResolver::with_candidates(Vec::new(), Vec::new())
    }

    #[test]
    fn centered_x_handles_oversized_text() {
        assert_eq!(centered_x(1200, 200), 500);
        assert_eq!(centered_x(100, 140), -20);
    }

    #[test]
    fn banner_has_og_dimensions() {
        let img = draw_og_image(&builtin_only());
        assert_eq!(img.dimensions(), (1200, 630));
        assert_eq!(*img.get_pixel(0, 0), BG_DARK);
    }

    #[test]
    fn accent_ring_reaches_bottom_right_region() {
        let img = draw_og_image(&builtin_only());
        // Leftmost point of the ring sits at x = 920 on the center row (500)
        let ring_row: Vec<_> = (915..930).map(|x| *img.get_pixel(x, 500)).collect();
        assert!(ring_row.contains(&ACCENT_CYAN));
        // Interior of the ring stays background
        assert_eq!(*img.get_pixel(1070, 500), BG_DARK);
    }

    #[test]
    fn banner_text_uses_palette_colors() {
        let img = draw_og_image(&builtin_only());
        let has = |c: Rgb<u8>| img.pixels().any(|p| *p == c);
        assert!(has(TEXT_PRIMARY), "title missing");
        assert!(has(BG_NAVY), "title shadow missing");
        assert!(has(TEXT_MUTED), "tagline missing");
    }

    #[test]
    fn title_is_horizontally_centered() {
        let img = draw_og_image(&builtin_only());
        let xs: Vec<u32> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == TEXT_PRIMARY)
            .map(|(x, _, _)| x)
            .collect();
        let min = *xs.iter().min().expect("title pixels");
        let max = *xs.iter().max().expect("title pixels");
        let left = min as i32;
        let right = OG_WIDTH as i32 - 1 - max as i32;
        assert!((left - right).abs() <= 2, "left {} right {}", left, right);
    }
}
