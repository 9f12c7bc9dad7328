//! Built-in 5x7 bitmap font
//!
//! Placeholder face used when no outline font can be loaded from disk.
//! Glyphs cover printable ASCII; each glyph is five column bytes, bit 0
//! being the top row.

use image::{ImageBuffer, Pixel};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

pub const GLYPH_COLUMNS: u32 = 5;
pub const GLYPH_ROWS: u32 = 7;
/// Horizontal advance per character, in cells (glyph plus one gap column).
pub const ADVANCE: u32 = GLYPH_COLUMNS + 1;
/// Nominal pixel size per cell scale step (glyph rows plus leading).
const LINE_CELLS: f32 = 9.0;

const FIRST: u8 = b' ';
const LAST: u8 = b'~';

#[rustfmt::skip]
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x14, 0x08, 0x3E, 0x08, 0x14], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // \
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x10, 0x08, 0x08, 0x10, 0x08], // ~
];

/// Column bytes for `c`; anything outside printable ASCII maps to `?`.
pub fn glyph(c: char) -> [u8; 5] {
    let code = u8::try_from(c)
        .ok()
        .filter(|b| (FIRST..=LAST).contains(b))
        .unwrap_or(b'?');
    GLYPHS[(code - FIRST) as usize]
}

/// Integer scale factor (pixels per cell) for a nominal pixel size.
pub fn cell_scale(px: f32) -> u32 {
    ((px / LINE_CELLS).round() as u32).max(1)
}

/// Rendered (width, height) of `text` at `scale` pixels per cell.
pub fn text_size(scale: u32, text: &str) -> (u32, u32) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0, 0);
    }
    // Trailing gap column is not ink
    let width = (count * ADVANCE - 1) * scale;
    (width, GLYPH_ROWS * scale)
}

/// Draw `text` with its top-left corner at (`x`, `y`); clipped to the canvas.
pub fn draw_text<P>(
    canvas: &mut ImageBuffer<P, Vec<u8>>,
    color: P,
    x: i32,
    y: i32,
    scale: u32,
    text: &str,
) where
    P: Pixel<Subpixel = u8>,
{
    if scale == 0 {
        return;
    }
    let step = scale as i32;
    for (i, c) in text.chars().enumerate() {
        let origin_x = x + (i as i32) * (ADVANCE as i32) * step;
        for (col, bits) in glyph(c).iter().enumerate() {
            for row in 0..GLYPH_ROWS {
                if bits & (1 << row) == 0 {
                    continue;
                }
                let cell = Rect::at(origin_x + col as i32 * step, y + row as i32 * step)
                    .of_size(scale, scale);
                draw_filled_rect_mut(canvas, cell, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn glyph_table_covers_printable_ascii() {
        assert_eq!(GLYPHS.len(), (LAST - FIRST + 1) as usize);
        assert_eq!(glyph(' '), [0; 5]);
        assert_eq!(glyph('|'), [0x00, 0x00, 0x7F, 0x00, 0x00]);
    }

    #[test]
    fn unknown_characters_render_as_question_mark() {
        assert_eq!(glyph('×'), glyph('?'));
        assert_eq!(glyph('\n'), glyph('?'));
    }

    #[test]
    fn cell_scale_tracks_pixel_size() {
        assert_eq!(cell_scale(72.0), 8);
        assert_eq!(cell_scale(36.0), 4);
        assert_eq!(cell_scale(2.0), 1);
    }

    #[test]
    fn text_size_excludes_trailing_gap() {
        assert_eq!(text_size(1, ""), (0, 0));
        assert_eq!(text_size(1, "A"), (5, 7));
        assert_eq!(text_size(2, "AB"), (22, 14));
    }

    #[test]
    fn draw_text_stays_inside_measured_box() {
        let bg = Rgb([0u8, 0, 0]);
        let ink = Rgb([255u8, 255, 255]);
        let mut img = RgbImage::from_pixel(64, 32, bg);
        let (w, h) = text_size(2, "Hi");
        draw_text(&mut img, ink, 4, 4, 2, "Hi");

        let mut inked = 0;
        for (x, y, p) in img.enumerate_pixels() {
            if *p == ink {
                inked += 1;
                assert!(x >= 4 && x < 4 + w, "ink outside box at x={}", x);
                assert!(y >= 4 && y < 4 + h, "ink outside box at y={}", y);
            }
        }
        assert!(inked > 0, "nothing was drawn");
    }

    #[test]
    fn draw_text_clips_at_canvas_edge() {
        let mut img = RgbImage::new(8, 8);
        draw_text(&mut img, Rgb([9, 9, 9]), -3, -3, 3, "W");
        assert!(img.pixels().any(|p| p.0 == [9, 9, 9]));
    }
}
