//! Fixed constants for the SEO asset generator
//!
//! Every value the generator draws with is defined here: palette, canvas
//! sizes, output names and banner copy. There is no runtime configuration.

use image::Rgb;

/// Build an RGB color from a `0xRRGGBB` literal.
pub const fn hex_rgb(hex: u32) -> Rgb<u8> {
    Rgb([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8])
}

// =============================================================================
// PALETTE (Boing design tokens)
// =============================================================================

pub const BG_DARK: Rgb<u8> = hex_rgb(0x0a0a12);
pub const BG_NAVY: Rgb<u8> = hex_rgb(0x0c1428);
pub const ACCENT_CYAN: Rgb<u8> = hex_rgb(0x00d4ff);
pub const ACCENT_PURPLE: Rgb<u8> = hex_rgb(0x7c3aed);
pub const TEXT_PRIMARY: Rgb<u8> = hex_rgb(0xf8fafc);
pub const TEXT_MUTED: Rgb<u8> = hex_rgb(0x94a3b8);

// =============================================================================
// OUTPUT
// =============================================================================

pub const OUTPUT_DIR: &str = "public";
pub const OG_IMAGE_FILE: &str = "og-image.png";
pub const FAVICON_FILE: &str = "favicon.ico";
pub const TOUCH_ICON_FILE: &str = "apple-touch-icon.png";

// =============================================================================
// BANNER (Open Graph / Twitter card)
// =============================================================================

pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;

pub const TITLE: &str = "Boing Observer";
pub const SUBTITLE: &str = "Blockchain Explorer | boing.observer";
pub const TAGLINE: &str = "Authentic. Decentralized. Optimal. Sustainable.";

pub const TITLE_FONT_PX: f32 = 72.0;
pub const BODY_FONT_PX: f32 = 36.0;
pub const TITLE_SHADOW_OFFSET: i32 = 1;
pub const TITLE_RAISE: i32 = 20; // Gap between title bottom and vertical center
pub const SUBTITLE_GAP: i32 = 30;
pub const TAGLINE_BOTTOM_MARGIN: i32 = 80;

// Decorative ring, anchored past the bottom-right corner
pub const ACCENT_RING_DIAMETER: u32 = 300;
pub const ACCENT_RING_OVERHANG: u32 = 20;
pub const ACCENT_RING_STROKE: f32 = 4.0;

// =============================================================================
// ICONS
// =============================================================================

pub const FAVICON_CANVAS: u32 = 48;
pub const FAVICON_SIZES: [u32; 3] = [16, 32, 48];
pub const TOUCH_ICON_SIZE: u32 = 180;

/// Clock hand direction, as a fraction of hand length on each axis.
pub const HAND_SLOPE: f32 = 0.7;
