//! Font resolution
//!
//! Looks for a usable outline font on the host and degrades to the
//! built-in bitmap face when none of the candidates load.

pub mod bitmap;

use ab_glyph::{FontVec, PxScale};
use image::{ImageBuffer, Pixel};
use imageproc::drawing::{draw_text_mut, text_size};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const BOLD_CANDIDATES: &[&str] = &["C:/Windows/Fonts/arialbd.ttf"];
#[cfg(windows)]
const REGULAR_CANDIDATES: &[&str] = &["C:/Windows/Fonts/arial.ttf", "C:/Windows/Fonts/segoeui.ttf"];

#[cfg(not(windows))]
const BOLD_CANDIDATES: &[&str] = &["/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"];
#[cfg(not(windows))]
const REGULAR_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

/// Face backing an [`AssetFont`].
pub enum FontFace {
    Outline(FontVec),
    Builtin,
}

/// A font resolved at a fixed pixel size.
pub struct AssetFont {
    face: FontFace,
    px: f32,
    source: Option<PathBuf>,
}

impl AssetFont {
    /// The built-in bitmap face at `px`.
    pub fn builtin(px: f32) -> Self {
        Self {
            face: FontFace::Builtin,
            px,
            source: None,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Builtin)
    }

    /// File the face was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    /// Rendered (width, height) of `text`.
    pub fn text_size(&self, text: &str) -> (u32, u32) {
        match &self.face {
            FontFace::Outline(font) => text_size(PxScale::from(self.px), font, text),
            FontFace::Builtin => bitmap::text_size(bitmap::cell_scale(self.px), text),
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`).
    pub fn draw_text<P>(
        &self,
        canvas: &mut ImageBuffer<P, Vec<u8>>,
        color: P,
        x: i32,
        y: i32,
        text: &str,
    ) where
        P: Pixel<Subpixel = u8>,
    {
        match &self.face {
            FontFace::Outline(font) => {
                draw_text_mut(canvas, color, x, y, PxScale::from(self.px), font, text)
            }
            FontFace::Builtin => {
                bitmap::draw_text(canvas, color, x, y, bitmap::cell_scale(self.px), text)
            }
        }
    }
}

/// Ordered list of font files to try, split by weight.
#[derive(Debug, Clone)]
pub struct FontResolver {
    bold: Vec<PathBuf>,
    regular: Vec<PathBuf>,
}

impl FontResolver {
    /// Candidates for the host platform.
    pub fn system() -> Self {
        Self::with_candidates(
            BOLD_CANDIDATES.iter().map(PathBuf::from).collect(),
            REGULAR_CANDIDATES.iter().map(PathBuf::from).collect(),
        )
    }

    pub fn with_candidates(bold: Vec<PathBuf>, regular: Vec<PathBuf>) -> Self {
        Self { bold, regular }
    }

    /// Candidate paths in the order `resolve` tries them.
    pub fn candidates(&self, bold: bool) -> impl Iterator<Item = &Path> {
        let (first, second) = if bold {
            (&self.bold, &self.regular)
        } else {
            (&self.regular, &self.bold)
        };
        first.iter().chain(second.iter()).map(PathBuf::as_path)
    }

    /// First candidate that loads, else the built-in face. Never fails.
    pub fn resolve(&self, px: f32, bold: bool) -> AssetFont {
        for path in self.candidates(bold) {
            match load_face(path) {
                Ok(font) => {
                    debug!("Using font {} at {}px", path.display(), px);
                    return AssetFont {
                        face: FontFace::Outline(font),
                        px,
                        source: Some(path.to_path_buf()),
                    };
                }
                Err(reason) => debug!("Skipping font {}: {}", path.display(), reason),
            }
        }
        warn!("No font candidate loaded; using built-in bitmap font at {}px", px);
        AssetFont::builtin(px)
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::system()
    }
}

/// Read and parse one font file. Collections load their first face.
fn load_face(path: &Path) -> Result<FontVec, String> {
    let data = fs::read(path).map_err(|e| e.to_string())?;
    FontVec::try_from_vec_and_index(data, 0).map_err(|e| e.to_string())
}
