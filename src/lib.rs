//! seo_assets - Procedural SEO image assets for Boing Observer
//!
//! Draws the Open Graph banner, the multi-resolution favicon and the Apple
//! touch icon, and writes them to an output directory.

pub mod banner;
pub mod constants;
pub mod encode;
pub mod error;
pub mod font;
pub mod icon;
pub mod shapes;

pub use encode::check_backend;
pub use error::{AssetError, Result};
pub use font::{AssetFont, FontResolver};

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Create `out_dir` if needed. Existing directories are reused.
pub fn ensure_output_dir(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|source| AssetError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })
}

/// Generate all three assets into `out_dir` using the host's fonts.
/// Returns the written paths in order: banner, favicon, touch icon.
pub fn generate_all(out_dir: &Path) -> Result<Vec<PathBuf>> {
    generate_all_with(out_dir, &FontResolver::default(), |_| {})
}

/// Same as [`generate_all`] with an explicit font candidate list.
/// `on_created` is called as soon as each file is on disk.
pub fn generate_all_with<F>(
    out_dir: &Path,
    fonts: &FontResolver,
    on_created: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path),
{
    generate_checked(check_backend, out_dir, fonts, on_created)
}

/// Run `backend_check` first; nothing is written unless it passes.
fn generate_checked<C, F>(
    backend_check: C,
    out_dir: &Path,
    fonts: &FontResolver,
    mut on_created: F,
) -> Result<Vec<PathBuf>>
where
    C: FnOnce() -> Result<()>,
    F: FnMut(&Path),
{
    backend_check()?;
    ensure_output_dir(out_dir)?;
    info!("Generating SEO assets into {}", out_dir.display());

    let banner = banner::write_og_image(out_dir, fonts)?;
    on_created(&banner);

    let favicon = icon::write_favicon(out_dir)?;
    on_created(&favicon);

    let touch_icon = icon::write_touch_icon(out_dir)?;
    on_created(&touch_icon);

    Ok(vec![banner, favicon, touch_icon])
}
