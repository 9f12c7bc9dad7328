//! SEO asset generator
//!
//! Writes og-image.png, favicon.ico and apple-touch-icon.png into public/.
//!
//! Run with: `cargo run --bin generate_seo_assets`

use seo_assets::FontResolver;
use seo_assets::constants::OUTPUT_DIR;
use std::path::Path;

fn main() {
    // Filter is fixed; the generator reads no environment
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    // generate_all_with checks again; this one reports before any progress output
    if let Err(e) = seo_assets::check_backend() {
        println!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Generating SEO assets...");
    let fonts = FontResolver::default();
    let report = |path: &Path| println!("Created {}", path.display());
    match seo_assets::generate_all_with(Path::new(OUTPUT_DIR), &fonts, report) {
        Ok(_) => println!("Done. Assets saved to {}/", OUTPUT_DIR),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
