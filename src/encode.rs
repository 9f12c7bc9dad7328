//! File encoders: size-optimized PNG and multi-resolution ICO

use crate::error::{AssetError, Result};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{
    ExtendedColorType, ImageBuffer, ImageEncoder, ImageFormat, ImageResult, PixelWithColorType,
    RgbaImage,
};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Formats the generator writes, with the cargo feature that provides each.
const REQUIRED_ENCODERS: [(ImageFormat, &str); 2] =
    [(ImageFormat::Png, "png"), (ImageFormat::Ico, "ico")];

/// Verify the linked image backend can encode every output format.
/// Runs before anything touches the filesystem.
pub fn check_backend() -> Result<()> {
    check_encoders(|format| format.writing_enabled())
}

/// Fail on the first required format that `enabled` rejects.
pub fn check_encoders(enabled: impl Fn(ImageFormat) -> bool) -> Result<()> {
    match REQUIRED_ENCODERS
        .iter()
        .find(|(format, _)| !enabled(*format))
    {
        Some(&(_, feature)) => Err(AssetError::MissingEncoder { format: feature }),
        None => Ok(()),
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Write `img` as a PNG at maximum compression.
pub fn save_png<P>(path: &Path, img: &ImageBuffer<P, Vec<u8>>) -> Result<()>
where
    P: PixelWithColorType<Subpixel = u8>,
{
    let encoder =
        PngEncoder::new_with_quality(create(path)?, CompressionType::Best, PngFilter::Adaptive);
    encoder.write_image(img.as_raw(), img.width(), img.height(), P::COLOR_TYPE)?;
    info!("Wrote {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}

/// Lanczos-downsample `source` to each size in `sizes`.
pub fn icon_variants(source: &RgbaImage, sizes: &[u32]) -> Vec<RgbaImage> {
    sizes
        .iter()
        .map(|&s| imageops::resize(source, s, s, FilterType::Lanczos3))
        .collect()
}

/// Write an ICO holding one PNG-encoded entry per size, all scaled from `source`.
pub fn save_ico(path: &Path, source: &RgbaImage, sizes: &[u32]) -> Result<()> {
    let frames = icon_variants(source, sizes)
        .iter()
        .map(|v| IcoFrame::as_png(v.as_raw(), v.width(), v.height(), ExtendedColorType::Rgba8))
        .collect::<ImageResult<Vec<_>>>()?;
    IcoEncoder::new(create(path)?).encode_images(&frames)?;
    info!("Wrote {} with sizes {:?}", path.display(), sizes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn default_backend_has_required_encoders() {
        assert!(check_backend().is_ok());
    }

    #[test]
    fn variants_match_requested_sizes() {
        let source = RgbaImage::from_pixel(48, 48, Rgba([10, 10, 18, 255]));
        let variants = icon_variants(&source, &[16, 32, 48]);
        let dims: Vec<_> = variants.iter().map(|v| v.dimensions()).collect();
        assert_eq!(dims, [(16, 16), (32, 32), (48, 48)]);
        // Flat color survives resampling
        assert_eq!(*variants[0].get_pixel(8, 8), Rgba([10, 10, 18, 255]));
    }

    #[test]
    fn first_missing_encoder_is_reported() {
        let err = check_encoders(|_| false).unwrap_err();
        assert!(matches!(err, AssetError::MissingEncoder { format: "png" }), "{}", err);

        let err = check_encoders(|f| f != ImageFormat::Ico).unwrap_err();
        assert!(matches!(err, AssetError::MissingEncoder { format: "ico" }), "{}", err);
    }

    #[test]
    fn missing_encoder_message_names_the_feature() {
        let err = AssetError::MissingEncoder { format: "ico" };
        assert!(err.to_string().contains("ico encoder"));
    }
}
