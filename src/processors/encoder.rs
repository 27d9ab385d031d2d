// imgmanip/src/processors/encoder.rs
use crate::core::Result;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes images back out in the format they were decoded from.
pub struct Encoder {
    quality: u8,
}

impl Encoder {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn save(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
        log::debug!(
            "Saving image to {} with format {:?}, quality: {}",
            path.display(),
            format,
            self.quality
        );

        let image = Self::encodable(image, format);
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        match format {
            ImageFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);
                image.write_with_encoder(encoder)?;
            }
            _ => image.write_to(&mut writer, format)?,
        }
        writer.flush()?;

        self.log_save_result(path)
    }

    /// Drops channels the target format cannot store.
    fn encodable(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
        match (format, image.color()) {
            (ImageFormat::Jpeg, ColorType::L8 | ColorType::Rgb8) => Cow::Borrowed(image),
            (ImageFormat::Jpeg, color) if color.channel_count() <= 2 => {
                Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
            }
            (ImageFormat::Jpeg, _) => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
            (ImageFormat::Gif, ColorType::Rgb8 | ColorType::Rgba8) => Cow::Borrowed(image),
            (ImageFormat::Gif, color) if color.has_alpha() => {
                Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
            }
            (ImageFormat::Gif, _) => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
            _ => Cow::Borrowed(image),
        }
    }

    fn log_save_result(&self, path: &Path) -> Result<()> {
        let file_size = std::fs::metadata(path)?.len();
        log::debug!("Saved image: {} ({} bytes)", path.display(), file_size);
        Ok(())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(crate::core::DEFAULT_JPEG_QUALITY)
    }
}
