// imgmanip/src/processors/loader.rs
use crate::core::{ImageToolError, Result};
use crate::utils::{format_bands, image_format_to_string};
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A decoded image together with where it came from and how it was encoded.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub image: DynamicImage,
}

impl ImageHandle {
    pub fn new(path: impl Into<PathBuf>, format: ImageFormat, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            format,
            image,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    pub fn color(&self) -> ColorType {
        self.image.color()
    }

    pub fn bands(&self) -> String {
        format_bands(self.color())
    }

    pub fn format_name(&self) -> String {
        image_format_to_string(self.format)
    }
}

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<ImageHandle> {
        log::debug!("Loading image from: {}", path.display());

        let mut reader = ImageReader::open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ImageToolError::NotFound(path.to_path_buf()),
                _ => ImageToolError::Io(e),
            })?
            .with_guessed_format()?;

        let format = match reader.format() {
            Some(format) => format,
            None => {
                let format = self.detect_format(path)?;
                reader.set_format(format);
                format
            }
        };

        let image = reader.decode().map_err(|e| {
            ImageToolError::ProcessingError(format!(
                "Failed to decode {}: {}",
                path.display(),
                e
            ))
        })?;

        log::debug!(
            "Loaded image: {}x{} pixels, format: {:?}, color: {:?}",
            image.width(),
            image.height(),
            format,
            image.color()
        );

        Ok(ImageHandle::new(path, format, image))
    }

    pub fn detect_format(&self, path: &Path) -> Result<ImageFormat> {
        ImageFormat::from_path(path).map_err(|_| {
            ImageToolError::UnsupportedFormat(format!(
                "Cannot determine image format of {}",
                path.display()
            ))
        })
    }
}
