// imgmanip/src/processors/metadata.rs
use super::loader::ImageHandle;
use crate::core::{ImageToolError, Result};
use exif::{Exif, In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct MetadataProcessor;

impl MetadataProcessor {
    pub fn new() -> Self {
        Self
    }

    /// The property block printed by `--info`.
    pub fn describe(&self, handle: &ImageHandle) -> String {
        let (width, height) = handle.dimensions();
        let mut output = String::new();
        output.push_str(&format!("{:<9}: {}\n", "Filename", handle.path.display()));
        output.push_str(&format!("{:<9}: ({}, {})\n", "Size", width, height));
        output.push_str(&format!("{:<9}: {}\n", "Format", handle.format_name()));
        output.push_str(&format!("{:<9}: {}\n", "Bands", handle.bands()));

        match self.read_metadata(&handle.path) {
            Ok(Some(exif)) => output.push_str(&self.exif_summary(&exif)),
            Ok(None) => {}
            Err(e) => log::debug!("Ignoring unreadable EXIF block: {}", e),
        }

        output
    }

    pub fn read_metadata(&self, path: &Path) -> Result<Option<Exif>> {
        let file = File::open(path)?;
        let mut bufreader = BufReader::new(&file);

        match Reader::new().read_from_container(&mut bufreader) {
            Ok(exif) => {
                log::debug!("Found EXIF data in {}", path.display());
                Ok(Some(exif))
            }
            Err(exif::Error::NotFound(_)) => {
                log::debug!("No EXIF data found in {}", path.display());
                Ok(None)
            }
            Err(e) => Err(ImageToolError::ProcessingError(format!(
                "EXIF read error: {}",
                e
            ))),
        }
    }

    fn exif_summary(&self, exif: &Exif) -> String {
        let mut output = String::new();
        if let Some((make, model)) = self.get_camera_info(exif) {
            output.push_str(&format!("{:<9}: {} {}\n", "Camera", make, model));
        }
        output.push_str(&format!("{:<9}: {} fields\n", "EXIF", exif.fields().count()));
        output
    }

    pub fn get_camera_info(&self, exif: &Exif) -> Option<(String, String)> {
        let field_text = |tag: Tag| {
            exif.get_field(tag, In::PRIMARY)
                .map(|f| f.display_value().to_string().trim_matches('"').to_string())
        };

        match (field_text(Tag::Make), field_text(Tag::Model)) {
            (Some(make), Some(model)) => Some((make, model)),
            _ => None,
        }
    }
}

impl Default for MetadataProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    #[test]
    fn describes_properties_in_aligned_columns() {
        let handle = ImageHandle::new(
            "holiday.png",
            ImageFormat::Png,
            DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 48, Rgb([0, 0, 0]))),
        );

        let text = MetadataProcessor::new().describe(&handle);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Filename : holiday.png");
        assert_eq!(lines[1], "Size     : (64, 48)");
        assert_eq!(lines[2], "Format   : PNG");
        assert_eq!(lines[3], "Bands    : ('R', 'G', 'B')");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn png_without_exif_has_no_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.png");
        RgbImage::new(2, 2).save(&path).unwrap();

        let exif = MetadataProcessor::new().read_metadata(&path);
        assert!(matches!(exif, Ok(None)));
    }
}
