// imgmanip/src/utils/mod.rs
use image::{ColorType, DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

/// `<stem>-manip-<index><.ext>`, next to the input.
pub fn manip_output_path(input_path: &Path, index: usize) -> PathBuf {
    let stem = file_stem(input_path);
    let new_filename = match input_path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{}-manip-{}.{}", stem, index, ext),
        None => format!("{}-manip-{}", stem, index),
    };
    input_path.with_file_name(new_filename)
}

/// `<stem>-<width>x<height>-<index>.thumb`, next to the input.
pub fn thumbnail_output_path(input_path: &Path, width: u32, height: u32, index: usize) -> PathBuf {
    let stem = file_stem(input_path);
    input_path.with_file_name(format!("{}-{}x{}-{}.thumb", stem, width, height, index))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

/// `target * numerator / denominator`, rounded, never below 1.
pub fn scale_dimension(target: u32, numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return target.max(1);
    }
    let scaled = (target as f64 * numerator as f64 / denominator as f64).round();
    (scaled as u32).max(1)
}

/// Band labels in channel order, e.g. `["R", "G", "B"]`.
pub fn color_bands(color: ColorType) -> &'static [&'static str] {
    match color {
        ColorType::L8 | ColorType::L16 => &["L"],
        ColorType::La8 | ColorType::La16 => &["L", "A"],
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => &["R", "G", "B"],
        _ => &["R", "G", "B", "A"],
    }
}

/// Renders bands the way the info dump prints them: `('R', 'G', 'B')`.
pub fn format_bands(color: ColorType) -> String {
    let bands = color_bands(color);
    let quoted: Vec<String> = bands.iter().map(|b| format!("'{}'", b)).collect();
    if quoted.len() == 1 {
        format!("({},)", quoted[0])
    } else {
        format!("({})", quoted.join(", "))
    }
}

/// Converts `image` back to `color` after a step that worked in another
/// colour space, so it can be re-encoded in its original format.
pub fn convert_to_color_type(image: DynamicImage, color: ColorType) -> DynamicImage {
    if image.color() == color {
        return image;
    }

    match color {
        ColorType::L8 => DynamicImage::ImageLuma8(image.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(image.to_rgb8()),
        ColorType::Rgba8 => DynamicImage::ImageRgba8(image.to_rgba8()),
        ColorType::L16 => DynamicImage::ImageLuma16(image.to_luma16()),
        ColorType::La16 => DynamicImage::ImageLumaA16(image.to_luma_alpha16()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(image.to_rgb16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(image.to_rgba16()),
        ColorType::Rgb32F => DynamicImage::ImageRgb32F(image.to_rgb32f()),
        ColorType::Rgba32F => DynamicImage::ImageRgba32F(image.to_rgba32f()),
        _ => image,
    }
}

pub fn image_format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Png => "PNG",
        ImageFormat::Gif => "GIF",
        ImageFormat::WebP => "WEBP",
        ImageFormat::Pnm => "PPM",
        ImageFormat::Tiff => "TIFF",
        ImageFormat::Tga => "TGA",
        ImageFormat::Bmp => "BMP",
        ImageFormat::Ico => "ICO",
        ImageFormat::Hdr => "HDR",
        ImageFormat::OpenExr => "OpenEXR",
        ImageFormat::Farbfeld => "Farbfeld",
        ImageFormat::Avif => "AVIF",
        ImageFormat::Qoi => "QOI",
        _ => "Unknown",
    }
    .to_string()
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manip_name_keeps_stem_and_extension_case() {
        assert_eq!(
            manip_output_path(Path::new("photo.JPG"), 2),
            PathBuf::from("photo-manip-2.JPG")
        );
        assert_eq!(
            manip_output_path(Path::new("shots/beach.png"), 0),
            PathBuf::from("shots/beach-manip-0.png")
        );
    }

    #[test]
    fn manip_name_without_extension() {
        assert_eq!(
            manip_output_path(Path::new("raw"), 1),
            PathBuf::from("raw-manip-1")
        );
    }

    #[test]
    fn manip_name_uses_last_extension_only() {
        assert_eq!(
            manip_output_path(Path::new("archive.tar.png"), 3),
            PathBuf::from("archive.tar-manip-3.png")
        );
    }

    #[test]
    fn thumbnail_name() {
        assert_eq!(
            thumbnail_output_path(Path::new("photo.JPG"), 256, 192, 0),
            PathBuf::from("photo-256x192-0.thumb")
        );
        assert_eq!(
            thumbnail_output_path(Path::new("dir/a.png"), 128, 64, 4),
            PathBuf::from("dir/a-128x64-4.thumb")
        );
    }

    #[test]
    fn scale_dimension_rounds() {
        // 1024x768 at width 256
        assert_eq!(scale_dimension(256, 768, 1024), 192);
        // 1000x500 at width 500
        assert_eq!(scale_dimension(500, 500, 1000), 250);
        // 3 * 2 / 4 = 1.5 rounds up
        assert_eq!(scale_dimension(3, 2, 4), 2);
        assert_eq!(scale_dimension(1, 1, 1000), 1);
    }

    #[test]
    fn bands_render_like_tuples() {
        assert_eq!(format_bands(ColorType::Rgb8), "('R', 'G', 'B')");
        assert_eq!(format_bands(ColorType::Rgba8), "('R', 'G', 'B', 'A')");
        assert_eq!(format_bands(ColorType::L8), "('L',)");
        assert_eq!(format_bands(ColorType::La16), "('L', 'A')");
    }

    #[test]
    fn converts_back_to_original_color_type() {
        let rgb = DynamicImage::ImageRgb8(image::RgbImage::new(3, 2));
        let float = DynamicImage::ImageRgba32F(rgb.to_rgba32f());
        let back = convert_to_color_type(float, ColorType::Rgb8);
        assert_eq!(back.color(), ColorType::Rgb8);
        assert_eq!((back.width(), back.height()), (3, 2));

        let luma = convert_to_color_type(rgb, ColorType::L8);
        assert_eq!(luma.color(), ColorType::L8);
    }
}
