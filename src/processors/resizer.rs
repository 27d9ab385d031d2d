// imgmanip/src/processors/resizer.rs
use crate::core::{FlipDirection, ResizeAlgorithm, ResizeMode, Rotation};
use crate::utils::scale_dimension;
use image::{imageops::FilterType, DynamicImage};

pub struct Resizer {
    algorithm: ResizeAlgorithm,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn resize(&self, image: &DynamicImage, mode: ResizeMode) -> DynamicImage {
        let (width, height) = Self::calculate_dimensions((image.width(), image.height()), mode);
        self.resize_exact(image, width, height)
    }

    pub fn resize_exact(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resample");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        image.resize_exact(width, height, self.get_filter_type())
    }

    /// Resolves `mode` against the image's current `(width, height)`.
    pub fn calculate_dimensions(current: (u32, u32), mode: ResizeMode) -> (u32, u32) {
        let (cur_width, cur_height) = current;

        match mode {
            ResizeMode::Exact(w, h) => (w, h),
            ResizeMode::Width(w) => (w, cur_height),
            ResizeMode::Height(h) => (cur_width, h),
            ResizeMode::WidthProportional(w) => (w, scale_dimension(w, cur_height, cur_width)),
            ResizeMode::HeightProportional(h) => (scale_dimension(h, cur_width, cur_height), h),
        }
    }

    /// The `(width, height)` box a thumbnail of `width` pixels is fitted
    /// into, keeping the original aspect ratio.
    pub fn thumbnail_box(original: (u32, u32), width: u32) -> (u32, u32) {
        let (orig_width, orig_height) = original;
        (width, scale_dimension(width, orig_height, orig_width))
    }

    /// Largest size that fits in `bounds` with the original aspect ratio,
    /// never larger than the original.
    pub fn fit_within(original: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
        let (orig_w, orig_h) = original;
        let (max_w, max_h) = bounds;

        if orig_w <= max_w && orig_h <= max_h {
            return original;
        }

        let ratio_w = max_w as f64 / orig_w as f64;
        let ratio_h = max_h as f64 / orig_h as f64;
        let ratio = ratio_w.min(ratio_h);

        let new_w = (orig_w as f64 * ratio).round() as u32;
        let new_h = (orig_h as f64 * ratio).round() as u32;

        (new_w.clamp(1, max_w.max(1)), new_h.clamp(1, max_h.max(1)))
    }

    /// Shrinks a copy of `image` to fit the thumbnail box for `width`.
    /// Returns the box alongside the thumbnail since output names use it.
    pub fn thumbnail(&self, image: &DynamicImage, width: u32) -> ((u32, u32), DynamicImage) {
        let original = (image.width(), image.height());
        let bounds = Self::thumbnail_box(original, width);
        let (thumb_w, thumb_h) = Self::fit_within(original, bounds);
        (bounds, self.resize_exact(image, thumb_w, thumb_h))
    }

    pub fn flip(image: &DynamicImage, direction: FlipDirection) -> DynamicImage {
        match direction {
            FlipDirection::Horizontal => image.fliph(),
            FlipDirection::Vertical => image.flipv(),
        }
    }

    /// Rotates counter-clockwise.
    pub fn rotate(image: &DynamicImage, rotation: Rotation) -> DynamicImage {
        // image's rotate90/rotate270 turn clockwise
        match rotation {
            Rotation::Ccw90 => image.rotate270(),
            Rotation::Ccw180 => image.rotate180(),
            Rotation::Ccw270 => image.rotate90(),
        }
    }

    fn get_filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new(ResizeAlgorithm::Bicubic)
    }
}
