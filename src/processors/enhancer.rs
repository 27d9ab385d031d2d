// imgmanip/src/processors/enhancer.rs
use super::filters::{convolve, kernel_for};
use crate::core::{EnhancerKind, FilterKind};
use crate::utils::convert_to_color_type;
use image::{DynamicImage, GrayImage, ImageBuffer, Rgba, Rgba32FImage};
use imageproc::filter::{box_filter, gaussian_blur_f32};

// ITU-R 601-2 luma weights.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

pub fn apply_enhancer(image: &DynamicImage, kind: EnhancerKind, factor: f32) -> DynamicImage {
    log::debug!("Applying {} enhancer, factor {}", kind, factor);

    match kind {
        EnhancerKind::Brightness => enhance(image, |source| brightness(source, factor)),
        EnhancerKind::Color => enhance(image, |source| color(source, factor)),
        EnhancerKind::Contrast => enhance(image, |source| contrast(source, factor)),
        EnhancerKind::Sharpness => enhance(image, |source| sharpness(source, factor)),
        EnhancerKind::Greyscale => DynamicImage::ImageLuma8(image.to_luma8()),
        EnhancerKind::GaussianBlur => gaussian_blur(image, factor),
        EnhancerKind::BoxBlur => box_blur(image, factor),
    }
}

/// Runs `f` in linear float RGBA and converts back to the source colour type.
fn enhance<F>(image: &DynamicImage, f: F) -> DynamicImage
where
    F: FnOnce(&Rgba32FImage) -> Rgba32FImage,
{
    let enhanced = f(&image.to_rgba32f());
    convert_to_color_type(DynamicImage::ImageRgba32F(enhanced), image.color())
}

/// Interpolates from `degenerate` (factor 0) to `value` (factor 1) and beyond.
fn blend_channel(degenerate: f32, value: f32, factor: f32) -> f32 {
    (degenerate + (value - degenerate) * factor).clamp(0.0, 1.0)
}

/// Blends every pixel with its degenerate colour by `factor`. Alpha is kept.
fn blend<F>(source: &Rgba32FImage, factor: f32, degenerate: F) -> Rgba32FImage
where
    F: Fn(u32, u32, &Rgba<f32>) -> [f32; 3],
{
    ImageBuffer::from_fn(source.width(), source.height(), |x, y| {
        let pixel = source.get_pixel(x, y);
        let [dr, dg, db] = degenerate(x, y, pixel);
        let [r, g, b, a] = pixel.0;
        Rgba([
            blend_channel(dr, r, factor),
            blend_channel(dg, g, factor),
            blend_channel(db, b, factor),
            a,
        ])
    })
}

fn luma(pixel: &Rgba<f32>) -> f32 {
    let [r, g, b, _] = pixel.0;
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

fn brightness(source: &Rgba32FImage, factor: f32) -> Rgba32FImage {
    blend(source, factor, |_, _, _| [0.0; 3])
}

fn color(source: &Rgba32FImage, factor: f32) -> Rgba32FImage {
    blend(source, factor, |_, _, pixel| [luma(pixel); 3])
}

fn contrast(source: &Rgba32FImage, factor: f32) -> Rgba32FImage {
    let count = source.width() as f64 * source.height() as f64;
    let mean = if count == 0.0 {
        0.0
    } else {
        let total: f64 = source.pixels().map(|p| luma(p) as f64).sum();
        // quantised to an 8-bit grey level
        ((total / count) * 255.0).round() as f32 / 255.0
    };

    blend(source, factor, |_, _, _| [mean; 3])
}

fn sharpness(source: &Rgba32FImage, factor: f32) -> Rgba32FImage {
    let smoothed = convolve(source, &kernel_for(FilterKind::Smooth));
    blend(source, factor, |x, y, _| {
        let [r, g, b, _] = smoothed.get_pixel(x, y).0;
        [r, g, b]
    })
}

/// Gaussian blur with standard deviation `radius`.
fn gaussian_blur(image: &DynamicImage, radius: f32) -> DynamicImage {
    if radius <= 0.0 {
        return image.clone();
    }
    let blurred = gaussian_blur_f32(&image.to_rgba8(), radius);
    convert_to_color_type(DynamicImage::ImageRgba8(blurred), image.color())
}

/// Mean filter over a `(2r + 1)` square, `r` being `radius` rounded up.
fn box_blur(image: &DynamicImage, radius: f32) -> DynamicImage {
    if radius <= 0.0 {
        return image.clone();
    }
    let radius = radius.ceil() as u32;
    if radius == 0 {
        return image.clone();
    }

    let source = image.to_rgba8();
    let (width, height) = source.dimensions();
    let channels: Vec<GrayImage> = (0..3)
        .map(|c| {
            let plane = GrayImage::from_fn(width, height, |x, y| {
                image::Luma([source.get_pixel(x, y)[c]])
            });
            box_filter(&plane, radius, radius)
        })
        .collect();

    let blurred = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([
            channels[0].get_pixel(x, y)[0],
            channels[1].get_pixel(x, y)[0],
            channels[2].get_pixel(x, y)[0],
            source.get_pixel(x, y)[3],
        ])
    });
    convert_to_color_type(DynamicImage::ImageRgba8(blurred), image.color())
}
