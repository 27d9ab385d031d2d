// imgmanip/src/processors/filters.rs
use crate::core::FilterKind;
use crate::utils::convert_to_color_type;
use image::{DynamicImage, ImageBuffer, Rgb, Rgb32FImage, Rgba, Rgba32FImage};

/// A square convolution kernel. Output is `sum(weight * pixel) / scale +
/// offset`, with `offset` expressed in 8-bit units.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    pub size: u32,
    pub weights: &'static [f32],
    pub scale: f32,
    pub offset: f32,
}

#[rustfmt::skip]
const BLUR: [f32; 25] = [
    1.0, 1.0, 1.0, 1.0, 1.0,
    1.0, 0.0, 0.0, 0.0, 1.0,
    1.0, 0.0, 0.0, 0.0, 1.0,
    1.0, 0.0, 0.0, 0.0, 1.0,
    1.0, 1.0, 1.0, 1.0, 1.0,
];

#[rustfmt::skip]
const CONTOUR: [f32; 9] = [
    -1.0, -1.0, -1.0,
    -1.0,  8.0, -1.0,
    -1.0, -1.0, -1.0,
];

#[rustfmt::skip]
const DETAIL: [f32; 9] = [
     0.0, -1.0,  0.0,
    -1.0, 10.0, -1.0,
     0.0, -1.0,  0.0,
];

#[rustfmt::skip]
const EDGE_ENHANCE: [f32; 9] = [
    -1.0, -1.0, -1.0,
    -1.0, 10.0, -1.0,
    -1.0, -1.0, -1.0,
];

#[rustfmt::skip]
const EDGE_ENHANCE_MORE: [f32; 9] = [
    -1.0, -1.0, -1.0,
    -1.0,  9.0, -1.0,
    -1.0, -1.0, -1.0,
];

#[rustfmt::skip]
const EMBOSS: [f32; 9] = [
    -1.0, 0.0, 0.0,
     0.0, 1.0, 0.0,
     0.0, 0.0, 0.0,
];

#[rustfmt::skip]
const FIND_EDGES: [f32; 9] = [
    -1.0, -1.0, -1.0,
    -1.0,  8.0, -1.0,
    -1.0, -1.0, -1.0,
];

#[rustfmt::skip]
const SHARPEN: [f32; 9] = [
    -2.0, -2.0, -2.0,
    -2.0, 32.0, -2.0,
    -2.0, -2.0, -2.0,
];

#[rustfmt::skip]
const SMOOTH: [f32; 9] = [
    1.0, 1.0, 1.0,
    1.0, 5.0, 1.0,
    1.0, 1.0, 1.0,
];

#[rustfmt::skip]
const SMOOTH_MORE: [f32; 25] = [
    1.0, 1.0,  1.0, 1.0, 1.0,
    1.0, 5.0,  5.0, 5.0, 1.0,
    1.0, 5.0, 44.0, 5.0, 1.0,
    1.0, 5.0,  5.0, 5.0, 1.0,
    1.0, 1.0,  1.0, 1.0, 1.0,
];

pub fn kernel_for(kind: FilterKind) -> Kernel {
    let (size, weights, scale, offset): (u32, &'static [f32], f32, f32) = match kind {
        FilterKind::Blur => (5, &BLUR, 16.0, 0.0),
        FilterKind::Contour => (3, &CONTOUR, 1.0, 255.0),
        FilterKind::Detail => (3, &DETAIL, 6.0, 0.0),
        FilterKind::EdgeEnhance => (3, &EDGE_ENHANCE, 2.0, 0.0),
        FilterKind::EdgeEnhanceMore => (3, &EDGE_ENHANCE_MORE, 1.0, 0.0),
        FilterKind::Emboss => (3, &EMBOSS, 1.0, 128.0),
        FilterKind::FindEdges => (3, &FIND_EDGES, 1.0, 0.0),
        FilterKind::Sharpen => (3, &SHARPEN, 16.0, 0.0),
        FilterKind::Smooth => (3, &SMOOTH, 13.0, 0.0),
        FilterKind::SmoothMore => (5, &SMOOTH_MORE, 100.0, 0.0),
    };
    Kernel {
        size,
        weights,
        scale,
        offset,
    }
}

pub fn apply_filter(image: &DynamicImage, kind: FilterKind) -> DynamicImage {
    let kernel = kernel_for(kind);
    log::debug!("Applying {} ({}x{} kernel)", kind, kernel.size, kernel.size);

    let filtered = convolve(&image.to_rgba32f(), &kernel);
    convert_to_color_type(DynamicImage::ImageRgba32F(filtered), image.color())
}

/// Correlates the colour channels with `kernel`, padding by continuity.
/// Alpha is copied through.
pub fn convolve(source: &Rgba32FImage, kernel: &Kernel) -> Rgba32FImage {
    let (width, height) = source.dimensions();
    let colour = Rgb32FImage::from_fn(width, height, |x, y| {
        let [r, g, b, _] = source.get_pixel(x, y).0;
        Rgb([r, g, b])
    });
    let offset = kernel.offset / 255.0;

    let filtered: Rgb32FImage =
        imageproc::filter::Kernel::new(kernel.weights, kernel.size, kernel.size).filter(
            &colour,
            |out, acc: f32| *out = (acc / kernel.scale + offset).clamp(0.0, 1.0),
        );

    ImageBuffer::from_fn(width, height, |x, y| {
        let [r, g, b] = filtered.get_pixel(x, y).0;
        Rgba([r, g, b, source.get_pixel(x, y)[3]])
    })
}
