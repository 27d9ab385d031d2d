//! The imaging capabilities the pipeline needs, behind one trait.
//!
//! [`ImageBackend`] is the boundary between the operation pipeline and the
//! imaging stack. [`RustBackend`] implements it with the `image` and
//! `imageproc` crates by composing the loader, filter, enhancer, resizer,
//! encoder and metadata processors.

use super::encoder::Encoder;
use super::enhancer::apply_enhancer;
use super::filters::apply_filter;
use super::loader::{ImageHandle, Loader};
use super::metadata::MetadataProcessor;
use super::resizer::Resizer;
use crate::core::{Config, EnhancerKind, FilterKind, FlipDirection, Result, Rotation};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

pub trait ImageBackend {
    /// Open and decode `path`, remembering its on-disk format.
    fn decode(&self, path: &Path) -> Result<ImageHandle>;

    /// Human-readable property block for the info dump.
    fn describe(&self, handle: &ImageHandle) -> String;

    fn filter(&self, image: &DynamicImage, kind: FilterKind) -> DynamicImage;

    fn enhance(&self, image: &DynamicImage, kind: EnhancerKind, factor: f32) -> DynamicImage;

    fn flip(&self, image: &DynamicImage, direction: FlipDirection) -> DynamicImage;

    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    fn rotate(&self, image: &DynamicImage, rotation: Rotation) -> DynamicImage;

    /// Shrunk copy for a thumbnail `width` pixels wide, plus the bounding
    /// box it was fitted into.
    fn thumbnail(&self, image: &DynamicImage, width: u32) -> ((u32, u32), DynamicImage);

    fn encode(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()>;
}

pub struct RustBackend {
    loader: Loader,
    resizer: Resizer,
    encoder: Encoder,
    metadata: MetadataProcessor,
}

impl RustBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            loader: Loader::new(),
            resizer: Resizer::new(config.algorithm),
            encoder: Encoder::new(config.quality),
            metadata: MetadataProcessor::new(),
        }
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<ImageHandle> {
        self.loader.load(path)
    }

    fn describe(&self, handle: &ImageHandle) -> String {
        self.metadata.describe(handle)
    }

    fn filter(&self, image: &DynamicImage, kind: FilterKind) -> DynamicImage {
        apply_filter(image, kind)
    }

    fn enhance(&self, image: &DynamicImage, kind: EnhancerKind, factor: f32) -> DynamicImage {
        apply_enhancer(image, kind, factor)
    }

    fn flip(&self, image: &DynamicImage, direction: FlipDirection) -> DynamicImage {
        Resizer::flip(image, direction)
    }

    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        self.resizer.resize_exact(image, width, height)
    }

    fn rotate(&self, image: &DynamicImage, rotation: Rotation) -> DynamicImage {
        Resizer::rotate(image, rotation)
    }

    fn thumbnail(&self, image: &DynamicImage, width: u32) -> ((u32, u32), DynamicImage) {
        self.resizer.thumbnail(image, width)
    }

    fn encode(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
        self.encoder.save(image, path, format)
    }
}
