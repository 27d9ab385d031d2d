// imgmanip/src/core/mod.rs
pub mod operations;
pub mod processor;

use std::path::PathBuf;
use thiserror::Error;

pub use operations::{is_valid_enhancer, is_valid_filter, EnhancerKind, FilterKind, Operation};
pub use processor::{FileOutcome, ImageProcessor, ProcessingState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

/// The single resize directive a run may carry.
///
/// Proportional forms are resolved against the image's *current* size when
/// the resize step runs, not the size it was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    Exact(u32, u32),
    Width(u32),
    Height(u32),
    WidthProportional(u32),
    HeightProportional(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Horizontal,
    Vertical,
}

/// Counter-clockwise rotation in 90 degree steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Ccw90,
    Ccw180,
    Ccw270,
}

impl Rotation {
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Ccw90 => 90,
            Rotation::Ccw180 => 180,
            Rotation::Ccw270 => 270,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    pub info: bool,
    pub filters: Option<Vec<String>>,
    pub enhancers: Option<Vec<String>>,
    pub factor: f32,
    /// Thumbnail width, present only when a thumbnail was requested.
    pub thumbnail: Option<u32>,
    pub flips: Vec<FlipDirection>,
    pub rotate: Option<Rotation>,
    pub resize: Option<ResizeMode>,
    pub algorithm: ResizeAlgorithm,
    pub quality: u8,
    pub verbose: bool,
}

pub const DEFAULT_FACTOR: f32 = 1.2;
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 128;
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            info: false,
            filters: None,
            enhancers: None,
            factor: DEFAULT_FACTOR,
            thumbnail: None,
            flips: Vec::new(),
            rotate: None,
            resize: None,
            algorithm: ResizeAlgorithm::Bicubic,
            quality: DEFAULT_JPEG_QUALITY,
            verbose: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() {
            return Err(ImageToolError::InvalidParameter(format!(
                "Factor must be a finite number, got {}",
                self.factor
            )));
        }

        if self.quality == 0 || self.quality > 100 {
            return Err(ImageToolError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        if self.thumbnail == Some(0) {
            return Err(ImageToolError::InvalidParameter(
                "Thumbnail width must be at least 1".to_string(),
            ));
        }

        let zero_size = match self.resize {
            Some(ResizeMode::Exact(w, h)) => w == 0 || h == 0,
            Some(ResizeMode::Width(v))
            | Some(ResizeMode::Height(v))
            | Some(ResizeMode::WidthProportional(v))
            | Some(ResizeMode::HeightProportional(v)) => v == 0,
            None => false,
        };
        if zero_size {
            return Err(ImageToolError::InvalidParameter(
                "Resize dimensions must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub processed_count: usize,
    pub saved_count: usize,
    pub thumbnail_count: usize,
    pub skipped: Vec<(PathBuf, String)>,
}

impl ProcessingStats {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

#[derive(Error, Debug)]
pub enum ImageToolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

pub type Result<T> = std::result::Result<T, ImageToolError>;

pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()
}
