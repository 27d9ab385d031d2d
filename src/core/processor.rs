// imgmanip/src/core/processor.rs
use super::operations::{parse_enhancers, parse_filters};
use super::{Config, EnhancerKind, FlipDirection, Operation, Result};
use crate::processors::{ImageBackend, ImageHandle, Resizer, RustBackend};
use crate::utils::{display_name, manip_output_path, thumbnail_output_path};
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

/// Per-file state threaded through the pipeline.
#[derive(Debug, Clone)]
pub struct ProcessingState {
    pub image: DynamicImage,
    pub source: PathBuf,
    pub format: ImageFormat,
    pub index: usize,
    pub changed: bool,
}

impl ProcessingState {
    pub fn new(handle: ImageHandle, index: usize) -> Self {
        Self {
            image: handle.image,
            source: handle.path,
            format: handle.format,
            index,
            changed: false,
        }
    }

    /// Swaps in the output of an operation and marks the file for saving.
    fn replace(self, image: DynamicImage) -> Self {
        Self {
            image,
            changed: true,
            ..self
        }
    }
}

/// What was written for one input file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub saved: Option<PathBuf>,
    pub thumbnail: Option<PathBuf>,
}

pub struct ImageProcessor<B: ImageBackend = RustBackend> {
    config: Config,
    backend: B,
}

impl ImageProcessor<RustBackend> {
    pub fn new(config: Config) -> Self {
        let backend = RustBackend::new(&config);
        Self { config, backend }
    }
}

impl<B: ImageBackend> ImageProcessor<B> {
    pub fn with_backend(config: Config, backend: B) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Decodes `path` and runs it through [`process`](Self::process).
    pub fn process_path<P: AsRef<Path>>(&self, path: P, index: usize) -> Result<FileOutcome> {
        let handle = self.backend.decode(path.as_ref())?;
        self.process(handle, index)
    }

    /// Runs every requested step, in order, on one decoded image.
    pub fn process(&self, handle: ImageHandle, index: usize) -> Result<FileOutcome> {
        if self.config.info {
            println!("{}", self.backend.describe(&handle));
        }

        let thumbnail = match self.config.thumbnail {
            Some(width) => Some(self.write_thumbnail(&handle, width, index)?),
            None => None,
        };

        let state = self.transform(ProcessingState::new(handle, index));

        let saved = if state.changed {
            Some(self.save(&state)?)
        } else {
            log::debug!("{} unchanged, nothing to save", state.source.display());
            None
        };

        Ok(FileOutcome { saved, thumbnail })
    }

    /// The image-replacing steps, in the order they run. Unknown filter and
    /// enhancer names are dropped here with a warning.
    pub fn plan(&self) -> Vec<Operation> {
        let config = &self.config;
        let mut plan = Vec::new();

        if let Some(names) = &config.filters {
            plan.extend(parse_filters(names).into_iter().map(Operation::Filter));
        }

        if let Some(names) = &config.enhancers {
            plan.extend(
                parse_enhancers(names)
                    .into_iter()
                    .map(|kind| Operation::Enhance(kind, config.factor)),
            );
        }

        plan.extend(config.flips.iter().copied().map(Operation::Flip));
        plan.extend(config.resize.map(Operation::Resize));
        plan.extend(config.rotate.map(Operation::Rotate));

        plan
    }

    pub fn transform(&self, state: ProcessingState) -> ProcessingState {
        self.plan()
            .into_iter()
            .fold(state, |state, operation| self.apply(state, operation))
    }

    pub fn apply(&self, state: ProcessingState, operation: Operation) -> ProcessingState {
        let name = state.source.display().to_string();
        let backend = &self.backend;

        let image = match operation {
            Operation::Filter(kind) => {
                let image = backend.filter(&state.image, kind);
                log::info!("{} filter applied to {}", kind, name);
                image
            }
            Operation::Enhance(kind, factor) => {
                let image = backend.enhance(&state.image, kind, factor);
                match kind {
                    EnhancerKind::GaussianBlur | EnhancerKind::BoxBlur => {
                        log::info!("{} filter applied to {} [radius = {}]", kind, name, factor)
                    }
                    _ if kind.uses_factor() => {
                        log::info!("{} enhancer applied to {} [factor = {}]", kind, name, factor)
                    }
                    _ => log::info!("{} enhancer applied to {}", kind, name),
                }
                image
            }
            Operation::Flip(direction) => {
                let image = backend.flip(&state.image, direction);
                match direction {
                    FlipDirection::Horizontal => log::info!("{} flipped horizontally.", name),
                    FlipDirection::Vertical => log::info!("{} flipped vertically.", name),
                }
                image
            }
            Operation::Resize(mode) => {
                let current = (state.image.width(), state.image.height());
                let (width, height) = Resizer::calculate_dimensions(current, mode);
                let image = backend.resize(&state.image, width, height);
                log::info!("{} resized to: ({}, {})", name, width, height);
                image
            }
            Operation::Rotate(rotation) => {
                let image = backend.rotate(&state.image, rotation);
                log::info!("{} rotated {} degrees CCW.", name, rotation.degrees());
                image
            }
        };

        state.replace(image)
    }

    fn write_thumbnail(&self, handle: &ImageHandle, width: u32, index: usize) -> Result<PathBuf> {
        let ((box_width, box_height), thumb) = self.backend.thumbnail(&handle.image, width);
        let out_path = thumbnail_output_path(&handle.path, box_width, box_height, index);

        self.backend.encode(&thumb, &out_path, handle.format)?;
        println!(
            "Thumbnail of {} generated: {}",
            handle.path.display(),
            display_name(&out_path)
        );

        Ok(out_path)
    }

    fn save(&self, state: &ProcessingState) -> Result<PathBuf> {
        let out_path = manip_output_path(&state.source, state.index);
        self.backend.encode(&state.image, &out_path, state.format)?;
        println!("New file saved as: {}", out_path.display());
        Ok(out_path)
    }
}
