// imgmanip/src/processors/batch.rs
use super::backend::{ImageBackend, RustBackend};
use crate::core::{Config, ImageProcessor, ImageToolError, ProcessingStats};
use std::path::PathBuf;

/// Runs every input through the pipeline, one at a time, in order.
pub struct BatchProcessor<B: ImageBackend = RustBackend> {
    processor: ImageProcessor<B>,
}

impl BatchProcessor<RustBackend> {
    pub fn new(config: Config) -> Self {
        Self {
            processor: ImageProcessor::new(config),
        }
    }
}

impl<B: ImageBackend> BatchProcessor<B> {
    pub fn with_processor(processor: ImageProcessor<B>) -> Self {
        Self { processor }
    }

    /// Processes `config.inputs`. Per-file failures are logged and recorded
    /// in the returned stats; they never stop the run.
    pub fn run(&self) -> ProcessingStats {
        let inputs: &[PathBuf] = &self.processor.config().inputs;
        let mut stats = ProcessingStats::default();

        log::debug!("Processing {} input file(s)", inputs.len());

        for (index, input_path) in inputs.iter().enumerate() {
            match self.processor.process_path(input_path, index) {
                Ok(outcome) => {
                    stats.processed_count += 1;
                    if outcome.saved.is_some() {
                        stats.saved_count += 1;
                    }
                    if outcome.thumbnail.is_some() {
                        stats.thumbnail_count += 1;
                    }
                }
                Err(ImageToolError::NotFound(path)) => {
                    log::warn!("{} not found. Skipping...", path.display());
                    stats
                        .skipped
                        .push((path, "file not found".to_string()));
                }
                Err(e) => {
                    log::warn!("Skipping {}: {}", input_path.display(), e);
                    stats.skipped.push((input_path.clone(), e.to_string()));
                }
            }
        }

        log::info!(
            "Processed {} of {} images ({} saved, {} thumbnails)",
            stats.processed_count,
            inputs.len(),
            stats.saved_count,
            stats.thumbnail_count
        );

        stats
    }
}
