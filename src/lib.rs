pub mod cli;
pub mod core;
pub mod processors;
pub mod utils;

pub use cli::{Algorithm, Cli, Flip, Rotate};
pub use self::core::{
    is_valid_enhancer, is_valid_filter, validate_config, Config, EnhancerKind, FilterKind,
    FlipDirection, ImageProcessor, ImageToolError, Operation, ProcessingState, ProcessingStats,
    ResizeAlgorithm, ResizeMode, Result, Rotation,
};
pub use processors::{BatchProcessor, ImageBackend, ImageHandle, Loader, RustBackend};
pub use utils::{manip_output_path, thumbnail_output_path};

// Re-export commonly used types
pub use image::DynamicImage;
