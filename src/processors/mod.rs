// imgmanip/src/processors/mod.rs
pub mod backend;
mod batch;
mod encoder;
mod enhancer;
mod filters;
mod loader;
mod metadata;
mod resizer;

pub use backend::{ImageBackend, RustBackend};
pub use batch::BatchProcessor;
pub use encoder::Encoder;
pub use enhancer::apply_enhancer;
pub use filters::{apply_filter, kernel_for, Kernel};
pub use loader::{ImageHandle, Loader};
pub use metadata::MetadataProcessor;
pub use resizer::Resizer;
