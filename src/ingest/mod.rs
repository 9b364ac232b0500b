//! Ingesta de archivos, carpetas y ZIP hacia el inspector de cabeceras.

mod archive;
mod batch;
mod source;


pub use archive::unpack_archive;
pub use batch::{BatchOutcome, SkippedFile, inspect_all};
pub use source::{SourceFile, load_path};
