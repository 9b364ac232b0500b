//! ImageLens: inspector de cabeceras de imágenes JPEG, PNG, GIF, BMP y TIFF.

pub mod app;
pub mod export;
pub mod formatting;
pub mod ingest;
pub mod inspector;
pub mod options;
pub mod table;
pub mod ui;

pub use inspector::{CoreError, ImageMetadata, extract_metadata};
