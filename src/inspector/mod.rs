//! Inspección de cabeceras de imágenes JPEG, PNG, GIF, BMP y TIFF.
//!
//! El punto de entrada es [`extract_metadata`]: clasifica el tipo declarado,
//! lee los campos de cabecera de cada formato y arma un [`ImageMetadata`].
//! Si cualquier campo no se puede leer, no se devuelve un registro parcial.

pub mod bit_depth;
pub mod color_mode;
pub mod compression;
pub mod dimensions;
mod error;
mod format;
pub mod header;
mod record;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use format::{
    FormatVariant, OCTET_STREAM, declared_type_for_name, is_archive_name, is_archive_type,
};
pub use record::{BitDepth, ColorMode, Compression, Dimensions, ImageMetadata};

pub fn extract_metadata(
    buffer: &[u8],
    declared_type: &str,
    file_name: &str,
) -> Result<ImageMetadata, CoreError> {
    let format = FormatVariant::from_declared_type(declared_type);
    if !format.is_supported() {
        return Err(CoreError::Unsupported(declared_type.to_string()));
    }

    let dimensions = dimensions::extract(buffer, format)?;
    let bit_depth = bit_depth::extract(buffer, format)?;
    let color_mode = color_mode::extract(buffer, format)?;
    let compression = compression::extract(buffer, format)?;

    Ok(ImageMetadata::new(
        format,
        file_name,
        dimensions,
        bit_depth,
        color_mode,
        compression,
    ))
}
