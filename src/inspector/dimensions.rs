//! Tamaño del raster, leído por el decodificador de `image` sin decodificar píxeles.

use super::error::CoreError;
use super::format::FormatVariant;
use super::record::Dimensions;
use image::ImageReader;
use std::io::Cursor;

pub fn extract(buffer: &[u8], variant: FormatVariant) -> Result<Dimensions, CoreError> {
    let format = variant
        .image_format()
        .ok_or_else(|| CoreError::Unsupported(variant.label().to_string()))?;

    let (width, height) = ImageReader::with_format(Cursor::new(buffer), format)
        .into_dimensions()
        .map_err(|_| CoreError::truncated("las dimensiones", None, buffer.len()))?;

    Ok(Dimensions::new(width, height))
}
