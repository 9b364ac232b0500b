//! Esquema de compresión. Solo TIFF varía por archivo.

use super::error::CoreError;
use super::format::FormatVariant;
use super::header::{HeaderField, Rule};
use super::record::Compression;

const FIELD: &str = "la compresión";

pub fn rule(variant: FormatVariant) -> Rule<Compression> {
    match variant {
        FormatVariant::Jpeg => Rule::Constant(Compression::Jpeg),
        FormatVariant::Png => Rule::Constant(Compression::Deflate),
        FormatVariant::Gif => Rule::Constant(Compression::Lzw),
        FormatVariant::Bmp => Rule::Constant(Compression::None),
        FormatVariant::Tiff => Rule::Read(HeaderField::U16Le(20), tiff_compression),
        FormatVariant::Unsupported => Rule::Constant(Compression::Unknown),
    }
}

pub fn extract(buffer: &[u8], variant: FormatVariant) -> Result<Compression, CoreError> {
    rule(variant).apply(buffer, FIELD)
}

fn tiff_compression(value: u32) -> Compression {
    match value {
        1 => Compression::None,
        5 => Compression::Lzw,
        7 => Compression::Jpeg,
        _ => Compression::Varies,
    }
}
