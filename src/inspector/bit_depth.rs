//! Profundidad de bits por píxel.

use super::error::CoreError;
use super::format::FormatVariant;
use super::header::{HeaderField, Rule};
use super::record::BitDepth;

const FIELD: &str = "la profundidad de bits";

pub fn rule(variant: FormatVariant) -> Rule<BitDepth> {
    match variant {
        // Se asume JPEG baseline; no se mira la precisión real de las muestras.
        FormatVariant::Jpeg => Rule::Constant(BitDepth::Bits(24)),
        // Byte de profundidad del IHDR. Un 8 se informa como 32 bits (aproximación).
        FormatVariant::Png => Rule::Read(HeaderField::Byte(24), |depth| {
            BitDepth::Bits(if depth == 8 { 32 } else { 24 })
        }),
        FormatVariant::Gif => Rule::Constant(BitDepth::Bits(8)),
        // biBitCount del BITMAPINFOHEADER.
        FormatVariant::Bmp => Rule::Read(HeaderField::U16Le(28), BitDepth::Bits),
        // Posición fija en lugar de recorrer el IFD.
        FormatVariant::Tiff => Rule::Read(HeaderField::U16Le(14), BitDepth::Bits),
        FormatVariant::Unsupported => Rule::Constant(BitDepth::Unknown),
    }
}

pub fn extract(buffer: &[u8], variant: FormatVariant) -> Result<BitDepth, CoreError> {
    rule(variant).apply(buffer, FIELD)
}
