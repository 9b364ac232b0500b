//! Modo de color a partir del indicador de canales de cada formato.

use super::error::CoreError;
use super::format::FormatVariant;
use super::header::{HeaderField, Rule};
use super::record::ColorMode;

const FIELD: &str = "el modo de color";

pub fn rule(variant: FormatVariant) -> Rule<ColorMode> {
    match variant {
        FormatVariant::Jpeg => Rule::Constant(ColorMode::Rgb),
        // Tipo de color del IHDR: grises y paleta también se informan como RGB.
        FormatVariant::Png => Rule::Read(HeaderField::Byte(25), png_color_type),
        FormatVariant::Gif => Rule::Constant(ColorMode::Indexed),
        FormatVariant::Bmp => Rule::Read(HeaderField::U16Le(28), bmp_bit_count),
        FormatVariant::Tiff => Rule::Read(HeaderField::U16Le(16), tiff_samples_per_pixel),
        FormatVariant::Unsupported => Rule::Constant(ColorMode::Unknown),
    }
}

pub fn extract(buffer: &[u8], variant: FormatVariant) -> Result<ColorMode, CoreError> {
    rule(variant).apply(buffer, FIELD)
}

fn png_color_type(value: u32) -> ColorMode {
    if value == 6 {
        ColorMode::Rgba
    } else {
        ColorMode::Rgb
    }
}

fn bmp_bit_count(value: u32) -> ColorMode {
    match value {
        8 => ColorMode::L,
        24 => ColorMode::Rgb,
        32 => ColorMode::Rgba,
        _ => ColorMode::Unknown,
    }
}

fn tiff_samples_per_pixel(value: u32) -> ColorMode {
    match value {
        1 => ColorMode::Gray,
        3 => ColorMode::Rgb,
        4 => ColorMode::Rgba,
        _ => ColorMode::Unknown,
    }
}
