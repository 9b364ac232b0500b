//! Clasificación del tipo declarado en una de las variantes soportadas.

use image::ImageFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const OCTET_STREAM: &str = "application/octet-stream";

const ZIP_TYPES: [&str; 2] = ["application/zip", "application/x-zip-compressed"];

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormatVariant {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Tiff,
    Unsupported,
}

impl FormatVariant {
    /// Acepta un tipo MIME (`image/png`) o una extensión (`png`, `.PNG`).
    pub fn from_declared_type(declared: &str) -> Self {
        let normalized = declared.trim().to_ascii_lowercase();
        let token = match normalized.split_once('/') {
            Some(("image", subtype)) => subtype,
            Some(_) => return Self::Unsupported,
            None => normalized.trim_start_matches('.'),
        };

        match token {
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            "gif" => Self::Gif,
            "bmp" => Self::Bmp,
            "tif" | "tiff" => Self::Tiff,
            _ => Self::Unsupported,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::Tiff => "TIFF",
            Self::Unsupported => "UNSUPPORTED",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
            Self::Unsupported => OCTET_STREAM,
        }
    }

    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    pub(crate) fn image_format(self) -> Option<ImageFormat> {
        match self {
            Self::Jpeg => Some(ImageFormat::Jpeg),
            Self::Png => Some(ImageFormat::Png),
            Self::Gif => Some(ImageFormat::Gif),
            Self::Bmp => Some(ImageFormat::Bmp),
            Self::Tiff => Some(ImageFormat::Tiff),
            Self::Unsupported => None,
        }
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Deriva el tipo declarado a partir de la extensión del nombre.
///
/// Se usa con los miembros de un ZIP, que no traen tipo propio, y con los
/// archivos leídos del disco.
pub fn declared_type_for_name(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    FormatVariant::from_declared_type(extension).mime_type()
}

pub fn is_archive_type(declared: &str) -> bool {
    let normalized = declared.trim().to_ascii_lowercase();
    ZIP_TYPES.contains(&normalized.as_str())
}

pub fn is_archive_name(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}
