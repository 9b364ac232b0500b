//! Registro de metadata producido por el inspector.

use super::format::FormatVariant;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Cantidad de píxeles; es la clave con la que se ordena la columna de tamaño.
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (width, height) = value
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("Tamaño `{value}` sin separador `x`"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|error| format!("Tamaño `{value}` inválido: {error}"))
        };
        Ok(Self::new(parse(width)?, parse(height)?))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BitDepth {
    Bits(u32),
    Unknown,
}

impl BitDepth {
    pub fn bits(self) -> Option<u32> {
        match self {
            Self::Bits(bits) => Some(bits),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bits(bits) => write!(f, "{bits}"),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

// Se serializa como número o como la etiqueta "Unknown", igual que en la tabla.
impl Serialize for BitDepth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bits(bits) => serializer.serialize_u32(*bits),
            Self::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for BitDepth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bits(u32),
            Label(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bits(bits) => Ok(Self::Bits(bits)),
            Raw::Label(label) if label.eq_ignore_ascii_case("unknown") => Ok(Self::Unknown),
            Raw::Label(label) => Err(de::Error::custom(format!(
                "profundidad de bits inválida: {label}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ColorMode {
    #[serde(rename = "RGB")]
    Rgb,
    #[serde(rename = "RGBA")]
    Rgba,
    Indexed,
    Gray,
    L,
    Unknown,
}

impl ColorMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Indexed => "Indexed",
            Self::Gray => "Gray",
            Self::L => "L",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Compression {
    None,
    #[serde(rename = "JPEG Compression")]
    Jpeg,
    #[serde(rename = "Deflate Compression")]
    Deflate,
    #[serde(rename = "LZW Compression")]
    Lzw,
    Varies,
    Unknown,
}

impl Compression {
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Jpeg => "JPEG Compression",
            Self::Deflate => "Deflate Compression",
            Self::Lzw => "LZW Compression",
            Self::Varies => "Varies",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Una fila de resultados: todo se deriva del buffer y del tipo declarado.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    format: FormatVariant,
    file_name: String,
    dimensions: Dimensions,
    bit_depth: BitDepth,
    color_mode: ColorMode,
    compression: Compression,
}

impl ImageMetadata {
    pub(crate) fn new(
        format: FormatVariant,
        file_name: impl Into<String>,
        dimensions: Dimensions,
        bit_depth: BitDepth,
        color_mode: ColorMode,
        compression: Compression,
    ) -> Self {
        Self {
            format,
            file_name: file_name.into(),
            dimensions,
            bit_depth,
            color_mode,
            compression,
        }
    }

    pub fn format(&self) -> FormatVariant {
        self.format
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }
}
