//! Tabla de resultados: acumula filas, las ordena y las dibuja en consola.

use crate::inspector::ImageMetadata;
use crate::ui::{base_table, header_cell};
use comfy_table::{Cell, Color, Row, Table};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortKey {
    Format,
    FileName,
    Dimensions,
    BitDepth,
    ColorMode,
    Compression,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Format,
        SortKey::FileName,
        SortKey::Dimensions,
        SortKey::BitDepth,
        SortKey::ColorMode,
        SortKey::Compression,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Format => "Formato",
            SortKey::FileName => "Nombre",
            SortKey::Dimensions => "Tamaño",
            SortKey::BitDepth => "Profundidad",
            SortKey::ColorMode => "Modo de color",
            SortKey::Compression => "Compresión",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "formato" | "format" => Ok(SortKey::Format),
            "nombre" | "name" | "archivo" => Ok(SortKey::FileName),
            "tamaño" | "tamano" | "size" | "dimensiones" => Ok(SortKey::Dimensions),
            "profundidad" | "depth" | "bits" => Ok(SortKey::BitDepth),
            "color" | "modo" => Ok(SortKey::ColorMode),
            "compresión" | "compresion" | "compression" => Ok(SortKey::Compression),
            _ => Err(format!("Columna `{input}` no reconocida")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "asc" | "ascendente" => Ok(SortDirection::Ascending),
            "desc" | "descendente" => Ok(SortDirection::Descending),
            _ => Err(format!("Dirección `{input}` no reconocida (usa asc o desc)")),
        }
    }
}

/// Filas acumuladas entre cargas. La tabla es dueña de los registros; el
/// inspector solo los produce.
#[derive(Clone, Debug)]
pub struct MetadataTable {
    rows: Vec<ImageMetadata>,
    key: SortKey,
    direction: SortDirection,
}

impl Default for MetadataTable {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            key: SortKey::FileName,
            direction: SortDirection::Ascending,
        }
    }
}

impl MetadataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ImageMetadata] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sort_order(&self) -> (SortKey, SortDirection) {
        (self.key, self.direction)
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = ImageMetadata>) {
        self.rows.extend(records);
        self.resort();
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn sort_by(&mut self, key: SortKey, direction: SortDirection) {
        self.key = key;
        self.direction = direction;
        self.resort();
    }

    fn resort(&mut self) {
        let (key, direction) = (self.key, self.direction);
        self.rows.sort_by(|a, b| {
            let ordering = compare_by(a, b, key);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    pub fn render(&self) -> Table {
        let mut table = base_table();
        table.set_header(
            SortKey::ALL
                .iter()
                .map(|key| header_cell(&self.header_label(*key)))
                .collect::<Vec<_>>(),
        );

        for record in &self.rows {
            table.add_row(Row::from(vec![
                Cell::new(record.format().label()).fg(Color::Cyan),
                Cell::new(record.file_name()).fg(Color::White),
                Cell::new(record.dimensions().to_string()).fg(Color::White),
                Cell::new(record.bit_depth().to_string()).fg(Color::White),
                Cell::new(record.color_mode().label()).fg(Color::White),
                Cell::new(record.compression().label()).fg(Color::White),
            ]));
        }

        table
    }

    fn header_label(&self, key: SortKey) -> String {
        if key != self.key {
            return key.label().to_string();
        }
        let arrow = match self.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        };
        format!("{} {arrow}", key.label())
    }
}

pub fn compare_by(a: &ImageMetadata, b: &ImageMetadata, key: SortKey) -> Ordering {
    match key {
        SortKey::Format => a.format().label().cmp(b.format().label()),
        SortKey::FileName => a
            .file_name()
            .to_lowercase()
            .cmp(&b.file_name().to_lowercase()),
        SortKey::Dimensions => a.dimensions().area().cmp(&b.dimensions().area()),
        // Las profundidades desconocidas quedan al final.
        SortKey::BitDepth => match (a.bit_depth().bits(), b.bit_depth().bits()) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::ColorMode => a.color_mode().label().cmp(b.color_mode().label()),
        SortKey::Compression => a.compression().label().cmp(b.compression().label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::{BitDepth, ColorMode, Compression, Dimensions, FormatVariant};

    fn record(name: &str, width: u32, height: u32, bits: BitDepth) -> ImageMetadata {
        ImageMetadata::new(
            FormatVariant::Png,
            name,
            Dimensions::new(width, height),
            bits,
            ColorMode::Rgb,
            Compression::Deflate,
        )
    }

    fn names(table: &MetadataTable) -> Vec<&str> {
        table.rows().iter().map(|row| row.file_name()).collect()
    }

    #[test]
    fn dimensions_compare_by_area_not_by_width() {
        let wide = record("linea.png", 1000, 1, BitDepth::Bits(24));
        let square = record("cuadrada.png", 20, 20, BitDepth::Bits(24));
        let big = record("ancha.png", 100, 50, BitDepth::Bits(24));

        assert_eq!(compare_by(&square, &wide, SortKey::Dimensions), Ordering::Less);
        assert_eq!(compare_by(&wide, &big, SortKey::Dimensions), Ordering::Less);
        assert_eq!(compare_by(&big, &big, SortKey::Dimensions), Ordering::Equal);
    }

    #[test]
    fn table_sorts_dimensions_numerically() {
        let mut table = MetadataTable::new();
        table.extend([
            record("ancha.png", 100, 50, BitDepth::Bits(24)),
            record("cuadrada.png", 20, 20, BitDepth::Bits(24)),
            record("linea.png", 1000, 1, BitDepth::Bits(24)),
        ]);

        table.sort_by(SortKey::Dimensions, SortDirection::Ascending);
        assert_eq!(names(&table), ["cuadrada.png", "linea.png", "ancha.png"]);

        table.sort_by(SortKey::Dimensions, SortDirection::Descending);
        assert_eq!(names(&table), ["ancha.png", "linea.png", "cuadrada.png"]);
    }

    #[test]
    fn table_defaults_to_name_order_and_keeps_it_on_extend() {
        let mut table = MetadataTable::new();
        table.extend([record("b.png", 1, 1, BitDepth::Bits(8))]);
        table.extend([record("A.png", 1, 1, BitDepth::Bits(8))]);
        assert_eq!(names(&table), ["A.png", "b.png"]);
        assert_eq!(
            table.sort_order(),
            (SortKey::FileName, SortDirection::Ascending)
        );
    }

    #[test]
    fn unknown_bit_depth_sorts_last() {
        let mut table = MetadataTable::new();
        table.extend([
            record("x.png", 1, 1, BitDepth::Unknown),
            record("y.png", 1, 1, BitDepth::Bits(32)),
            record("z.png", 1, 1, BitDepth::Bits(8)),
        ]);
        table.sort_by(SortKey::BitDepth, SortDirection::Ascending);
        assert_eq!(names(&table), ["z.png", "y.png", "x.png"]);
    }

    #[test]
    fn clear_removes_every_row() {
        let mut table = MetadataTable::new();
        table.extend([record("a.png", 1, 1, BitDepth::Bits(8))]);
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.render().row_iter().count(), 0);
    }

    #[test]
    fn sort_keys_parse_spanish_and_english_names() {
        assert_eq!("Tamaño".parse::<SortKey>(), Ok(SortKey::Dimensions));
        assert_eq!("size".parse::<SortKey>(), Ok(SortKey::Dimensions));
        assert_eq!("compresion".parse::<SortKey>(), Ok(SortKey::Compression));
        assert!("peso".parse::<SortKey>().is_err());
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Descending));
    }
}
