//! Exportación de la tabla de resultados en distintos formatos.

use crate::formatting::format_timestamp;
use crate::inspector::ImageMetadata;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Json,
    Csv,
    Txt,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::Txt => "TXT",
            ExportFormat::Xlsx => "Excel",
        }
    }
}

pub fn parse_export_format(input: &str) -> Result<ExportFormat, String> {
    match input.to_lowercase().as_str() {
        "json" => Ok(ExportFormat::Json),
        "csv" => Ok(ExportFormat::Csv),
        "txt" | "text" => Ok(ExportFormat::Txt),
        "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
        _ => Err("Formato de exportacion no reconocido".to_string()),
    }
}

pub fn export_table(
    rows: &[ImageMetadata],
    format: ExportFormat,
    path: &Path,
) -> Result<(), String> {
    match format {
        ExportFormat::Json => export_json(rows, path),
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Txt => export_txt(rows, path),
        ExportFormat::Xlsx => export_xlsx(rows, path),
    }
}

/// Fila plana con los mismos textos que muestra la tabla.
#[derive(Serialize)]
struct ExportRow {
    format: &'static str,
    file_name: String,
    size: String,
    bit_depth: String,
    color_mode: &'static str,
    compression: &'static str,
}

impl From<&ImageMetadata> for ExportRow {
    fn from(record: &ImageMetadata) -> Self {
        Self {
            format: record.format().label(),
            file_name: record.file_name().to_string(),
            size: record.dimensions().to_string(),
            bit_depth: record.bit_depth().to_string(),
            color_mode: record.color_mode().label(),
            compression: record.compression().label(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    total: usize,
    images: &'a [ImageMetadata],
}

fn export_json(rows: &[ImageMetadata], path: &Path) -> Result<(), String> {
    let report = JsonReport {
        generated_at: format_timestamp(Local::now()),
        total: rows.len(),
        images: rows,
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("No se pudo serializar JSON: {err}"))?;
    fs::write(path, json).map_err(|err| format!("No se pudo guardar el JSON: {err}"))
}

fn export_csv(rows: &[ImageMetadata], path: &Path) -> Result<(), String> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|err| format!("No se pudo crear el CSV: {err}"))?;
    for record in rows {
        writer
            .serialize(ExportRow::from(record))
            .map_err(|err| format!("No se pudo escribir el CSV: {err}"))?;
    }
    writer
        .flush()
        .map_err(|err| format!("No se pudo guardar el CSV: {err}"))
}

fn export_txt(rows: &[ImageMetadata], path: &Path) -> Result<(), String> {
    let mut output = String::new();
    output.push_str("Reporte de imágenes\n");
    output.push_str("===================\n");
    output.push_str(&format!("Generado: {}\n\n", format_timestamp(Local::now())));

    if rows.is_empty() {
        output.push_str("(Sin datos)\n");
    }

    for record in rows {
        let row = ExportRow::from(record);
        output.push_str(&format!(
            "- {} [{}] {} · {} bits · {} · {}\n",
            row.file_name, row.format, row.size, row.bit_depth, row.color_mode, row.compression
        ));
    }

    fs::write(path, output).map_err(|err| format!("No se pudo guardar el TXT: {err}"))
}

fn export_xlsx(rows: &[ImageMetadata], path: &Path) -> Result<(), String> {
    const HEADERS: [(&str, f64); 6] = [
        ("Formato", 10.0),
        ("Nombre", 36.0),
        ("Tamaño", 14.0),
        ("Profundidad", 12.0),
        ("Modo de color", 14.0),
        ("Compresión", 22.0),
    ];

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Imagenes")
        .map_err(|err| format!("No se pudo crear hoja de calculo: {err}"))?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x1F4E78))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    let cell_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Left);

    for (column, (title, width)) in HEADERS.iter().enumerate() {
        let column = column as u16;
        worksheet
            .set_column_width(column, *width)
            .map_err(|err| format!("No se pudo ajustar columnas: {err}"))?;
        worksheet
            .write_with_format(0, column, *title, &header_format)
            .map_err(|err| format!("No se pudo escribir el XLSX: {err}"))?;
    }

    for (index, record) in rows.iter().enumerate() {
        let row = ExportRow::from(record);
        let row_index = (index + 1) as u32;
        let values = [
            row.format,
            row.file_name.as_str(),
            row.size.as_str(),
            row.bit_depth.as_str(),
            row.color_mode,
            row.compression,
        ];
        for (column, value) in values.iter().enumerate() {
            worksheet
                .write_with_format(row_index, column as u16, *value, &cell_format)
                .map_err(|err| format!("No se pudo escribir el XLSX: {err}"))?;
        }
    }

    workbook
        .save(path)
        .map_err(|err| format!("No se pudo guardar el XLSX: {err}"))
}
