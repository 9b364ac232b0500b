//! Desempaquetado de ZIP: un `SourceFile` por cada miembro que no sea directorio.

use super::source::SourceFile;
use crate::inspector::declared_type_for_name;
use crate::options::ScanOptions;
use std::io::{Cursor, Read};
use tracing::warn;
use zip::ZipArchive;

pub fn unpack_archive(bytes: &[u8], options: &ScanOptions) -> Result<Vec<SourceFile>, String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|error| format!("No se pudo interpretar el contenido ZIP: {error}"))?;

    if archive.len() > options.max_archive_entries {
        warn!(
            entries = archive.len(),
            limit = options.max_archive_entries,
            "ZIP con demasiadas entradas; se analizan solo las primeras"
        );
    }

    let mut files = Vec::new();
    for index in 0..archive.len().min(options.max_archive_entries) {
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(error) => {
                warn!(index, %error, "entrada ZIP ilegible");
                continue;
            }
        };

        if entry.is_dir() {
            continue;
        }

        let member_name = entry.name().to_string();
        let limit = options.max_member_bytes;
        if entry.size() > limit {
            warn!(
                entry = %member_name,
                size = entry.size(),
                limit,
                "entrada ZIP demasiado grande; se omite"
            );
            continue;
        }

        // El tamaño declarado puede mentir: se lee un byte de más para detectarlo.
        let mut contents = Vec::new();
        if let Err(error) = entry
            .by_ref()
            .take(limit.saturating_add(1))
            .read_to_end(&mut contents)
        {
            warn!(entry = %member_name, %error, "no se pudo extraer la entrada ZIP");
            continue;
        }
        if contents.len() as u64 > limit {
            warn!(entry = %member_name, limit, "entrada ZIP demasiado grande; se omite");
            continue;
        }

        files.push(SourceFile::new(
            display_name(&member_name),
            declared_type_for_name(&member_name),
            contents,
        ));
    }

    Ok(files)
}

fn display_name(member_name: &str) -> &str {
    member_name.rsplit('/').next().unwrap_or(member_name)
}
