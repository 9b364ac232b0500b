//! Lectura de archivos del disco como buffers completos en memoria.

use super::archive::unpack_archive;
use crate::inspector::{OCTET_STREAM, declared_type_for_name, is_archive_name, is_archive_type};
use crate::options::ScanOptions;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Un archivo listo para inspeccionar: contenido, tipo declarado y nombre visible.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceFile {
    pub file_name: String,
    pub declared_type: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(
        file_name: impl Into<String>,
        declared_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            declared_type: declared_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Carga un archivo, un directorio o un ZIP.
///
/// Los archivos ilegibles dentro de un directorio se omiten con un aviso en el
/// log; un error sobre la ruta indicada se devuelve al llamador.
pub fn load_path(path: &Path, options: &ScanOptions) -> Result<Vec<SourceFile>, String> {
    let metadata = fs::metadata(path)
        .map_err(|error| format!("No se pudo acceder a `{}`: {error}", path.display()))?;

    if metadata.is_dir() {
        return Ok(load_directory(path, options));
    }

    load_file(path, options)
}

fn load_directory(path: &Path, options: &ScanOptions) -> Vec<SourceFile> {
    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                warn!(%error, "entrada de directorio ilegible");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
    {
        match load_file(entry.path(), options) {
            Ok(loaded) => files.extend(loaded),
            Err(message) => warn!(path = %entry.path().display(), "{message}"),
        }
    }

    files
}

fn load_file(path: &Path, options: &ScanOptions) -> Result<Vec<SourceFile>, String> {
    let bytes = fs::read(path)
        .map_err(|error| format!("No se pudo leer `{}`: {error}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let declared_type = declared_type_for_file(&file_name, &bytes);

    if options.expand_archives && (is_archive_type(&declared_type) || is_archive_name(&file_name))
    {
        debug!(archive = %file_name, "expandiendo ZIP");
        return unpack_archive(&bytes, options)
            .map_err(|message| format!("`{}`: {message}", path.display()));
    }

    Ok(vec![SourceFile::new(file_name, declared_type, bytes)])
}

/// La extensión manda; el contenido solo se consulta cuando la extensión no dice nada.
fn declared_type_for_file(file_name: &str, bytes: &[u8]) -> String {
    let by_name = declared_type_for_name(file_name);
    if by_name != OCTET_STREAM {
        return by_name.to_string();
    }

    infer::get(bytes)
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| OCTET_STREAM.to_string())
}
