//! Análisis por lotes: una tarea por archivo, sin estado compartido.

use super::source::SourceFile;
use crate::inspector::{CoreError, ImageMetadata, extract_metadata};
use crate::options::ScanOptions;
use rayon::prelude::*;
use tracing::{debug, info};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: CoreError,
}

#[derive(Clone, Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<ImageMetadata>,
    pub skipped: Vec<SkippedFile>,
    pub bytes_read: u64,
}

impl BatchOutcome {
    pub fn unsupported_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|file| file.reason.is_unsupported())
            .count()
    }

    pub fn truncated_count(&self) -> usize {
        self.skipped.len() - self.unsupported_count()
    }
}

/// Analiza todos los archivos y conserva el orden de entrada en los resultados.
///
/// Los formatos no soportados y los archivos truncados no generan fila: se
/// registran en `skipped` y el lote sigue adelante.
pub fn inspect_all(files: &[SourceFile], options: &ScanOptions) -> BatchOutcome {
    let results: Vec<Result<ImageMetadata, SkippedFile>> = if options.parallel {
        files.par_iter().map(inspect_one).collect()
    } else {
        files.iter().map(inspect_one).collect()
    };

    let mut outcome = BatchOutcome {
        bytes_read: files.iter().map(|file| file.len() as u64).sum(),
        ..BatchOutcome::default()
    };
    for result in results {
        match result {
            Ok(record) => outcome.records.push(record),
            Err(skipped) => outcome.skipped.push(skipped),
        }
    }

    info!(
        records = outcome.records.len(),
        unsupported = outcome.unsupported_count(),
        truncated = outcome.truncated_count(),
        "lote analizado"
    );
    outcome
}

fn inspect_one(file: &SourceFile) -> Result<ImageMetadata, SkippedFile> {
    extract_metadata(&file.bytes, &file.declared_type, &file.file_name).map_err(|reason| {
        debug!(file = %file.file_name, %reason, "archivo omitido");
        SkippedFile {
            file_name: file.file_name.clone(),
            reason,
        }
    })
}
