//! Opciones de escaneo compartidas por la consola y la ingesta por lotes.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Variable de entorno con la ruta de un archivo JSON de opciones.
pub const CONFIG_ENV: &str = "IMAGELENS_CONFIG";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Recorre también los subdirectorios al recibir una carpeta.
    pub recursive: bool,
    /// Abre los ZIP y analiza cada archivo que contienen.
    pub expand_archives: bool,
    /// Analiza los archivos en paralelo con rayon.
    pub parallel: bool,
    pub max_archive_entries: usize,
    /// Tamaño máximo, ya descomprimido, de cada miembro de un ZIP.
    pub max_member_bytes: u64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            expand_archives: true,
            parallel: true,
            max_archive_entries: 10_000,
            max_member_bytes: 256 * 1024 * 1024,
        }
    }
}

impl ScanOptions {
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path).map_err(|error| {
            format!(
                "No se pudo leer la configuración `{}`: {error}",
                path.display()
            )
        })?;
        serde_json::from_str(&contents).map_err(|error| {
            format!(
                "Configuración inválida en `{}`: {error}",
                path.display()
            )
        })
    }

    /// Usa `IMAGELENS_CONFIG` si está definida; si no, los valores por defecto.
    pub fn from_env() -> Result<Self, String> {
        match env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}
