//! Errores del inspector de cabeceras.

use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CoreError {
    /// El tipo declarado no corresponde a ninguno de los cinco formatos conocidos.
    #[error("formato no soportado: `{0}`")]
    Unsupported(String),

    /// El formato se reconoció pero el buffer no alcanza para leer un campo.
    #[error("datos insuficientes para leer {field}: {}", describe_shortfall(.needed, .available))]
    TruncatedInput {
        field: &'static str,
        needed: Option<usize>,
        available: usize,
    },
}

impl CoreError {
    pub(crate) fn truncated(field: &'static str, needed: Option<usize>, available: usize) -> Self {
        Self::TruncatedInput {
            field,
            needed,
            available,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

fn describe_shortfall(needed: &Option<usize>, available: &usize) -> String {
    match needed {
        Some(needed) => format!("se requieren {needed} bytes y hay {available}"),
        None => format!("cabecera inválida o incompleta ({available} bytes)"),
    }
}
