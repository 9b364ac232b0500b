//! Lectura de campos de cabecera en posiciones fijas.
//!
//! Cada extractor describe sus reglas como datos: un valor constante o un
//! campo a leer junto con la función que lo traduce.

use super::error::CoreError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaderField {
    Byte(usize),
    U16Le(usize),
}

impl HeaderField {
    pub fn offset(self) -> usize {
        match self {
            Self::Byte(offset) | Self::U16Le(offset) => offset,
        }
    }

    pub fn width(self) -> usize {
        match self {
            Self::Byte(_) => 1,
            Self::U16Le(_) => 2,
        }
    }

    /// Cantidad mínima de bytes que debe tener el buffer para leer el campo.
    pub fn required_len(self) -> usize {
        self.offset() + self.width()
    }

    pub fn read(self, buffer: &[u8], name: &'static str) -> Result<u32, CoreError> {
        let needed = self.required_len();
        let bytes = buffer
            .get(self.offset()..needed)
            .ok_or_else(|| CoreError::truncated(name, Some(needed), buffer.len()))?;

        Ok(match self {
            Self::Byte(_) => u32::from(bytes[0]),
            Self::U16Le(_) => u32::from(u16::from_le_bytes([bytes[0], bytes[1]])),
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Rule<T: Copy> {
    Constant(T),
    Read(HeaderField, fn(u32) -> T),
}

impl<T: Copy> Rule<T> {
    pub fn apply(self, buffer: &[u8], name: &'static str) -> Result<T, CoreError> {
        match self {
            Self::Constant(value) => Ok(value),
            Self::Read(field, decode) => field.read(buffer, name).map(decode),
        }
    }
}
