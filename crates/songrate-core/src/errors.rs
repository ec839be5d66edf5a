// crates/songrate-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de songrate.
///
/// Las capas superiores (pantallas, CLI) deberían mapear este error
/// a avisos para el usuario o logs. Ningún caso es fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
  #[error("maximum {capacity} entries reached")]
  CapacityExceeded { capacity: usize },

  #[error("invalid input: {0}")]
  InvalidInput(#[from] InputError),
}

/// Errores de validación de un campo de entrada.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
  #[error("song name cannot be empty")]
  BlankTitle,

  #[error("rating is not a number: {0:?}")]
  RatingNotNumeric(String),

  #[error("rating must be between 1 and 5, got {0}")]
  RatingOutOfRange(i64),

  #[error("unknown description: {0:?}")]
  UnknownDescription(String),
}
