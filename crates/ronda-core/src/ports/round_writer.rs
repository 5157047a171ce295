use std::path::PathBuf;

use crate::domain::round::Round;

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
  #[error("io error: {0}")]
  Io(String),

  #[error("serialize error: {0}")]
  Serialize(String),
}

/// Port del emisor de archivos de round.
///
/// Implementaciones posibles:
/// - SpeedQuizzing `.sqq` (XML)
/// - un sink en memoria para tests
pub trait RoundWriter {
  /// Escribe el round completo y devuelve la ruta del archivo final.
  fn write_round(&self, round: &Round) -> Result<PathBuf, WriteError>;
}
