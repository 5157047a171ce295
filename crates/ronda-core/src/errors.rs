// crates/ronda-core/src/errors.rs
use thiserror::Error;

/// Error de construcción de preguntas.
///
/// Ambos casos son problemas de calidad de datos en la playlist de
/// entrada, no fallas transitorias: no tiene sentido reintentar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
  /// El nombre recibido está vacío o solo contiene espacios; sin un
  /// primer token no hay letra que preguntar.
  #[error("name is empty or whitespace-only")]
  EmptyName,

  /// Ni el artista ni el título de la pista sirven como respuesta
  /// (ninguno empieza con una letra después de normalizar).
  ///
  /// Lleva suficiente contexto para que un operador pueda reemplazar
  /// la entrada ofensiva en la playlist.
  #[error(
    "track #{index} unusable: artist \"{artist}\" (leading '{artist_first}') and title \"{title}\" (leading '{title_first}') both start with illegal characters, swap this entry for a valid one"
  )]
  UnusableTrack {
    /// Posición de la pista en la playlist (base 1, igual que la
    /// numeración de las preguntas).
    index: usize,
    artist: String,
    artist_first: char,
    title: String,
    title_first: char,
  },
}

/// Error genérico del núcleo de ronda.
///
/// Las capas superiores (CLI, etc.) deberían mapear este error a
/// mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("playlist source error: {0}")]
  Source(String),

  #[error("question build error: {0}")]
  Build(#[from] BuildError),

  #[error("round write error: {0}")]
  Write(String),
}
