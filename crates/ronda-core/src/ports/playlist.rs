use crate::domain::track::Track;
use crate::errors::BuildError;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
  #[error("auth error: {0}")]
  Auth(String),

  #[error("http error: {0}")]
  Http(String),

  #[error("malformed playlist data: {0}")]
  Malformed(String),

  #[error("invalid name in playlist: {0}")]
  Name(#[from] BuildError),
}

/// Port de la fuente de playlists.
///
/// No expone detalles de transporte (HTTP, paginación, auth). El
/// adapter puede hablar con quien quiera por dentro, pero desde el
/// dominio se ve como una operación que devuelve las pistas ya
/// parseadas, en el orden original de la playlist.
pub trait PlaylistSource {
  /// `playlist_ref` acepta una URL completa de playlist o un ID pelado.
  fn playlist_tracks(&self, playlist_ref: &str) -> Result<Vec<Track>, SourceError>;
}
