use serde::{Deserialize, Serialize};

use crate::domain::answer::AnswerText;
use crate::errors::BuildError;

/// Una entrada de la playlist, ya lista para el armado de preguntas.
///
/// Los nombres llegan de la fuente como texto plano y aquí quedan con
/// su forma normalizada y su bandera de validez calculadas. Después de
/// esto la pista no se muta más: se transforma una vez en pregunta y
/// se serializa una vez.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
  /// Créditos de artista en el orden que los entrega la fuente.
  ///
  /// Solo el primero participa en la selección de objetivo; los demás
  /// se conservan como vinieron.
  pub artists: Vec<AnswerText>,

  /// Título de la canción.
  pub title: AnswerText,

  /// URL de la miniatura del álbum (64px), si la fuente la tiene.
  ///
  /// Hoy el armado de preguntas no la consume: todas las preguntas
  /// usan la imagen por defecto de la corrida.
  pub thumbnail: Option<String>,
}

impl Track {
  /// Construye una pista a partir de los nombres crudos de la fuente.
  pub fn from_names<I>(artist_names: I, title: &str, thumbnail: Option<String>) -> Result<Self, BuildError>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    let artists = artist_names
      .into_iter()
      .map(|name| AnswerText::parse(name.as_ref()))
      .collect::<Result<Vec<_>, _>>()?;

    let title = AnswerText::parse(title)?;

    Ok(Self { artists, title, thumbnail })
  }

  /// Crédito principal: el primer artista listado.
  pub fn primary_artist(&self) -> Option<&AnswerText> {
    self.artists.first()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_names_normalizes_every_field() {
    let track =
      Track::from_names(["The Beatles", "Billy Preston"], "Get Back", None).unwrap();

    assert_eq!(track.artists.len(), 2);
    assert_eq!(track.artists[0].normalized, "Beatles, The");
    assert_eq!(track.artists[1].normalized, "Billy Preston");
    assert_eq!(track.title.normalized, "Get Back");
    assert_eq!(track.primary_artist().unwrap().display, "The Beatles");
  }

  #[test]
  fn empty_title_propagates_the_error() {
    let result = Track::from_names(["Queen"], "  ", None);
    assert_eq!(result, Err(BuildError::EmptyName));
  }
}
