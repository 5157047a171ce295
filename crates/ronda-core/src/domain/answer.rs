use serde::{Deserialize, Serialize};

use crate::errors::BuildError;

/// Artículos que se reubican al final del nombre, al estilo de los
/// listados de enciclopedia ("Beatles, The").
const ARTICLES: [&str; 3] = ["THE", "A", "AN"];

/// Un nombre considerado como respuesta de quiz.
///
/// Guarda las dos formas que necesita el juego:
///
/// - `display`: el nombre tal cual lo entregó la fuente, para mostrarlo
///   en la respuesta larga.
/// - `normalized`: el nombre con un artículo inicial (THE / A / AN)
///   movido al final como `"<resto>, <artículo>"`. La primera letra de
///   esta forma es la que el jugador debe tocar.
///
/// La validez se decide SIEMPRE sobre la forma normalizada: mover el
/// artículo no garantiza nada por sí solo ("The 1975" normaliza a
/// "1975, The" y sigue siendo inutilizable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerText {
  /// Nombre original, sin tocar.
  pub display: String,

  /// Nombre con el artículo inicial reubicado al final.
  pub normalized: String,

  /// `true` si la primera letra de `normalized` es una letra ASCII.
  pub valid: bool,
}

impl AnswerText {
  /// Normaliza un nombre y calcula su validez como respuesta.
  ///
  /// Solo el primer token separado por espacios puede ser artículo;
  /// un título con varios artículos seguidos solo pierde el primero.
  /// El artículo conserva su mayúscula/minúscula original y el resto
  /// se vuelve a unir con espacios simples.
  ///
  /// Falla con [`BuildError::EmptyName`] si la entrada está vacía o es
  /// puro espacio en blanco (no hay token que inspeccionar).
  pub fn parse(display: &str) -> Result<Self, BuildError> {
    let mut words = display.split_whitespace();
    let first = words.next().ok_or(BuildError::EmptyName)?;

    let normalized = if ARTICLES.iter().any(|a| first.eq_ignore_ascii_case(a)) {
      let rest = words.collect::<Vec<_>>().join(" ");
      format!("{rest}, {first}")
    } else {
      display.to_string()
    };

    // Un artículo sin resto deja ", The": la coma inicial lo invalida
    // sin caso especial.
    let valid = normalized.chars().next().is_some_and(|c| c.is_ascii_alphabetic());

    Ok(Self { display: display.to_string(), normalized, valid })
  }

  /// Primera letra de la forma normalizada, en mayúscula.
  ///
  /// Es la respuesta corta de la pregunta cuando este nombre resulta
  /// elegido como objetivo. Solo tiene sentido si `valid` es `true`.
  pub fn first_letter(&self) -> Option<char> {
    self.normalized.chars().next().map(|c| c.to_ascii_uppercase())
  }
}
