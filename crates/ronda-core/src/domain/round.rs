use serde::{Deserialize, Serialize};

use crate::domain::question::Question;

/// Etiqueta fija del juego en la plataforma.
pub const GAME_LABEL: &str = "Quizsentials";

/// Puntaje fijo por pregunta.
pub const POINTS_PER_QUESTION: u32 = 10;

/// Un round de música terminado: metadatos fijos + preguntas en orden.
///
/// El emisor de archivos escribe estos campos tal cual en su formato
/// contenedor; el núcleo no formatea el archivo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
  pub game: String,

  /// Título del round; incluye la fecha de generación que aporta el
  /// llamador (el núcleo no tiene reloj).
  pub title: String,

  pub points_per_question: u32,
  pub go_wide: bool,
  pub speed_bonus: bool,

  pub questions: Vec<Question>,
}

impl Round {
  /// Arma el round con los metadatos fijos de la plataforma.
  ///
  /// `date` es la fecha de generación ya formateada (p. ej.
  /// `"07 08 2026"`).
  pub fn new(date: &str, questions: Vec<Question>) -> Self {
    Self {
      game: GAME_LABEL.to_string(),
      title: format!("SQ Music Round {date}"),
      points_per_question: POINTS_PER_QUESTION,
      go_wide: true,
      speed_bonus: true,
      questions,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn title_embeds_the_supplied_date() {
    let round = Round::new("01 02 2026", Vec::new());
    assert_eq!(round.title, "SQ Music Round 01 02 2026");
    assert_eq!(round.game, "Quizsentials");
    assert_eq!(round.points_per_question, 10);
    assert!(round.go_wide);
    assert!(round.speed_bonus);
  }
}
