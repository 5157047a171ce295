use serde::{Deserialize, Serialize};

/// Modo de respuesta en el cliente SpeedQuizzing: el jugador toca una
/// letra del teclado en pantalla.
pub const USER_VIEW_LETTERS: &str = "letters";

/// Campo de la pista sobre el que pregunta una cuestión.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizTarget {
  /// Se pregunta por el nombre del artista.
  Artist,
  /// Se pregunta por el título de la canción.
  Song,
}

impl QuizTarget {
  /// El otro campo. Se usa cuando el sorteo cae en un campo inválido.
  pub fn other(self) -> Self {
    match self {
      QuizTarget::Artist => QuizTarget::Song,
      QuizTarget::Song => QuizTarget::Artist,
    }
  }
}

/// Una pregunta terminada del round.
///
/// Invariante: `short_answer` es una letra ASCII mayúscula igual a la
/// primera letra del nombre normalizado del campo elegido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  /// Campo por el que se pregunta.
  pub target: QuizTarget,

  /// Número de secuencia (base 1, en el orden de la playlist).
  pub number: u32,

  /// Enunciado mostrado al anfitrión / jugadores.
  pub prompt: String,

  /// La letra que hay que tocar.
  pub short_answer: char,

  /// Línea de crédito completa, mostrada después de responder.
  pub long_answer: String,

  /// Modo de vista del cliente (fijo: [`USER_VIEW_LETTERS`]).
  pub user_view: String,

  /// Payload base64 de la imagen mostrada con la pregunta.
  ///
  /// Hoy es la imagen por defecto compartida por toda la corrida.
  pub picture: String,
}
