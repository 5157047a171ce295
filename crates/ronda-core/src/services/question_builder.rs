use log::warn;
use rand::Rng;

use crate::domain::answer::AnswerText;
use crate::domain::question::{Question, QuizTarget, USER_VIEW_LETTERS};
use crate::domain::track::Track;
use crate::errors::BuildError;

/// Elige el campo por el que preguntar para una pista.
///
/// Solo se considera el primer artista listado; en pistas con varios
/// artistas los demás no participan del sorteo (limitación heredada
/// del formato del round, se conserva a propósito).
///
/// `index` es la posición de la pista en la playlist (base 1) y solo
/// se usa para el diagnóstico de error.
///
/// Distribución efectiva:
/// - ambos campos válidos → 50/50
/// - exactamente uno válido → siempre el válido
/// - ninguno válido → [`BuildError::UnusableTrack`]
pub fn select_target<R: Rng + ?Sized>(
  index: usize,
  track: &Track,
  rng: &mut R,
) -> Result<QuizTarget, BuildError> {
  let artist = track.primary_artist().ok_or(BuildError::EmptyName)?;
  let title = &track.title;

  if !artist.valid && !title.valid {
    return Err(BuildError::UnusableTrack {
      index,
      artist: artist.display.clone(),
      artist_first: artist.normalized.chars().next().unwrap_or(' '),
      title: title.display.clone(),
      title_first: title.normalized.chars().next().unwrap_or(' '),
    });
  }

  let drawn = if rng.gen_bool(0.5) { QuizTarget::Artist } else { QuizTarget::Song };

  let chosen_field = match drawn {
    QuizTarget::Artist => artist,
    QuizTarget::Song => title,
  };

  // Si el sorteo cayó en un campo inválido, el otro está garantizado
  // válido: el caso ambos-inválidos ya falló arriba.
  if chosen_field.valid {
    Ok(drawn)
  } else {
    warn!(
      "track #{index}: {drawn:?} target \"{}\" is unusable, switching to {:?}",
      chosen_field.display,
      drawn.other()
    );
    Ok(drawn.other())
  }
}

/// Arma la pregunta terminada para una pista y un objetivo ya elegido.
///
/// Función pura: mismo input, mismo output byte a byte. El número de
/// secuencia lo aporta el llamador.
pub fn build_question(track: &Track, target: QuizTarget, number: u32, picture: &str) -> Question {
  // select_target garantiza que hay al menos un artista; para una
  // pista construida a mano sin artistas preferimos un crédito vacío
  // antes que un panic.
  let empty = AnswerText { display: String::new(), normalized: String::new(), valid: false };
  let artist = track.primary_artist().unwrap_or(&empty);
  let title = &track.title;

  let (prompt_field, answer_field, long_answer) = match target {
    QuizTarget::Artist => {
      ("ARTIST name", artist, format!("{} with \"{}\"", artist.display, title.display))
    }
    QuizTarget::Song => {
      ("SONG TITLE", title, format!("\"{}\" by {}", title.display, artist.display))
    }
  };

  Question {
    target,
    number,
    prompt: format!("MUSIC ROUND #{number} - Tap on the first letter of the {prompt_field}"),
    short_answer: answer_field.first_letter().unwrap_or(' '),
    long_answer,
    user_view: USER_VIEW_LETTERS.to_string(),
    picture: picture.to_string(),
  }
}

/// Transforma la playlist completa en preguntas numeradas desde 1.
///
/// Falla rápido en la primera pista inutilizable: la plataforma espera
/// un set de preguntas completo y sin huecos, así que no se emite
/// salida parcial.
pub fn build_question_set<R: Rng + ?Sized>(
  tracks: &[Track],
  picture: &str,
  rng: &mut R,
) -> Result<Vec<Question>, BuildError> {
  let mut questions = Vec::with_capacity(tracks.len());

  for (i, track) in tracks.iter().enumerate() {
    let number = (i + 1) as u32;
    let target = select_target(i + 1, track, rng)?;
    questions.push(build_question(track, target, number, picture));
  }

  Ok(questions)
}
