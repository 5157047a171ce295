use std::path::PathBuf;

use log::info;
use rand::Rng;

use crate::domain::round::Round;
use crate::errors::CoreError;
use crate::ports::{PlaylistSource, RoundWriter};
use crate::services::question_builder::build_question_set;

/// Orquesta una corrida completa: buscar pistas, armar preguntas y
/// escribir el round.
pub struct RoundService<S, W>
where
  S: PlaylistSource,
  W: RoundWriter,
{
  source: S,
  writer: W,
}

impl<S, W> RoundService<S, W>
where
  S: PlaylistSource,
  W: RoundWriter,
{
  pub fn new(source: S, writer: W) -> Self {
    Self { source, writer }
  }

  /// Genera el round de una playlist y devuelve la ruta escrita.
  ///
  /// `date` es la fecha de generación ya formateada y `picture` el
  /// payload base64 compartido por todas las preguntas. Cualquier
  /// error aborta la corrida completa: no se escribe salida parcial.
  pub fn generate<R: Rng + ?Sized>(
    &self,
    playlist_ref: &str,
    date: &str,
    picture: &str,
    rng: &mut R,
  ) -> Result<PathBuf, CoreError> {
    // 1) Buscar y parsear las pistas
    let tracks =
      self.source.playlist_tracks(playlist_ref).map_err(|e| CoreError::Source(e.to_string()))?;

    info!("playlist yielded {} tracks", tracks.len());

    // 2) Armar el set de preguntas (falla rápido en pistas inutilizables)
    let questions = build_question_set(&tracks, picture, rng)?;

    // 3) Envolver con los metadatos fijos del round
    let round = Round::new(date, questions);

    // 4) Emitir el archivo
    let path = self.writer.write_round(&round).map_err(|e| CoreError::Write(e.to_string()))?;

    info!("round written to {}", path.display());
    Ok(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::track::Track;
  use crate::ports::playlist::SourceError;
  use crate::ports::round_writer::WriteError;
  use rand::SeedableRng;
  use rand::rngs::StdRng;
  use std::cell::RefCell;

  struct StubSource {
    tracks: Result<Vec<Track>, String>,
  }

  impl PlaylistSource for StubSource {
    fn playlist_tracks(&self, _playlist_ref: &str) -> Result<Vec<Track>, SourceError> {
      match &self.tracks {
        Ok(tracks) => Ok(tracks.clone()),
        Err(msg) => Err(SourceError::Http(msg.clone())),
      }
    }
  }

  struct CapturingWriter {
    written: RefCell<Option<Round>>,
  }

  impl CapturingWriter {
    fn new() -> Self {
      Self { written: RefCell::new(None) }
    }
  }

  impl RoundWriter for CapturingWriter {
    fn write_round(&self, round: &Round) -> Result<PathBuf, WriteError> {
      *self.written.borrow_mut() = Some(round.clone());
      Ok(PathBuf::from("/tmp/out.sqq"))
    }
  }

  fn tracks() -> Vec<Track> {
    vec![
      Track::from_names(["Queen"], "Bohemian Rhapsody", None).unwrap(),
      Track::from_names(["The Beatles"], "Let It Be", None).unwrap(),
    ]
  }

  #[test]
  fn generate_builds_and_writes_the_round() {
    let service =
      RoundService::new(StubSource { tracks: Ok(tracks()) }, CapturingWriter::new());
    let mut rng = StdRng::seed_from_u64(1);

    let path = service.generate("playlist", "05 03 2026", "IMG", &mut rng).unwrap();
    assert_eq!(path, PathBuf::from("/tmp/out.sqq"));

    let round = service.writer.written.borrow().clone().unwrap();
    assert_eq!(round.title, "SQ Music Round 05 03 2026");
    assert_eq!(round.questions.len(), 2);
    assert_eq!(round.questions[0].number, 1);
    assert_eq!(round.questions[1].number, 2);
  }

  #[test]
  fn source_errors_become_core_source_errors() {
    let service = RoundService::new(
      StubSource { tracks: Err("boom".to_string()) },
      CapturingWriter::new(),
    );
    let mut rng = StdRng::seed_from_u64(1);

    let err = service.generate("playlist", "05 03 2026", "IMG", &mut rng).unwrap_err();
    assert!(matches!(err, CoreError::Source(_)));
    // nada llegó al writer
    assert!(service.writer.written.borrow().is_none());
  }

  #[test]
  fn unusable_track_aborts_before_writing() {
    let bad = vec![Track::from_names(["21 Savage"], "50 Ways", None).unwrap()];
    let service = RoundService::new(StubSource { tracks: Ok(bad) }, CapturingWriter::new());
    let mut rng = StdRng::seed_from_u64(1);

    let err = service.generate("playlist", "05 03 2026", "IMG", &mut rng).unwrap_err();
    assert!(matches!(err, CoreError::Build(_)));
    assert!(service.writer.written.borrow().is_none());
  }
}
