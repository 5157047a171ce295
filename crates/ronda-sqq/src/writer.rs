use std::path::PathBuf;

use log::info;

use ronda_core::domain::round::Round;
use ronda_core::ports::round_writer::{RoundWriter, WriteError};

use crate::xml::render_round;

/// Escribe rounds como archivos `.sqq` (XML) en un directorio de salida.
pub struct SqqWriter {
  output_dir: PathBuf,
}

impl SqqWriter {
  pub fn new(output_dir: impl Into<PathBuf>) -> Self {
    Self { output_dir: output_dir.into() }
  }

  fn file_path(&self, round: &Round) -> PathBuf {
    self.output_dir.join(format!("{}.sqq", round.title))
  }
}

impl RoundWriter for SqqWriter {
  fn write_round(&self, round: &Round) -> Result<PathBuf, WriteError> {
    let document = render_round(round).map_err(WriteError::Serialize)?;

    ronda_fs::ensure_dir(&self.output_dir).map_err(|e| WriteError::Io(e.to_string()))?;

    let path = self.file_path(round);
    ronda_fs::atomic_write_str(&path, &document).map_err(|e| WriteError::Io(e.to_string()))?;

    info!("sqq file generated at {}", path.display());
    Ok(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ronda_core::domain::question::{Question, QuizTarget};
  use tempfile::tempdir;

  fn round() -> Round {
    let question = Question {
      target: QuizTarget::Song,
      number: 1,
      prompt: "MUSIC ROUND #1 - Tap on the first letter of the SONG TITLE".to_string(),
      short_answer: 'L',
      long_answer: "\"Let It Be\" by The Beatles".to_string(),
      user_view: "letters".to_string(),
      picture: "AAAA".to_string(),
    };
    Round::new("01 02 2026", vec![question])
  }

  #[test]
  fn writes_the_file_under_the_round_title() {
    let tmp = tempdir().unwrap();
    let writer = SqqWriter::new(tmp.path().join("output"));

    let path = writer.write_round(&round()).unwrap();

    assert_eq!(path, tmp.path().join("output").join("SQ Music Round 01 02 2026.sqq"));
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("<?xml"));
    assert!(contents.contains("<short_answer>L</short_answer>"));
  }

  #[test]
  fn creates_the_output_directory_if_missing() {
    let tmp = tempdir().unwrap();
    let nested = tmp.path().join("a").join("b");
    let writer = SqqWriter::new(nested.clone());

    writer.write_round(&round()).unwrap();
    assert!(nested.is_dir());
  }
}
