use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
  #[error("io error reading {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("asset {0} is empty")]
  Empty(String),
}

/// Lee un asset base64 desde disco y lo deja listo para incrustar.
///
/// El archivo es texto plano (p. ej. `default_image.b64`); se eliminan
/// saltos de línea y espacios alrededor porque los editores suelen
/// agregar un newline final.
pub fn read_b64_asset(path: &Path) -> Result<String, AssetError> {
  let raw = fs::read_to_string(path).map_err(|source| AssetError::Io {
    path: path.display().to_string(),
    source,
  })?;

  let payload: String = raw.split_whitespace().collect();

  if payload.is_empty() {
    return Err(AssetError::Empty(path.display().to_string()));
  }

  Ok(payload)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use tempfile::tempdir;

  #[test]
  fn trims_whitespace_and_newlines() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("image.b64");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "  iVBORw0KGgo\nAAAANSUhEUg  ").unwrap();

    let payload = read_b64_asset(&path).unwrap();
    assert_eq!(payload, "iVBORw0KGgoAAAANSUhEUg");
  }

  #[test]
  fn empty_asset_is_an_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("empty.b64");
    fs::write(&path, "\n\n").unwrap();

    assert!(matches!(read_b64_asset(&path), Err(AssetError::Empty(_))));
  }

  #[test]
  fn missing_asset_is_an_io_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("nope.b64");

    assert!(matches!(read_b64_asset(&path), Err(AssetError::Io { .. })));
  }
}
