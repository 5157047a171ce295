use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::backend::{ConfigBackend, TomlConfigBackend};
use crate::paths::ConfigError;

/// Credenciales de la Web API de Spotify (flujo client-credentials).
///
/// Las variables de entorno `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET`
/// pisan lo que haya en el archivo. Esta sección nunca se escribe de
/// vuelta a disco: los secretos se quedan donde el usuario los puso.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpotifyConfig {
  #[serde(default)]
  pub client_id: String,

  #[serde(default)]
  pub client_secret: String,
}

impl SpotifyConfig {
  pub fn load(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let mut cfg: SpotifyConfig = backend.load_section_with_default("spotify")?;

    if let Ok(id) = std::env::var("SPOTIFY_CLIENT_ID") {
      cfg.client_id = id;
    }
    if let Ok(secret) = std::env::var("SPOTIFY_CLIENT_SECRET") {
      cfg.client_secret = secret;
    }

    if cfg.client_id.is_empty() || cfg.client_secret.is_empty() {
      return Err(ConfigError::Other(
        "missing spotify credentials: set [spotify] client_id / client_secret or the SPOTIFY_CLIENT_ID / SPOTIFY_CLIENT_SECRET environment variables".to_string(),
      ));
    }

    Ok(cfg)
  }
}

/// Sección `[output]`: dónde escribir los rounds y de dónde sacar la
/// imagen por defecto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
  /// Directorio de salida para los archivos `.sqq`.
  #[serde(default = "default_output_dir")]
  pub dir: PathBuf,

  /// Archivo de texto con el payload base64 de la imagen por defecto.
  #[serde(default = "default_image_file")]
  pub image_file: PathBuf,
}

fn default_output_dir() -> PathBuf {
  PathBuf::from("output")
}

fn default_image_file() -> PathBuf {
  PathBuf::from("assets").join("default_image.b64")
}

impl Default for OutputConfig {
  fn default() -> Self {
    OutputConfig { dir: default_output_dir(), image_file: default_image_file() }
  }
}

impl OutputConfig {
  pub fn load(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: OutputConfig = backend.load_section_with_default("output")?;
    // persistimos los defaults para que el usuario vea qué puede tocar
    backend.save_section("output", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self, backend: &TomlConfigBackend) -> Result<(), ConfigError> {
    backend.save_section("output", self)
  }
}
