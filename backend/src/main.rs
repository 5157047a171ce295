use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use ronda_config::{OutputConfig, RondaPaths, SpotifyConfig, TomlConfigBackend};
use ronda_core::services::RoundService;
use ronda_spotify::{SpotifyClient, SpotifyPlaylistSource};
use ronda_sqq::SqqWriter;

/// Convierte una playlist de Spotify en un music round de SpeedQuizzing.
#[derive(Debug, Parser)]
#[command(name = "ronda", version, about)]
struct Cli {
  /// URL (o ID) de la playlist de Spotify.
  playlist: String,

  /// Directorio de salida; pisa la sección [output] del config.
  #[arg(long)]
  output_dir: Option<PathBuf>,

  /// Semilla para el sorteo de objetivos (corridas reproducibles).
  #[arg(long)]
  seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
  // .env es opcional; las credenciales también pueden venir del config
  dotenvy::dotenv().ok();
  pretty_env_logger::init();

  let cli = Cli::parse();

  // --- Fase de inyección de dependencias ---

  // 1. Paths + backend de configuración (explícitos, sin singletons)
  let paths = RondaPaths::detect().context("failed to init ronda paths")?;
  let config_backend = TomlConfigBackend::new(paths);

  // 2. Secciones de configuración
  let spotify_config = SpotifyConfig::load(&config_backend)?;
  let output_config = OutputConfig::load(&config_backend)?;

  // 3. Adapter de la fuente (Spotify Web API)
  let source = SpotifyPlaylistSource::new(SpotifyClient::new(spotify_config));

  // 4. Adapter del emisor (.sqq)
  let output_dir = cli.output_dir.unwrap_or(output_config.dir.clone());
  let writer = SqqWriter::new(output_dir);

  // 5. Imagen por defecto, compartida por todas las preguntas
  let picture = ronda_fs::read_b64_asset(&output_config.image_file)
    .context("failed to load the default question image")?;

  // 6. Wiring del servicio
  let service = RoundService::new(source, writer);

  let date = Local::now().format("%d %m %Y").to_string();

  let path = match cli.seed {
    Some(seed) => {
      info!("using fixed seed {seed}");
      let mut rng = StdRng::seed_from_u64(seed);
      service.generate(&cli.playlist, &date, &picture, &mut rng)?
    }
    None => service.generate(&cli.playlist, &date, &picture, &mut rand::thread_rng())?,
  };

  println!("DONE: music round generated at {}", path.display());
  Ok(())
}
