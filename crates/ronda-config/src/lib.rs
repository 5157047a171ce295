mod backend;
mod model;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use model::{OutputConfig, SpotifyConfig};
pub use paths::{ConfigError, RondaPaths};
