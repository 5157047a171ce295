pub mod assets;
pub mod io;

pub use assets::read_b64_asset;
pub use io::{atomic_write_str, ensure_dir};
