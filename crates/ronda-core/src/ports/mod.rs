pub mod playlist;
pub mod round_writer;

pub use playlist::{PlaylistSource, SourceError};
pub use round_writer::{RoundWriter, WriteError};
