mod adapter;
mod client;
mod models;

pub use adapter::{SpotifyPlaylistSource, playlist_id_from_ref};
pub use client::{SpotifyClient, SpotifyError};
