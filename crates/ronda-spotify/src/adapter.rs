use log::warn;

use ronda_core::domain::track::Track;
use ronda_core::ports::playlist::{PlaylistSource, SourceError};

use crate::client::{SpotifyClient, SpotifyError};
use crate::models::PlaylistItem;

/// Extracts the playlist ID from a share URL, or passes a bare ID
/// through untouched.
///
/// `https://open.spotify.com/playlist/5uUyf...?si=ff7b` → `5uUyf...`
pub fn playlist_id_from_ref(playlist_ref: &str) -> &str {
  let last_segment = playlist_ref.rsplit('/').next().unwrap_or(playlist_ref);
  last_segment.split('?').next().unwrap_or(last_segment)
}

/// `PlaylistSource` adapter over the Spotify Web API.
pub struct SpotifyPlaylistSource {
  client: SpotifyClient,
}

impl SpotifyPlaylistSource {
  pub fn new(client: SpotifyClient) -> Self {
    Self { client }
  }
}

impl PlaylistSource for SpotifyPlaylistSource {
  fn playlist_tracks(&self, playlist_ref: &str) -> Result<Vec<Track>, SourceError> {
    let playlist_id = playlist_id_from_ref(playlist_ref);

    let items = self.client.playlist_items(playlist_id).map_err(map_spotify_error)?;

    map_items(items)
  }
}

/// Infra → domain mapping, shared with the tests.
fn map_items(items: Vec<PlaylistItem>) -> Result<Vec<Track>, SourceError> {
  let mut tracks = Vec::with_capacity(items.len());

  for item in items {
    // Removed or local-only entries come back as `"track": null`;
    // there is nothing to quiz on, so they are dropped up front.
    let Some(track) = item.track else {
      warn!("skipping playlist entry without track data");
      continue;
    };

    if track.artists.is_empty() {
      return Err(SourceError::Malformed(format!("track \"{}\" has no artists", track.name)));
    }

    let thumbnail = track.thumbnail_url();
    let artist_names: Vec<&str> = track.artists.iter().map(|a| a.name.as_str()).collect();

    tracks.push(Track::from_names(artist_names, &track.name, thumbnail)?);
  }

  Ok(tracks)
}

fn map_spotify_error(err: SpotifyError) -> SourceError {
  match err {
    SpotifyError::Auth(e) => SourceError::Auth(e),
    SpotifyError::Http(e) => SourceError::Http(e),
    SpotifyError::Parse(e) => SourceError::Malformed(e),
  }
}
