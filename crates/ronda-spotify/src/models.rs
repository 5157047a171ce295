//! Serde DTOs for the subset of the Spotify Web API we consume.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
  pub access_token: String,
  #[allow(dead_code)]
  pub token_type: String,
  #[allow(dead_code)]
  pub expires_in: u64,
}

/// One page of `GET /v1/playlists/{id}/tracks`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItemsPage {
  pub items: Vec<PlaylistItem>,
  /// Absolute URL of the next page, absent on the last one.
  pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
  /// `null` for removed or local-only entries.
  pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
  pub name: String,
  #[serde(default)]
  pub artists: Vec<ArtistObject>,
  #[serde(default)]
  pub album: Option<AlbumObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistObject {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumObject {
  #[serde(default)]
  pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageObject {
  pub url: String,
  pub height: Option<u32>,
  #[allow(dead_code)]
  pub width: Option<u32>,
}

impl TrackObject {
  /// URL of the 64px album thumbnail, if the album carries one.
  pub fn thumbnail_url(&self) -> Option<String> {
    let album = self.album.as_ref()?;
    album.images.iter().find(|img| img.height == Some(64)).map(|img| img.url.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const PAGE_JSON: &str = r#"{
    "items": [
      {
        "track": {
          "name": "Let It Be",
          "artists": [{ "name": "The Beatles" }],
          "album": {
            "images": [
              { "url": "https://i.scdn.co/640", "height": 640, "width": 640 },
              { "url": "https://i.scdn.co/300", "height": 300, "width": 300 },
              { "url": "https://i.scdn.co/64", "height": 64, "width": 64 }
            ]
          }
        }
      },
      { "track": null }
    ],
    "next": null
  }"#;

  #[test]
  fn deserializes_a_playlist_page() {
    let page: PlaylistItemsPage = serde_json::from_str(PAGE_JSON).unwrap();

    assert_eq!(page.items.len(), 2);
    assert!(page.next.is_none());

    let track = page.items[0].track.as_ref().unwrap();
    assert_eq!(track.name, "Let It Be");
    assert_eq!(track.artists[0].name, "The Beatles");
    assert!(page.items[1].track.is_none());
  }

  #[test]
  fn thumbnail_picks_the_exact_64px_image() {
    let page: PlaylistItemsPage = serde_json::from_str(PAGE_JSON).unwrap();
    let track = page.items[0].track.as_ref().unwrap();

    assert_eq!(track.thumbnail_url().as_deref(), Some("https://i.scdn.co/64"));
  }

  #[test]
  fn missing_album_means_no_thumbnail() {
    let json = r#"{ "name": "Demo", "artists": [{ "name": "Someone" }] }"#;
    let track: TrackObject = serde_json::from_str(json).unwrap();

    assert!(track.thumbnail_url().is_none());
  }
}
