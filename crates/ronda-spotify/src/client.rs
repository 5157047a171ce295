//! Spotify Web API client backed by `ureq`.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::debug;
use thiserror::Error;

use ronda_config::SpotifyConfig;

use crate::models::{PlaylistItem, PlaylistItemsPage, TokenResponse};

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE: &str = "https://api.spotify.com/v1";

#[derive(Debug, Error)]
pub enum SpotifyError {
  #[error("spotify auth failed: {0}")]
  Auth(String),

  #[error("spotify request failed: {0}")]
  Http(String),

  #[error("spotify response parse failed: {0}")]
  Parse(String),
}

/// Blocking client for the two endpoints this tool needs: the
/// client-credentials token and the playlist items listing.
pub struct SpotifyClient {
  http_client: ureq::Agent,
  config: SpotifyConfig,
}

impl SpotifyClient {
  pub fn new(config: SpotifyConfig) -> Self {
    let http_client = ureq::AgentBuilder::new()
      .timeout_connect(Duration::from_secs(5))
      .timeout_read(Duration::from_secs(15))
      .timeout_write(Duration::from_secs(15))
      .build();
    Self { http_client, config }
  }

  /// Requests an app token via the client-credentials flow.
  fn request_token(&self) -> Result<String, SpotifyError> {
    let credentials =
      BASE64.encode(format!("{}:{}", self.config.client_id, self.config.client_secret));

    let response = self
      .http_client
      .post(TOKEN_URL)
      .set("Authorization", &format!("Basic {credentials}"))
      .send_form(&[("grant_type", "client_credentials")])
      .map_err(|err| match err {
        ureq::Error::Status(code, _) => {
          SpotifyError::Auth(format!("token endpoint returned {code}, check your client credentials"))
        }
        other => SpotifyError::Http(other.to_string()),
      })?;

    let token: TokenResponse =
      response.into_json().map_err(|err| SpotifyError::Parse(err.to_string()))?;

    Ok(token.access_token)
  }

  fn get_page(&self, url: &str, token: &str) -> Result<PlaylistItemsPage, SpotifyError> {
    debug!("GET {url}");

    let response = self
      .http_client
      .get(url)
      .set("Authorization", &format!("Bearer {token}"))
      .call()
      .map_err(|err| match err {
        ureq::Error::Status(code, _) => SpotifyError::Http(format!("playlist request returned {code}")),
        other => SpotifyError::Http(other.to_string()),
      })?;

    response.into_json().map_err(|err| SpotifyError::Parse(err.to_string()))
  }

  /// Fetches every item of a playlist, following `next` links so
  /// playlists longer than one page come back complete and in order.
  pub fn playlist_items(&self, playlist_id: &str) -> Result<Vec<PlaylistItem>, SpotifyError> {
    let token = self.request_token()?;

    let mut items = Vec::new();
    let mut url =
      Some(format!("{API_BASE}/playlists/{}/tracks?limit=100", urlencoding::encode(playlist_id)));

    while let Some(page_url) = url {
      let page = self.get_page(&page_url, &token)?;
      items.extend(page.items);
      url = page.next;
    }

    Ok(items)
  }
}
