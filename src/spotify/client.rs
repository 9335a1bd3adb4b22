use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config,
    management::TokenManager,
    pipeline::{MusicService, ServiceError},
    types::{AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, Playlist, SearchResponse},
};

/// The one authenticated Spotify session of a run.
///
/// Owns the HTTP client and the token manager; constructed once in the CLI
/// layer and borrowed by everything that talks to the Web API. The token
/// manager sits behind a mutex so refreshing works through a shared
/// reference.
pub struct SpotifyClient {
    http: Client,
    token: Mutex<TokenManager>,
    api_url: String,
    user_id: String,
}

impl SpotifyClient {
    /// Builds the session from the token persisted by `splcli auth`.
    pub async fn from_saved_token() -> Result<Self, String> {
        let manager = TokenManager::load().await?;
        Ok(SpotifyClient {
            http: Client::new(),
            token: Mutex::new(manager),
            api_url: config::spotify_apiurl(),
            user_id: config::spotify_user(),
        })
    }

    async fn bearer(&self) -> String {
        self.token.lock().await.get_valid_token().await
    }

    // non-2xx responses surface the body, which carries Spotify's error message
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ServiceError::Remote(format!("{}: {}", status, body)))
        }
    }
}

#[async_trait]
impl MusicService for SpotifyClient {
    async fn search_track(&self, title: &str) -> Result<Option<String>, ServiceError> {
        let token = self.bearer().await;
        let response = self
            .http
            .get(format!("{}/search", self.api_url))
            .bearer_auth(token)
            .query(&[("q", title), ("type", "track"), ("limit", "1")])
            .send()
            .await?;

        let results = Self::check(response)
            .await?
            .json::<SearchResponse>()
            .await?;
        Ok(results.tracks.items.first().map(|track| track.uri.clone()))
    }

    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Playlist, ServiceError> {
        let token = self.bearer().await;
        let request = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: false,
            collaborative: false,
        };

        let response = self
            .http
            .post(format!("{}/users/{}/playlists", self.api_url, self.user_id))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let playlist = Self::check(response).await?.json::<Playlist>().await?;
        Ok(playlist)
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), ServiceError> {
        let token = self.bearer().await;
        let request = AddTracksRequest {
            uris: uris.to_vec(),
        };

        let response = self
            .http
            .post(format!("{}/playlists/{}/tracks", self.api_url, playlist_id))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        Self::check(response)
            .await?
            .json::<AddTracksResponse>()
            .await?;
        Ok(())
    }
}
