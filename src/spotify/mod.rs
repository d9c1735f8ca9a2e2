//! # Spotify Integration Module
//!
//! Thin client for the three Spotify Web API reads Song Derby needs. The rest
//! of the crate talks to it through the [`SpotifyApi`] trait, which returns raw
//! records; turning those into typed entities is the job of
//! [`crate::types`] and [`crate::fetcher`].
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client credentials token
//! - `GET /users/{user_id}/playlists` - a user's public playlists
//! - `GET /users/{user_id}` - a user's profile
//! - `GET /playlists/{playlist_id}/tracks` - a playlist's items
//!
//! Only the first page of each listing is read. A `502 Bad Gateway` is retried
//! after a short pause; any other failure is returned to the caller.

pub mod auth;
pub mod playlists;
pub mod users;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{
    Res,
    config::Config,
    types::{RawPlaylist, RawPlaylistItem, RawUser},
};

const BAD_GATEWAY_RETRY_DELAY: Duration = Duration::from_secs(10);
const MAX_BAD_GATEWAY_RETRIES: u32 = 3;

/// The Spotify reads Song Derby depends on.
#[allow(async_fn_in_trait)]
pub trait SpotifyApi {
    /// Playlists of `user_id`.
    async fn user_playlists(&self, user_id: &str) -> Res<Vec<RawPlaylist>>;

    /// Profile of `user_id`.
    async fn user(&self, user_id: &str) -> Res<RawUser>;

    /// Track items of `playlist_id`.
    async fn playlist_items(&self, playlist_id: &str) -> Res<Vec<RawPlaylistItem>>;
}

/// Spotify Web API client authenticated with client credentials.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    /// Requests an access token and returns a ready client.
    pub async fn connect(config: &Config) -> Res<Self> {
        let http = Client::new();
        let token = auth::client_credentials_token(&http, config).await?;

        Ok(SpotifyClient {
            http,
            api_url: config.api_url.clone(),
            token: token.access_token,
        })
    }
}

impl SpotifyApi for SpotifyClient {
    async fn user_playlists(&self, user_id: &str) -> Res<Vec<RawPlaylist>> {
        Ok(playlists::get_user_playlists(&self.http, &self.api_url, &self.token, user_id).await?)
    }

    async fn user(&self, user_id: &str) -> Res<RawUser> {
        Ok(users::get_user(&self.http, &self.api_url, &self.token, user_id).await?)
    }

    async fn playlist_items(&self, playlist_id: &str) -> Res<Vec<RawPlaylistItem>> {
        Ok(
            playlists::get_playlist_items(&self.http, &self.api_url, &self.token, playlist_id)
                .await?,
        )
    }
}

/// Sends an authenticated GET and decodes the JSON body.
///
/// Retries a `502 Bad Gateway` a few times with a pause in between; other
/// errors are propagated immediately.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    token: &str,
) -> Result<T, reqwest::Error> {
    let mut attempt = 0;

    loop {
        let response = http.get(url).bearer_auth(token).send().await?;

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                if err.status() == Some(StatusCode::BAD_GATEWAY)
                    && attempt < MAX_BAD_GATEWAY_RETRIES
                {
                    attempt += 1;
                    sleep(BAD_GATEWAY_RETRY_DELAY).await;
                    continue; // retry
                }
                return Err(err);
            }
        };

        return response.json::<T>().await;
    }
}
