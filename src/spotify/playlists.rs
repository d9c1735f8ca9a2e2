use reqwest::Client;

use crate::types::{Page, RawPlaylist, RawPlaylistItem};

const PLAYLISTS_LIMIT: u32 = 50;

/// Retrieves the first page of playlists owned or followed by `user_id`.
///
/// # Example
///
/// ```
/// let playlists = get_user_playlists(&http, api_url, token, "my_user").await?;
/// ```
pub async fn get_user_playlists(
    http: &Client,
    api_url: &str,
    token: &str,
    user_id: &str,
) -> Result<Vec<RawPlaylist>, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists?limit={limit}",
        uri = api_url,
        user_id = user_id,
        limit = PLAYLISTS_LIMIT
    );

    let page = super::get_json::<Page<RawPlaylist>>(http, &api_url, token).await?;
    Ok(page.items)
}

/// Retrieves the first page of track items in `playlist_id`, including who
/// added each track and when.
pub async fn get_playlist_items(
    http: &Client,
    api_url: &str,
    token: &str,
    playlist_id: &str,
) -> Result<Vec<RawPlaylistItem>, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks?additional_types=track",
        uri = api_url,
        playlist_id = playlist_id
    );

    let page = super::get_json::<Page<RawPlaylistItem>>(http, &api_url, token).await?;
    Ok(page.items)
}
