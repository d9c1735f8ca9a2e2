//! Playlist lookup and derby entry extraction on top of a [`SpotifyApi`].

use std::collections::HashMap;

use crate::{
    Res,
    config::Config,
    error::ParseError,
    matcher,
    spotify::SpotifyApi,
    types::{self, DerbyEntry, Playlist, User},
};

/// Fetches playlists of one Spotify user and turns them into derby entries.
pub struct Fetcher<C> {
    client: C,
    current_user: String,
    fuzzy_ratio_threshold: f64,
}

impl<C: SpotifyApi> Fetcher<C> {
    pub fn new(client: C, config: &Config) -> Self {
        Fetcher {
            client,
            current_user: config.current_user.clone(),
            fuzzy_ratio_threshold: config.fuzzy_ratio_threshold,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    /// Playlists of the current user, in the order Spotify returns them.
    pub async fn get_playlists(&self) -> Res<Vec<Playlist>> {
        let raw = self.client.user_playlists(&self.current_user).await?;
        Ok(raw
            .into_iter()
            .map(types::parse_playlist)
            .collect::<Result<Vec<_>, _>>()?)
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Res<User> {
        let raw = self.client.user(user_id).await?;
        Ok(types::parse_user(raw)?)
    }

    /// Reads every track of `playlist_id` and pairs it with the user who
    /// added it and the time it was added.
    ///
    /// Each distinct adder is looked up once per call. Entries keep the
    /// playlist order.
    ///
    /// # Errors
    ///
    /// Any item missing its track, adder or timestamp fails the whole call with
    /// a [`ParseError`].
    pub async fn get_derby_entries(&self, playlist_id: &str) -> Res<Vec<DerbyEntry>> {
        let items = self.client.playlist_items(playlist_id).await?;

        let mut users: HashMap<String, User> = HashMap::new();
        let mut entries = Vec::with_capacity(items.len());

        for item in items {
            let track = types::parse_track(item.track.ok_or(ParseError::MissingField {
                entity: "playlist item",
                field: "track",
            })?)?;

            let added_by_id = item
                .added_by
                .and_then(|added_by| added_by.id)
                .ok_or(ParseError::MissingField {
                    entity: "playlist item",
                    field: "added_by",
                })?;

            let added_at = item.added_at.ok_or(ParseError::MissingField {
                entity: "playlist item",
                field: "added_at",
            })?;
            let added_at = types::parse_added_at(&added_at)?;

            let added_by = match users.get(&added_by_id) {
                Some(user) => user.clone(),
                None => {
                    let user = self.get_user_by_id(&added_by_id).await?;
                    users.insert(added_by_id, user.clone());
                    user
                }
            };

            entries.push(DerbyEntry {
                track,
                added_by,
                added_at,
            });
        }

        Ok(entries)
    }

    /// Playlists whose name fuzzily matches `name_query` with the configured
    /// threshold.
    pub async fn filter_playlists_by_name(&self, name_query: &str) -> Res<Vec<Playlist>> {
        self.filter_playlists_by_name_with(name_query, self.fuzzy_ratio_threshold)
            .await
    }

    /// Playlists whose name fuzzily matches `name_query` with at least
    /// `fuzzy_ratio_threshold` (0.0 to 100.0, least to most similar).
    ///
    /// The threshold is checked before any request is made.
    pub async fn filter_playlists_by_name_with(
        &self,
        name_query: &str,
        fuzzy_ratio_threshold: f64,
    ) -> Res<Vec<Playlist>> {
        matcher::check_threshold(fuzzy_ratio_threshold)?;
        let playlists = self.get_playlists().await?;
        matcher::filter_by_name(&playlists, name_query, fuzzy_ratio_threshold)
    }
}
