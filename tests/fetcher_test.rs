use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use songderby::{
    Error, ParseError, Res,
    config::Config,
    fetcher::Fetcher,
    spotify::SpotifyApi,
    types::{RawAddedBy, RawArtist, RawPlaylist, RawPlaylistItem, RawTrack, RawUser},
};

/// In-memory stand-in for the Spotify Web API.
#[derive(Default)]
struct FakeSpotify {
    playlists: HashMap<String, Vec<RawPlaylist>>,
    users: HashMap<String, RawUser>,
    items: HashMap<String, Vec<RawPlaylistItem>>,
    playlist_calls: AtomicUsize,
    user_calls: AtomicUsize,
}

impl SpotifyApi for FakeSpotify {
    async fn user_playlists(&self, user_id: &str) -> Res<Vec<RawPlaylist>> {
        self.playlist_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.playlists.get(user_id).cloned().unwrap_or_default())
    }

    async fn user(&self, user_id: &str) -> Res<RawUser> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| Error::InvalidArgument(format!("unknown user {}", user_id)))
    }

    async fn playlist_items(&self, playlist_id: &str) -> Res<Vec<RawPlaylistItem>> {
        Ok(self.items.get(playlist_id).cloned().unwrap_or_default())
    }
}

fn test_config() -> Config {
    Config {
        client_id: "id".to_string(),
        client_secret: "secret".to_string(),
        current_user: "owner".to_string(),
        api_url: "http://localhost".to_string(),
        token_url: "http://localhost/token".to_string(),
        fuzzy_ratio_threshold: 75.0,
    }
}

fn raw_playlist(id: &str, name: &str) -> RawPlaylist {
    RawPlaylist {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
    }
}

fn raw_user(id: &str, display_name: &str) -> RawUser {
    RawUser {
        id: Some(id.to_string()),
        display_name: Some(display_name.to_string()),
    }
}

fn raw_item(track_id: &str, track_name: &str, added_by: &str, added_at: &str) -> RawPlaylistItem {
    RawPlaylistItem {
        added_at: Some(added_at.to_string()),
        added_by: Some(RawAddedBy {
            id: Some(added_by.to_string()),
        }),
        track: Some(RawTrack {
            id: Some(track_id.to_string()),
            name: Some(track_name.to_string()),
            artists: Some(vec![RawArtist {
                id: Some(format!("{}_artist", track_id)),
                name: Some(format!("{} Artist", track_name)),
            }]),
        }),
    }
}

fn fake_with_playlists() -> FakeSpotify {
    let mut fake = FakeSpotify::default();
    fake.playlists.insert(
        "owner".to_string(),
        vec![
            raw_playlist("1", "2023 Road Trip Mix"),
            raw_playlist("2", "Workout Jams"),
            raw_playlist("3", "Road Trip Classics"),
        ],
    );
    fake
}

#[tokio::test]
async fn test_get_playlists() {
    let fetcher = Fetcher::new(fake_with_playlists(), &test_config());
    let playlists = fetcher.get_playlists().await.unwrap();

    let names: Vec<&str> = playlists.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["2023 Road Trip Mix", "Workout Jams", "Road Trip Classics"]
    );
}

#[tokio::test]
async fn test_get_playlists_rejects_malformed_record() {
    let mut fake = FakeSpotify::default();
    fake.playlists.insert(
        "owner".to_string(),
        vec![raw_playlist("1", "Fine"), RawPlaylist::default()],
    );

    let fetcher = Fetcher::new(fake, &test_config());
    assert!(matches!(
        fetcher.get_playlists().await,
        Err(Error::Parse(ParseError::MissingField { .. }))
    ));
}

#[tokio::test]
async fn test_filter_playlists_by_name() {
    let fetcher = Fetcher::new(fake_with_playlists(), &test_config());
    let found = fetcher.filter_playlists_by_name("road trip").await.unwrap();

    let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[tokio::test]
async fn test_filter_playlists_by_name_without_match() {
    let fetcher = Fetcher::new(fake_with_playlists(), &test_config());
    let found = fetcher.filter_playlists_by_name("xyz").await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_filter_playlists_by_name_with_zero_threshold() {
    let fetcher = Fetcher::new(fake_with_playlists(), &test_config());
    let found = fetcher
        .filter_playlists_by_name_with("xyz", 0.0)
        .await
        .unwrap();
    assert_eq!(found.len(), 3);
}

#[tokio::test]
async fn test_filter_playlists_invalid_threshold_skips_request() {
    let fake = fake_with_playlists();
    let fetcher = Fetcher::new(fake, &test_config());

    let result = fetcher.filter_playlists_by_name_with("road", 100.01).await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert_eq!(fetcher.client().playlist_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_filter_playlists_for_user_without_playlists() {
    let fetcher = Fetcher::new(FakeSpotify::default(), &test_config());
    let found = fetcher.filter_playlists_by_name("road trip").await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_get_derby_entries() {
    let mut fake = FakeSpotify::default();
    fake.users.insert("alice".to_string(), raw_user("alice", "Alice"));
    fake.users.insert("bob".to_string(), raw_user("bob", "Bob"));
    fake.items.insert(
        "p1".to_string(),
        vec![
            raw_item("t1", "First", "alice", "2023-06-15T18:04:11Z"),
            raw_item("t2", "Second", "bob", "2023-06-16T09:00:00Z"),
            raw_item("t3", "Third", "alice", "2023-06-17T21:30:00Z"),
        ],
    );

    let fetcher = Fetcher::new(fake, &test_config());
    let entries = fetcher.get_derby_entries("p1").await.unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].track.name, "First");
    assert_eq!(entries[0].track.artists[0].name, "First Artist");
    assert_eq!(entries[0].added_by.display_name, "Alice");
    assert_eq!(entries[1].added_by.display_name, "Bob");
    assert_eq!(entries[2].added_by.id, "alice");
    assert_eq!(
        entries[2].added_at.format("%Y-%m-%d %H:%M").to_string(),
        "2023-06-17 21:30"
    );
}

#[tokio::test]
async fn test_get_derby_entries_looks_up_each_adder_once() {
    let mut fake = FakeSpotify::default();
    fake.users.insert("alice".to_string(), raw_user("alice", "Alice"));
    fake.items.insert(
        "p1".to_string(),
        vec![
            raw_item("t1", "First", "alice", "2023-06-15T18:04:11Z"),
            raw_item("t2", "Second", "alice", "2023-06-16T09:00:00Z"),
        ],
    );

    let fetcher = Fetcher::new(fake, &test_config());
    let entries = fetcher.get_derby_entries("p1").await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(fetcher.client().user_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_get_derby_entries_empty_playlist() {
    let fetcher = Fetcher::new(FakeSpotify::default(), &test_config());
    let entries = fetcher.get_derby_entries("missing").await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_get_derby_entries_missing_track() {
    let mut fake = FakeSpotify::default();
    fake.users.insert("alice".to_string(), raw_user("alice", "Alice"));
    let mut item = raw_item("t1", "First", "alice", "2023-06-15T18:04:11Z");
    item.track = None;
    fake.items.insert("p1".to_string(), vec![item]);

    let fetcher = Fetcher::new(fake, &test_config());
    assert!(matches!(
        fetcher.get_derby_entries("p1").await,
        Err(Error::Parse(ParseError::MissingField { field: "track", .. }))
    ));
}

#[tokio::test]
async fn test_get_derby_entries_invalid_timestamp() {
    let mut fake = FakeSpotify::default();
    fake.users.insert("alice".to_string(), raw_user("alice", "Alice"));
    fake.items.insert(
        "p1".to_string(),
        vec![raw_item("t1", "First", "alice", "15/06/2023")],
    );

    let fetcher = Fetcher::new(fake, &test_config());
    assert!(matches!(
        fetcher.get_derby_entries("p1").await,
        Err(Error::Parse(ParseError::InvalidTimestamp { .. }))
    ));
}

#[tokio::test]
async fn test_get_derby_entries_propagates_user_lookup_failure() {
    let mut fake = FakeSpotify::default();
    fake.items.insert(
        "p1".to_string(),
        vec![raw_item("t1", "First", "ghost", "2023-06-15T18:04:11Z")],
    );

    let fetcher = Fetcher::new(fake, &test_config());
    assert!(fetcher.get_derby_entries("p1").await.is_err());
}
