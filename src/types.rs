use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{error::ParseError, matcher::Named};

/// Format of the `added_at` field on playlist items.
pub const ADDED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlaylist {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
    pub id: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArtist {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrack {
    pub id: Option<String>,
    pub name: Option<String>,
    pub artists: Option<Vec<RawArtist>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAddedBy {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlaylistItem {
    pub added_at: Option<String>,
    pub added_by: Option<RawAddedBy>,
    pub track: Option<RawTrack>,
}

/// A playlist's identity, the candidate for fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

impl Named for Playlist {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
}

/// A track together with who added it to the playlist and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerbyEntry {
    pub track: Track,
    pub added_by: User,
    pub added_at: DateTime<Utc>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub position: usize,
    pub name: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct DerbyEntryTableRow {
    pub track: String,
    pub artists: String,
    pub added_by: String,
    pub added_at: String,
}

impl From<&DerbyEntry> for DerbyEntryTableRow {
    fn from(entry: &DerbyEntry) -> Self {
        DerbyEntryTableRow {
            track: entry.track.name.clone(),
            artists: entry
                .track
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            added_by: entry.added_by.display_name.clone(),
            added_at: entry.added_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn required(
    value: Option<String>,
    entity: &'static str,
    field: &'static str,
) -> Result<String, ParseError> {
    value.ok_or(ParseError::MissingField { entity, field })
}

pub fn parse_playlist(raw: RawPlaylist) -> Result<Playlist, ParseError> {
    Ok(Playlist {
        id: required(raw.id, "playlist", "id")?,
        name: required(raw.name, "playlist", "name")?,
    })
}

pub fn parse_user(raw: RawUser) -> Result<User, ParseError> {
    Ok(User {
        id: required(raw.id, "user", "id")?,
        display_name: required(raw.display_name, "user", "display_name")?,
    })
}

pub fn parse_artist(raw: RawArtist) -> Result<Artist, ParseError> {
    Ok(Artist {
        id: required(raw.id, "artist", "id")?,
        name: required(raw.name, "artist", "name")?,
    })
}

pub fn parse_track(raw: RawTrack) -> Result<Track, ParseError> {
    let artists = raw
        .artists
        .ok_or(ParseError::MissingField {
            entity: "track",
            field: "artists",
        })?
        .into_iter()
        .map(parse_artist)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Track {
        id: required(raw.id, "track", "id")?,
        name: required(raw.name, "track", "name")?,
        artists,
    })
}

/// Parses an `added_at` timestamp such as `2023-06-15T18:04:11Z`.
pub fn parse_added_at(value: &str) -> Result<DateTime<Utc>, ParseError> {
    NaiveDateTime::parse_from_str(value, ADDED_AT_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| ParseError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}
