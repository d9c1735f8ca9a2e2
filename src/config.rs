//! Configuration management for Song Derby.
//!
//! Values come from environment variables, which may be seeded from two
//! `.env` files in the local data directory:
//!
//! - `.env.credentials` - Spotify client id, client secret and current user
//! - `.env.misc` - API endpoints and the fuzzy ratio threshold
//!
//! Variables already present in the environment take priority over the files.
//! The resulting [`Config`] is built once at startup and handed to the
//! components that need it.

use std::{env, path::PathBuf};

use crate::{Error, Res, matcher};

pub const ENV_FILES: [&str; 2] = [".env.credentials", ".env.misc"];

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Returns the directory holding the `.env` files.
///
/// - Linux: `~/.local/share/songderby`
/// - macOS: `~/Library/Application Support/songderby`
/// - Windows: `%LOCALAPPDATA%/songderby`
pub fn config_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("songderby");
    path
}

/// Loads environment variables from the `.env` files in [`config_dir`].
///
/// Creates the directory if it doesn't exist. Files that are missing are
/// skipped; files that exist but cannot be parsed are reported as errors.
///
/// # Example
///
/// ```
/// use songderby::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Res<()> {
    let dir = config_dir();
    async_fs::create_dir_all(&dir).await?;

    for file in ENV_FILES {
        let path = dir.join(file);
        if path.is_file() {
            dotenv::from_path(&path)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Spotify user whose playlists are searched.
    pub current_user: String,
    pub api_url: String,
    pub token_url: String,
    pub fuzzy_ratio_threshold: f64,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingConfig`] when a credential variable is unset or empty
    /// - [`Error::InvalidConfig`] when `FUZZY_RATIO_THRESHOLD` is not a number
    ///   within `[0.0, 100.0]`
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(Error::MissingConfig(key));

        let fuzzy_ratio_threshold = match get("FUZZY_RATIO_THRESHOLD") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(|t| matcher::check_threshold(t).ok())
                .ok_or(Error::InvalidConfig {
                    key: "FUZZY_RATIO_THRESHOLD",
                    value: raw,
                })?,
            None => matcher::DEFAULT_FUZZY_RATIO_THRESHOLD,
        };

        Ok(Config {
            client_id: require("SPOTIFY_CLIENT_ID")?,
            client_secret: require("SPOTIFY_CLIENT_SECRET")?,
            current_user: require("SPOTIFY_CURRENT_USER")?,
            api_url: get("SPOTIFY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token_url: get("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            fuzzy_ratio_threshold,
        })
    }
}
