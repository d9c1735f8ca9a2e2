//! # CLI Module
//!
//! User-facing commands of Song Derby. Each command connects to Spotify with
//! the loaded [`Config`], reports progress with spinners and status macros and
//! terminates the program on unrecoverable errors.
//!
//! ## Commands
//!
//! - [`list_playlists`] - Lists the current user's playlists, optionally fuzzy filtered
//! - [`derby`] - Finds a playlist by approximate name and prints its derby entries
//!
//! ## Usage Patterns
//!
//! ```bash
//! songderby playlists                        # All playlists of the current user
//! songderby playlists --search "road trip"   # Fuzzy search by name
//! songderby derby                            # Interactive: prompt for name and selection
//! songderby derby --query "road trip" --position 0 --json
//! ```

mod derby;
mod playlists;

pub use derby::DerbyOptions;
pub use derby::derby;
pub use playlists::list_playlists;

use crate::{config::Config, error, fetcher::Fetcher, spotify::SpotifyClient, utils};

async fn connect(config: &Config) -> Fetcher<SpotifyClient> {
    let pb = utils::spinner("Authenticating with Spotify...");
    let client = SpotifyClient::connect(config).await;
    pb.finish_and_clear();

    match client {
        Ok(c) => Fetcher::new(c, config),
        Err(e) => error!(
            "Cannot authenticate with Spotify. Check SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET.\n Error: {}",
            e
        ),
    }
}
