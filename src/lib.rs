//! Song Derby CLI Library
//!
//! This library fetches a Spotify playlist chosen by (approximate) name and
//! reshapes its tracks, together with who added them and when, into derby
//! entries for the song guessing game.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration struct and `.env` loading
//! - `error` - Error types
//! - `fetcher` - Playlist lookup and derby entry extraction
//! - `matcher` - Fuzzy playlist name matching
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Raw records, typed entities and their parsers
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use songderby::{config, fetcher::Fetcher, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> songderby::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     let client = SpotifyClient::connect(&config).await?;
//!     let fetcher = Fetcher::new(client, &config);
//!     let playlists = fetcher.filter_playlists_by_name("road trip").await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod matcher;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, ParseError};

/// A convenient Result type alias for operations that may fail.
///
/// # Example
///
/// ```
/// use songderby::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching playlists...");
/// info!("Found {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal errors in the binary; library code returns
/// [`Error`] instead.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as an invalid answer at a prompt.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
