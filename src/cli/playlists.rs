use tabled::Table;

use crate::{config::Config, error, info, utils, warning};

/// Lists the current user's playlists, optionally narrowed by a fuzzy search.
pub async fn list_playlists(config: &Config, search: Option<String>, threshold: Option<f64>) {
    let fetcher = super::connect(config).await;

    let pb = utils::spinner("Fetching playlists...");
    let playlists = match &search {
        Some(query) => {
            let threshold = threshold.unwrap_or(config.fuzzy_ratio_threshold);
            fetcher.filter_playlists_by_name_with(query, threshold).await
        }
        None => fetcher.get_playlists().await,
    };
    pb.finish_and_clear();

    let playlists = match playlists {
        Ok(p) => p,
        Err(e) => error!("Failed to fetch playlists. Err: {}", e),
    };

    if playlists.is_empty() {
        match search {
            Some(query) => warning!("No playlists found matching \"{}\".", query),
            None => warning!("User {} has no playlists.", fetcher.current_user()),
        }
        return;
    }

    info!("Found {} playlists", playlists.len());
    println!("{}", Table::new(utils::playlist_table_rows(&playlists)));
}
