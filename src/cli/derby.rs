use std::io;

use tabled::Table;

use crate::{config::Config, error, info, success, types::Playlist, utils, warning};

/// Options of the `derby` command.
#[derive(Debug, Clone, Default)]
pub struct DerbyOptions {
    pub query: Option<String>,
    pub position: Option<usize>,
    pub threshold: Option<f64>,
    pub json: bool,
}

/// Finds a playlist by approximate name, lets the user pick one of the
/// matches and prints its derby entries.
pub async fn derby(config: &Config, opts: DerbyOptions) {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let query = match opts.query {
        Some(q) => q,
        None => match utils::prompt(&mut input, "Provide a playlist (partial) name:") {
            Ok(Some(q)) => q,
            Ok(None) => error!("No playlist name provided."),
            Err(e) => error!("Cannot read playlist name. Err: {}", e),
        },
    };

    let fetcher = super::connect(config).await;
    let threshold = opts.threshold.unwrap_or(config.fuzzy_ratio_threshold);

    let pb = utils::spinner("Searching playlists...");
    let found = fetcher.filter_playlists_by_name_with(&query, threshold).await;
    pb.finish_and_clear();

    let found = match found {
        Ok(p) => p,
        Err(e) => error!("Failed to search playlists. Err: {}", e),
    };

    if found.is_empty() {
        warning!("No playlists found with given name.");
        return;
    }

    info!(
        "Found {} playlists: {}",
        found.len(),
        found
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("{}", Table::new(utils::playlist_table_rows(&found)));

    let selected: &Playlist = match opts.position {
        Some(position) => match found.get(position) {
            Some(p) => p,
            None => error!(
                "Position {} is out of range, {} playlists matched.",
                position,
                found.len()
            ),
        },
        None => loop {
            let answer = match utils::prompt(
                &mut input,
                "Which playlist would you like to retrieve information for? (provide list position [0-*]):",
            ) {
                Ok(Some(a)) => a,
                Ok(None) => error!("No playlist selected."),
                Err(e) => error!("Cannot read selection. Err: {}", e),
            };

            match utils::parse_position(&answer, found.len()) {
                Ok(p) => break &found[p],
                Err(e) => warning!("{}", e),
            }
        },
    };

    let pb = utils::spinner(&format!("Fetching derby entries for {}...", selected.name));
    let entries = fetcher.get_derby_entries(&selected.id).await;
    pb.finish_and_clear();

    let entries = match entries {
        Ok(e) => e,
        Err(e) => error!("Failed to fetch derby entries. Err: {}", e),
    };

    if opts.json {
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Cannot serialize derby entries. Err: {}", e),
        }
    } else {
        println!("{}", Table::new(utils::derby_entry_table_rows(&entries)));
    }

    success!(
        "Retrieved {} derby entries from {}",
        entries.len(),
        selected.name
    );
}
