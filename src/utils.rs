use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{DerbyEntry, DerbyEntryTableRow, Playlist, PlaylistTableRow};

/// Parses a zero-based list position typed by the user.
///
/// Returns a message suitable for re-prompting when the input is not an
/// integer or is out of range.
pub fn parse_position(input: &str, len: usize) -> Result<usize, String> {
    let position = input
        .trim()
        .parse::<usize>()
        .map_err(|_| "Provide a valid integer position in the list.".to_string())?;

    if position >= len {
        return Err("Provide a valid position in the list.".to_string());
    }
    Ok(position)
}

pub fn playlist_table_rows(playlists: &[Playlist]) -> Vec<PlaylistTableRow> {
    playlists
        .iter()
        .enumerate()
        .map(|(position, p)| PlaylistTableRow {
            position,
            name: p.name.clone(),
            id: p.id.clone(),
        })
        .collect()
}

pub fn derby_entry_table_rows(entries: &[DerbyEntry]) -> Vec<DerbyEntryTableRow> {
    entries.iter().map(DerbyEntryTableRow::from).collect()
}

/// Prints `message` and reads one line from `input`.
///
/// Returns `None` once the input is exhausted.
pub fn prompt<R: BufRead>(input: &mut R, message: &str) -> io::Result<Option<String>> {
    print!("{} ", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Parses a fuzzy ratio threshold given on the command line.
pub fn parse_threshold(s: &str) -> Result<f64, String> {
    let threshold = s
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("`{}` is not a number", s))?;
    crate::matcher::check_threshold(threshold).map_err(|e| e.to_string())
}
