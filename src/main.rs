use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use songderby::{cli, config, error, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the current user's playlists
    Playlists(PlaylistsOptions),

    /// Find a playlist by name and print its derby entries
    Derby(DerbyOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Fuzzy search playlists by name
    #[clap(long)]
    pub search: Option<String>,

    /// Minimum similarity (0-100) for a name to match
    #[clap(long, value_parser = utils::parse_threshold)]
    pub threshold: Option<f64>,
}

#[derive(Parser, Debug, Clone)]
pub struct DerbyOptions {
    /// Playlist (partial) name; prompted for when missing
    #[clap(long)]
    pub query: Option<String>,

    /// Position of the playlist in the list of matches; prompted for when missing
    #[clap(long)]
    pub position: Option<usize>,

    /// Minimum similarity (0-100) for a name to match
    #[clap(long, value_parser = utils::parse_threshold)]
    pub threshold: Option<f64>,

    /// Print the entries as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let config = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => error!(
            "Invalid configuration: {}\n Add it to {}",
            e,
            config::config_dir().join(".env.credentials").display()
        ),
    };

    match cli.command {
        Command::Playlists(opt) => cli::list_playlists(&config, opt.search, opt.threshold).await,
        Command::Derby(opt) => {
            cli::derby(
                &config,
                cli::DerbyOptions {
                    query: opt.query,
                    position: opt.position,
                    threshold: opt.threshold,
                    json: opt.json,
                },
            )
            .await
        }
        Command::Completions(_) => {}
    }
}
