//!
//! src/main.rs  Andrew Belles  Oct 19th, 2026
//!
//! Command line entry point: one search against saavn, results
//! printed as a listing or as json
//!

use clap::Parser;

use saavn_search::{config, logging, AppError, SaavnClient, Song};

#[derive(Parser, Debug)]
#[command(name = "saavn-search", version, about = "Search songs on saavn.dev")]
struct Cli {
    /// Print results as pretty json instead of a listing
    #[arg(long)]
    json: bool,

    /// Only print the first N results (the api is not asked for fewer)
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Free text query, words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>
}

fn listing_line(index: usize, song: &Song) -> String {
    let year = song.year.as_deref().unwrap_or("-");
    format!("{:>2}. {} - {} ({year})", index + 1, song.name, song.primary_artist_names())
}

/// What goes to stdout: pretty json for piping, or one line per song
fn render(songs: &[Song], query: &str, json: bool) -> Result<String, AppError> {
    if json {
        return Ok(serde_json::to_string_pretty(songs)?);
    }
    if songs.is_empty() {
        return Ok(format!("no songs found for \"{query}\""));
    }
    Ok(songs.iter()
        .enumerate()
        .map(|(i, song)| listing_line(i, song))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli  = Cli::parse();
    let cfgs = config::load_config()?;
    let _log = logging::init_logging(&cfgs.logging)?;

    tracing::info!(
        service="saavn-search",
        version=%env!("CARGO_PKG_VERSION"),
        "starting"
    );

    let client = SaavnClient::new(&cfgs.http, &cfgs.saavn)?;
    tracing::debug!(base = %client.base_url(), "client.ready");

    let query = cli.query.join(" ");
    let mut songs = client.search_songs(&query).await?;
    if let Some(limit) = cli.limit {
        songs.truncate(limit);
    }

    println!("{}", render(&songs, &query, cli.json)?);

    tracing::info!(results = songs.len(), "done");
    Ok(())
}
