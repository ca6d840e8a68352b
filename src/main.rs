// src/main.rs

//! Planning-notice crawler CLI.
//!
//! Fetches the council's planning listing page and persists newly observed
//! applications into a SQLite database, skipping references already seen.

use clap::{Parser, Subcommand};

use planning_crawler::error::Result;
use planning_crawler::models::Config;
use planning_crawler::pipeline::{LogReporter, run_ingest};
use planning_crawler::storage::SqliteStore;
use planning_crawler::utils::HttpFetcher;

#[derive(Parser, Debug)]
#[command(
    name = "planning-crawler",
    version,
    about = "Circular Head planning application crawler"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    /// Override the listing page URL
    #[arg(long)]
    url: Option<String>,

    /// Override the database file path
    #[arg(long)]
    store: Option<String>,

    /// Override the User-Agent identity
    #[arg(long)]
    user_agent: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// CLI Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the listing page and store new applications (default)
    Run,
    /// Validate the configuration
    Validate,
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config);
    if let Some(url) = cli.url {
        config.fetch.url = url;
    }
    if let Some(path) = cli.store {
        config.store.path = path;
    }
    if let Some(user_agent) = cli.user_agent {
        config.fetch.user_agent = user_agent;
    }
    config.validate()?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let fetcher = HttpFetcher::new(&config.fetch)?;
            let store = SqliteStore::open(&config.store.path).await?;
            let summary = run_ingest(&config, &fetcher, &store, &LogReporter).await?;

            println!(
                "Done: {} candidates, {} inserted, {} skipped, {} invalid.",
                summary.candidates, summary.inserted, summary.skipped, summary.invalid
            );
        }
        Command::Validate => {
            println!("Configuration OK.");
            println!("    url: {}", config.fetch.url);
            println!("    user_agent: {}", config.fetch.user_agent);
            println!("    timeout_secs: {}", config.fetch.timeout_secs);
            println!("    store: {}", config.store.path);
            println!("    row_selector: {}", config.listing.row_selector);
        }
    }

    Ok(())
}
