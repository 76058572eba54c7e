//! CLI binary for microscout.
//!
//! Diagnostic output goes to stderr so JSON printed by `search` and
//! `scrape` stays clean on stdout.

use clap::{Parser, Subcommand};
use microscout::api::{scrape_body, search_body};
use microscout::{FaqStore, JsonFileStore, ServiceConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// microscout: FAQ keyword search and single-page metadata scraping.
#[derive(Parser)]
#[command(name = "microscout", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// FAQ data file (overrides the config file).
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service.
    Serve {
        /// Port to listen on (overrides the config file).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Search the FAQ data and print the response JSON.
    Search {
        /// Case-insensitive substring to look for.
        query: String,
    },

    /// Scrape one page and print the response JSON.
    Scrape {
        /// http:// or https:// URL.
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Users can override with RUST_LOG=debug to see everything.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("microscout=info,microscout_core=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => ServiceConfig::from_file(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    config.validate()?;

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            run_serve(config).await
        }
        Command::Search { query } => run_search(config, &query).await,
        Command::Scrape { url } => run_scrape(config, &url).await,
    }
}

async fn run_serve(config: ServiceConfig) -> anyhow::Result<ExitCode> {
    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down...");
        }
    };

    microscout::run_server(config, shutdown)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "microscout exited with error");
            anyhow::anyhow!("microscout failed: {e}")
        })?;
    Ok(ExitCode::SUCCESS)
}

async fn run_search(config: ServiceConfig, query: &str) -> anyhow::Result<ExitCode> {
    if query.is_empty() {
        anyhow::bail!("Query cannot be empty");
    }

    let store = JsonFileStore::new(&config.data_path);
    let records = store.load().await?;
    let outcome = microscout_core::search_with_summary(query, &records);

    println!("{}", serde_json::to_string_pretty(&search_body(&outcome))?);
    Ok(ExitCode::SUCCESS)
}

async fn run_scrape(config: ServiceConfig, url: &str) -> anyhow::Result<ExitCode> {
    if !microscout::api::is_http_url(url) {
        anyhow::bail!("Invalid URL");
    }

    let scraper = microscout_core::Scraper::new(config.scrape)?;
    let outcome = scraper.scrape(url).await;
    let (_, body) = scrape_body(&outcome);

    println!("{}", serde_json::to_string_pretty(&body)?);
    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
