//! Bookfind Command Line Tool
//!
//! Provides commands for working with catalog searches:
//! - validate: Check a query term against the submission rules
//! - search: Run one catalog search and print the raw JSON payload
//!
//! The catalog endpoint defaults to Open Library and can be overridden with
//! `--base-url` or the `BOOKFIND_URL` environment variable.

use anyhow::{bail, Context, Result};
use bookfind_core::{SearchQuery, GENERIC_ERROR_MESSAGE};
use bookfind_http::{CatalogClient, DEFAULT_BASE_URL};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookfind")]
#[command(version)]
#[command(about = "Bookfind Command Line Tool - Search the Open Library book catalog")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a query term
    #[command(about = "Check a query term against the submission rules")]
    Validate {
        /// The query term to check
        #[arg(value_name = "TERM")]
        term: String,
    },

    /// Search the catalog
    #[command(about = "Run one catalog search and print the raw JSON payload")]
    Search {
        /// The query term to search for
        #[arg(value_name = "TERM")]
        term: String,

        /// Catalog endpoint to use instead of the default
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookfind_http=info,bookfind_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { term } => handle_validate(&term),
        Commands::Search { term, base_url } => handle_search(&term, base_url).await,
    }
}

fn handle_validate(term: &str) -> Result<()> {
    match SearchQuery::parse(term) {
        Ok(query) => {
            println!("Valid query term: {}", query.term());
            Ok(())
        }
        // Validation errors carry the inline message; show it as-is
        Err(err) => bail!("{err}"),
    }
}

async fn handle_search(term: &str, base_url: Option<String>) -> Result<()> {
    let query = match SearchQuery::parse(term) {
        Ok(query) => query,
        Err(err) => bail!("{err}"),
    };

    let base_url = base_url
        .or_else(|| std::env::var("BOOKFIND_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let client = CatalogClient::new(base_url);

    match client.search(&query).await {
        Ok(results) => {
            let payload = serde_json::to_string_pretty(results.as_value())
                .context("Failed to render payload")?;
            println!("{payload}");
            Ok(())
        }
        Err(err) => {
            // Diagnostic detail goes to the logs; users get the one banner
            err.log();
            bail!("{GENERIC_ERROR_MESSAGE}")
        }
    }
}
