//! Chakadola CLI entry point

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result, eyre};
use tracing::info;

use chakadola::cli::{Cli, Command, OutputFormat};
use chakadola::config::Config;
use chakadola::domain::TripDraft;
use chakadola::pipeline::{self, Providers};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(provider = %config.llm.provider, model = %config.llm.model, "config loaded");

    match cli.command {
        Some(Command::Plan { request, format }) => cmd_plan(&config, request, format).await,
        None => {
            // Default to planning from stdin
            cmd_plan(&config, None, OutputFormat::Pretty).await
        }
    }
}

async fn cmd_plan(config: &Config, request_path: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let raw = match request_path {
        Some(path) => {
            fs::read_to_string(&path).context(format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request from stdin")?;
            buffer
        }
    };

    // Accept the extraction-draft shape: any subset of fields present
    let draft: TripDraft = serde_json::from_str(&raw).context("Failed to parse trip request JSON")?;
    let request = draft.into_request();

    // Generation is only mandatory when no explicit places were given
    config
        .validate(!request.has_explicit_places())
        .context("Configuration invalid")?;

    let providers = Providers::from_config(config).await;
    let outcome = pipeline::run(&providers, &request).await;

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(&outcome)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(&outcome)?,
    };
    println!("{}", rendered);

    if outcome.itinerary.is_none() {
        return Err(eyre!(
            "itinerary generation failed: {}",
            outcome.error.unwrap_or_else(|| "unknown error".to_string())
        ));
    }
    Ok(())
}
