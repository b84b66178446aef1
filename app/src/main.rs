//! Weather report server and command-line runner
//!
//! ```text
//! weather-report serve --port 8080        # web form and API
//! weather-report report "New York"        # one run, prints the report
//! weather-report smoke                    # diagnostic stream run for Toronto
//! ```
//!
//! Credentials come from `OPENAI_API_KEY` and `OPENWEATHERMAP_API_KEY`,
//! optionally through a `.env` file. Other settings come from the TOML file
//! named by `--config` or `WEATHER_REPORT_CONFIG`.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_report_pipeline::{CONFIG_PATH_ENV, DefaultPipeline, PipelineConfig, SMOKE_TEST_QUERY};

#[derive(Debug, Parser)]
#[command(name = "weather-report")]
#[command(author, version, about = "Weather reports from a free-text location", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(short, long, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve the web form and JSON API
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Run the pipeline once for a location and print the report
    Report {
        /// Free-form location, e.g. "New York"
        location: String,
    },

    /// Stream one diagnostic run, printing each stage's output
    Smoke {
        /// Query to seed the run with
        #[arg(short, long, default_value = SMOKE_TEST_QUERY)]
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if present)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    let config = PipelineConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if config.llm.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; runs will fail at city_extractor");
    }
    if config.weather.api_key.is_none() {
        tracing::warn!("OPENWEATHERMAP_API_KEY is not set; runs will fail at weather_fetcher");
    }

    let pipeline = DefaultPipeline::from_config(&config).context("Failed to build service clients")?;
    tracing::info!(model = pipeline.llm().model(), "Service clients ready");

    match cli.command {
        Commands::Serve { host, port } => commands::serve(pipeline, &host, port).await,
        Commands::Report { location } => commands::report(&pipeline, &location).await,
        Commands::Smoke { query } => commands::smoke(&pipeline, &query).await,
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "weather_report=info,weather_report_pipeline=info,weather_report_web=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
