//! Corral CLI
//!
//! Command-line interface for the unicorn registry. One-shot commands
//! cover the usual CRUD round trips; `corral browse` opens an
//! interactive paged table backed by the same view layer.

mod commands;
mod config;
mod view;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default log directives when RUST_LOG is unset
///
/// EnvFilter directives match on module-path segments, so the bin
/// target and both library crates have to be named individually for
/// their `tracing::error!` calls to come through.
const DEFAULT_LOG_FILTER: &str = "corral=warn,corral_cli=warn,corral_client=warn";

#[derive(Parser)]
#[command(name = "corral")]
#[command(about = "Unicorn registry CLI", long_about = None)]
struct Cli {
    /// Registry URL
    #[arg(long, env = "CORRAL_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
    };

    handle_command(cli.command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_default_log_filter_covers_library_crates() {
        // The client's error logging lives under the corral_client
        // target; a bare `corral` directive would not match it.
        assert!(DEFAULT_LOG_FILTER.contains("corral_client="));
        assert!(DEFAULT_LOG_FILTER.contains("corral_cli="));
    }
}
