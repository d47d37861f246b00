//! Interactif - internal guidance companion CLI
//!
#![doc = "Interactif - internal guidance companion CLI"]
#![doc = "Main entry point for the interactif application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interactif::cli::{Cli, Commands};
use interactif::commands;
use interactif::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    if !config.display.color {
        colored::control::set_override(false);
    }

    // Execute command
    match cli.command {
        Commands::Chat { prompt } => {
            tracing::info!("Starting interactive guidance session");
            if prompt.is_some() {
                tracing::debug!("Submitting initial prompt");
            }
            commands::chat::run_chat(config, prompt).await?;
            Ok(())
        }
        Commands::Ask { prompt, json } => {
            tracing::info!("Starting one-shot guidance request");
            commands::ask::run_ask(config, prompt, json).await?;
            Ok(())
        }
        Commands::Assistant { prompt } => {
            tracing::info!("Starting assistant chat");
            commands::assistant::run_assistant(config, prompt).await?;
            Ok(())
        }
        Commands::Directory { tab } => {
            commands::directory::show_directory(tab)?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so they never mix with rendered views.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "interactif=debug"
    } else {
        "interactif=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
