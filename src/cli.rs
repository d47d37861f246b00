//! Command-line interface definition for interactif
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for the interactive dashboard, one-shot guidance
//! requests, the assistant chat and the company directory.

use clap::{Parser, Subcommand};

/// interactif - your internal guidance companion
///
/// Describe a situation, get an action plan and mindful considerations,
/// work through them and track your missions over time.
#[derive(Parser, Debug, Clone)]
#[command(name = "interactif")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the base URL of both guidance endpoints
    #[arg(long, env = "INTERACTIF_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the interactive guidance dashboard
    Chat {
        /// Submit this prompt right away
        #[arg(short, long)]
        prompt: Option<String>,
    },

    /// Ask for guidance once and print the action plan
    Ask {
        /// What you need help with
        prompt: String,

        /// Print the raw structured response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Free-form chat with the assistant
    Assistant {
        /// Send this message as soon as the chat opens
        #[arg(short, long)]
        prompt: Option<String>,
    },

    /// Show the company directory
    Directory {
        /// Tab to show (employees, protocols, projects, resources)
        #[arg(short, long)]
        tab: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
