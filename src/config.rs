//! Configuration management for interactif
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{InteractifError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote guidance service settings
    #[serde(default)]
    pub service: ServiceConfig,
    /// Prompt handling settings
    #[serde(default)]
    pub chat: ChatConfig,
    /// Terminal output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Remote guidance service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service exposing `/structured-chat`
    #[serde(default = "default_service_url")]
    pub structured_url: String,

    /// Base URL of the service exposing `/chat`
    ///
    /// The assistant widget may be deployed separately from the structured
    /// endpoint, so it has its own base URL.
    #[serde(default = "default_service_url")]
    pub assistant_url: String,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_service_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    60
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            structured_url: default_service_url(),
            assistant_url: default_service_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Prompt handling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Longest prompt accepted, in characters
    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,

    /// Number of prompt words used to name a session
    #[serde(default = "default_session_name_words")]
    pub session_name_words: usize,
}

fn default_max_prompt_chars() -> usize {
    1000
}

fn default_session_name_words() -> usize {
    5
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: default_max_prompt_chars(),
            session_name_words: default_session_name_words(),
        }
    }
}

/// Terminal output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colorize output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| InteractifError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| InteractifError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(url) = std::env::var("INTERACTIF_STRUCTURED_URL") {
            self.service.structured_url = url;
        }

        if let Ok(url) = std::env::var("INTERACTIF_ASSISTANT_URL") {
            self.service.assistant_url = url;
        }

        if let Ok(timeout) = std::env::var("INTERACTIF_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.service.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid INTERACTIF_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(max_chars) = std::env::var("INTERACTIF_MAX_PROMPT_CHARS") {
            if let Ok(value) = max_chars.parse() {
                self.chat.max_prompt_chars = value;
            } else {
                tracing::warn!("Invalid INTERACTIF_MAX_PROMPT_CHARS: {}", max_chars);
            }
        }

        if let Ok(color) = std::env::var("INTERACTIF_COLOR") {
            match color.to_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => self.display.color = true,
                "0" | "false" | "off" | "no" => self.display.color = false,
                _ => tracing::warn!("Invalid INTERACTIF_COLOR: {}", color),
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let Some(url) = &cli.service_url {
            tracing::debug!("Using service URL override: {}", url);
            self.service.structured_url = url.clone();
            self.service.assistant_url = url.clone();
        }

        if cli.no_color {
            self.display.color = false;
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        validate_url("service.structured_url", &self.service.structured_url)?;
        validate_url("service.assistant_url", &self.service.assistant_url)?;

        if self.service.timeout_seconds == 0 {
            return Err(InteractifError::Config(
                "service.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.service.timeout_seconds > 600 {
            return Err(InteractifError::Config(
                "service.timeout_seconds must be less than or equal to 600".to_string(),
            )
            .into());
        }

        if self.chat.max_prompt_chars == 0 || self.chat.max_prompt_chars > 100_000 {
            return Err(InteractifError::Config(
                "chat.max_prompt_chars must be between 1 and 100000".to_string(),
            )
            .into());
        }

        if self.chat.session_name_words == 0 {
            return Err(InteractifError::Config(
                "chat.session_name_words must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(())
    }
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| InteractifError::Config(format!("{} is not a valid URL: {}", field, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(InteractifError::Config(format!(
            "{} must use http or https, got {}",
            field, other
        ))
        .into()),
    }
}
