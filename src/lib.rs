//! Interactif - internal guidance companion library
//!
//! This library provides the core of the interactif client: sending a
//! situation to the guidance service, working through the returned action
//! points and considerations, and tracking finished missions.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `app`: Application state, prompt submission and the view router
//! - `board`: Action and consideration boards for the current session
//! - `session` / `mission`: Session store and mission ledger
//! - `service`: Guidance service abstraction and its HTTP client
//! - `assistant`: Free-form assistant chat transcript
//! - `render`: Terminal rendering for every view
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli` / `commands`: Command-line interface and its handlers
//!
//! # Example
//!
//! ```no_run
//! use interactif::service::create_service;
//! use interactif::{App, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let service = create_service(&config.service)?;
//!     let mut app = App::new(config.chat);
//!     let dashboard = app
//!         .submit_prompt(service.as_ref(), "Staff meeting in 5")
//!         .await?;
//!     println!("{} action points", dashboard.actions.len());
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod assistant;
pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod guidance;
pub mod mission;
pub mod render;
pub mod service;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use app::{App, Dashboard};
pub use config::Config;
pub use error::{InteractifError, Result};
pub use view::View;

#[cfg(test)]
pub mod test_utils;
