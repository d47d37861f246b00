//! Guidance service module
//!
//! This module contains the remote assistant abstraction and its HTTP
//! implementation.

pub mod base;
pub mod http;

pub use base::{
    ChatRequest, ChatResponse, GuidanceService, StructuredChatRequest, StructuredChatResponse,
};
pub use http::HttpGuidanceService;

use crate::config::ServiceConfig;
use crate::error::Result;

/// Create the guidance service described by `config`
///
/// # Errors
///
/// Returns error if the HTTP client cannot be built
pub fn create_service(config: &ServiceConfig) -> Result<Box<dyn GuidanceService>> {
    Ok(Box::new(HttpGuidanceService::new(config)?))
}
