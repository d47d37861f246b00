//! Guidance service abstraction and wire types
//!
//! The remote assistant is a black box with two endpoints: `/structured-chat`
//! returns an action plan, `/chat` returns free text.

use crate::error::Result;
use crate::guidance::StructuredResponse;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of `POST /structured-chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredChatRequest {
    pub message: String,
    pub use_structured_output: bool,
}

impl StructuredChatRequest {
    /// Request structured output for `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            use_structured_output: true,
        }
    }
}

/// Success body of `POST /structured-chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredChatResponse {
    pub structured_data: StructuredResponse,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Success body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: String,
}

/// Remote assistant service
///
/// Implementations perform a single request per call. Nothing is retried.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use interactif::error::Result;
/// use interactif::guidance::StructuredResponse;
/// use interactif::service::{ChatResponse, GuidanceService, StructuredChatResponse};
///
/// struct Canned;
///
/// #[async_trait]
/// impl GuidanceService for Canned {
///     async fn structured_chat(&self, _message: &str) -> Result<StructuredChatResponse> {
///         Ok(StructuredChatResponse {
///             structured_data: StructuredResponse::default(),
///             session_id: None,
///         })
///     }
///
///     async fn chat(&self, message: &str) -> Result<ChatResponse> {
///         Ok(ChatResponse { response: message.to_string() })
///     }
/// }
/// ```
#[async_trait]
pub trait GuidanceService: Send + Sync {
    /// Ask for an action plan
    ///
    /// # Errors
    ///
    /// Returns `Service` on transport failure, `ServiceStatus` on a non-2xx
    /// answer and `MalformedResponse` when the body does not parse.
    async fn structured_chat(&self, message: &str) -> Result<StructuredChatResponse>;

    /// Free-form chat with the assistant
    async fn chat(&self, message: &str) -> Result<ChatResponse>;
}
