//! HTTP implementation of the guidance service
//!
//! Talks JSON over reqwest to the `/structured-chat` and `/chat` endpoints.
//! The two endpoints may live on different hosts.

use crate::config::ServiceConfig;
use crate::error::{InteractifError, Result};
use crate::service::{
    ChatRequest, ChatResponse, GuidanceService, StructuredChatRequest, StructuredChatResponse,
};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// reqwest-backed guidance service
///
/// # Examples
///
/// ```
/// use interactif::config::ServiceConfig;
/// use interactif::service::HttpGuidanceService;
///
/// let service = HttpGuidanceService::new(&ServiceConfig::default()).unwrap();
/// assert_eq!(service.structured_endpoint(), "http://localhost:8000/structured-chat");
/// ```
pub struct HttpGuidanceService {
    client: Client,
    structured_endpoint: String,
    chat_endpoint: String,
}

impl HttpGuidanceService {
    /// Create a new HTTP guidance service
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("interactif/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| InteractifError::Service(format!("Failed to create HTTP client: {}", e)))?;

        let structured_endpoint = join_endpoint(&config.structured_url, "structured-chat");
        let chat_endpoint = join_endpoint(&config.assistant_url, "chat");

        tracing::info!(
            "Initialized guidance service: structured={}, chat={}",
            structured_endpoint,
            chat_endpoint
        );

        Ok(Self {
            client,
            structured_endpoint,
            chat_endpoint,
        })
    }

    /// Full URL of the structured-chat endpoint
    pub fn structured_endpoint(&self) -> &str {
        &self.structured_endpoint
    }

    /// Full URL of the chat endpoint
    pub fn chat_endpoint(&self) -> &str {
        &self.chat_endpoint
    }

    async fn post_json<Req, Resp>(&self, url: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", url, e);
            InteractifError::Service(format!("Failed to reach guidance service: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Guidance service returned error {}: {}", status, error_text);
            return Err(InteractifError::ServiceStatus {
                status: status.as_u16(),
                body: error_text,
            }
            .into());
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            InteractifError::Service(format!("Failed to read response body: {}", e))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse guidance response: {}", e);
            InteractifError::MalformedResponse(e.to_string()).into()
        })
    }
}

#[async_trait]
impl GuidanceService for HttpGuidanceService {
    async fn structured_chat(&self, message: &str) -> Result<StructuredChatResponse> {
        let request = StructuredChatRequest::new(message);
        let response: StructuredChatResponse =
            self.post_json(&self.structured_endpoint, &request).await?;
        tracing::debug!(
            "Received {} action points and {} consider points",
            response.structured_data.action_points.len(),
            response.structured_data.consider_points.len()
        );
        Ok(response)
    }

    async fn chat(&self, message: &str) -> Result<ChatResponse> {
        let request = ChatRequest {
            message: message.to_string(),
        };
        self.post_json(&self.chat_endpoint, &request).await
    }
}

/// Join a base URL and an endpoint path without doubling slashes
fn join_endpoint(base: &str, endpoint: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), endpoint)
}
