//! Assistant chat transcript
//!
//! Free-form conversation with the assistant through the `/chat` endpoint.
//! Failures never abort the conversation: a generic apology is added to the
//! transcript instead.

use crate::app::LoadingGuard;
use crate::service::GuidanceService;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shown when the service answers with an empty response
pub const EMPTY_REPLY_TEXT: &str = "Sorry, I could not process your request.";

/// Shown when the request fails
pub const ERROR_REPLY_TEXT: &str =
    "Sorry, there was an error processing your request. Please try again.";

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One line of the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// True for the apology inserted after a failed request
    #[serde(default)]
    pub is_error: bool,
}

impl TranscriptMessage {
    fn new(role: Role, text: impl Into<String>, is_error: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
            is_error,
        }
    }
}

/// Ordered conversation with the assistant
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<TranscriptMessage>,
    loading: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[TranscriptMessage] {
        &self.messages
    }

    /// True while a request is pending
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Send `input` to the assistant and append both sides to the transcript
    ///
    /// Blank input and input sent while a request is pending are ignored.
    /// Returns the assistant message that was appended, if any.
    pub async fn send(
        &mut self,
        service: &dyn GuidanceService,
        input: &str,
    ) -> Option<&TranscriptMessage> {
        let text = input.trim();
        if text.is_empty() || self.loading {
            return None;
        }

        self.messages
            .push(TranscriptMessage::new(Role::User, text, false));

        let result = {
            let _loading = LoadingGuard::new(&mut self.loading);
            service.chat(text).await
        };

        let reply = match result {
            Ok(response) if response.response.is_empty() => {
                tracing::warn!("Assistant returned an empty response");
                TranscriptMessage::new(Role::Assistant, EMPTY_REPLY_TEXT, false)
            }
            Ok(response) => TranscriptMessage::new(Role::Assistant, response.response, false),
            Err(e) => {
                tracing::error!("Error sending message: {}", e);
                TranscriptMessage::new(Role::Assistant, ERROR_REPLY_TEXT, true)
            }
        };

        self.messages.push(reply);
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InteractifError, Result};
    use crate::service::{ChatResponse, StructuredChatResponse};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Scripted {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(reply: Option<&str>) -> Self {
            Self {
                reply: reply.map(str::to_string),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl GuidanceService for Scripted {
        async fn structured_chat(&self, _message: &str) -> Result<StructuredChatResponse> {
            unreachable!("assistant chat never asks for structured output")
        }

        async fn chat(&self, _message: &str) -> Result<ChatResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Some(text) => Ok(ChatResponse {
                    response: text.clone(),
                }),
                None => Err(InteractifError::Service("connection refused".to_string()).into()),
            }
        }
    }

    #[tokio::test]
    async fn test_send_appends_both_sides() {
        let service = Scripted::new(Some("Sure, here is how."));
        let mut transcript = Transcript::new();

        let reply = transcript.send(&service, "  How do I start?  ").await.unwrap();
        assert_eq!(reply.text, "Sure, here is how.");
        assert_eq!(reply.role, Role::Assistant);

        let messages = transcript.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].text, "How do I start?");
        assert!(!transcript.is_loading());
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let service = Scripted::new(Some("unused"));
        let mut transcript = Transcript::new();
        assert!(transcript.send(&service, "   ").await.is_none());
        assert!(transcript.messages().is_empty());
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_reply_uses_fallback_text() {
        let service = Scripted::new(Some(""));
        let mut transcript = Transcript::new();
        let reply = transcript.send(&service, "hi").await.unwrap();
        assert_eq!(reply.text, EMPTY_REPLY_TEXT);
        assert!(!reply.is_error);
    }

    #[tokio::test]
    async fn test_whitespace_reply_is_kept() {
        let service = Scripted::new(Some("  "));
        let mut transcript = Transcript::new();
        let reply = transcript.send(&service, "hi").await.unwrap();
        assert_eq!(reply.text, "  ");
    }

    #[tokio::test]
    async fn test_failure_inserts_error_message() {
        let service = Scripted::new(None);
        let mut transcript = Transcript::new();
        let reply = transcript.send(&service, "hi").await.unwrap();
        assert_eq!(reply.text, ERROR_REPLY_TEXT);
        assert!(reply.is_error);
        assert!(!transcript.is_loading());

        // the conversation stays usable
        assert!(transcript.send(&service, "again").await.is_some());
        assert_eq!(transcript.messages().len(), 4);
    }
}
