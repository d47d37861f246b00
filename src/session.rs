//! Chat sessions
//!
//! A session is one prompt/response exchange with the guidance service.
//! Sessions live in memory for the lifetime of the process and are never
//! deleted; the store keeps the newest first.

use crate::guidance::StructuredResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest session name, in characters, before the ellipsis
const MAX_NAME_CHARS: usize = 48;

/// One prompt and the guidance the service returned for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique identifier
    pub id: String,
    /// Short name derived from the prompt
    pub name: String,
    /// The prompt as submitted
    pub prompt: String,
    /// Service-side session id, when one was returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    /// Guidance returned for the prompt
    pub data: StructuredResponse,
    /// When the response arrived
    pub timestamp: DateTime<Utc>,
}

impl ChatSession {
    /// Create a session, deriving its name from the first `name_words` words
    /// of the prompt
    ///
    /// # Examples
    ///
    /// ```
    /// use interactif::guidance::StructuredResponse;
    /// use interactif::session::ChatSession;
    ///
    /// let session = ChatSession::new("Plan the offsite", None, StructuredResponse::default(), 5);
    /// assert_eq!(session.name, "Plan the offsite");
    /// ```
    pub fn new(
        prompt: impl Into<String>,
        remote_id: Option<String>,
        data: StructuredResponse,
        name_words: usize,
    ) -> Self {
        let prompt = prompt.into();
        Self {
            id: Uuid::new_v4().to_string(),
            name: derive_session_name(&prompt, name_words),
            prompt,
            remote_id,
            data,
            timestamp: Utc::now(),
        }
    }
}

/// Build a short display name from the first `words` words of a prompt
///
/// Adds `...` when words were dropped or the name was cut at
/// [`MAX_NAME_CHARS`].
pub fn derive_session_name(prompt: &str, words: usize) -> String {
    let words = words.max(1);
    let all: Vec<&str> = prompt.split_whitespace().collect();
    if all.is_empty() {
        return "Untitled session".to_string();
    }

    let mut name = all[..all.len().min(words)].join(" ");
    let mut truncated = all.len() > words;
    if name.chars().count() > MAX_NAME_CHARS {
        name = name.chars().take(MAX_NAME_CHARS).collect::<String>();
        name = name.trim_end().to_string();
        truncated = true;
    }
    if truncated {
        name.push_str("...");
    }
    name
}

/// Append-ordered list of sessions, newest first
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Vec<ChatSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a session at the front
    pub fn push(&mut self, session: ChatSession) {
        tracing::debug!("Storing session {} ({})", session.id, session.name);
        self.sessions.insert(0, session);
    }

    /// Most recent session
    pub fn latest(&self) -> Option<&ChatSession> {
        self.sessions.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatSession> {
        self.sessions.iter()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
