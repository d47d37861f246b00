//! Structured guidance returned by the assistant service
//!
//! These are the shapes the remote service hands back for every prompt:
//! prioritized action points and reflective "consider" points.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Priority of an action point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Do this first
    High,
    /// Default priority, also used for unrecognized values
    #[default]
    Medium,
    /// Can wait
    Low,
}

impl Priority {
    /// Parse a priority strictly (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use interactif::guidance::Priority;
    ///
    /// assert_eq!(Priority::parse_str("HIGH").unwrap(), Priority::High);
    /// assert!(Priority::parse_str("urgent").is_err());
    /// ```
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(format!("Unknown priority: {}", other)),
        }
    }

    /// Parse a priority leniently, falling back to [`Priority::Medium`]
    pub fn from_lenient(s: &str) -> Self {
        Self::parse_str(s).unwrap_or_default()
    }

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// The service sends free-form strings; anything unknown is treated as medium.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Priority::from_lenient(&raw))
    }
}

/// A single recommended task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPoint {
    /// What to do
    pub task: String,
    /// How urgent it is
    #[serde(default)]
    pub priority: Priority,
    /// Free-text due date ("Tomorrow", "Dec 15", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Extra notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ActionPoint {
    /// Create an action point with no due date or context
    pub fn new(task: impl Into<String>, priority: Priority) -> Self {
        Self {
            task: task.into(),
            priority,
            due_date: None,
            context: None,
        }
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Set the context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Known consideration categories with dedicated styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Risk,
    Opportunity,
    Process,
    People,
    Communication,
}

impl Category {
    /// Map a free-text category to a styled one; unknown values use `Process`
    pub fn from_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "risk" => Self::Risk,
            "opportunity" => Self::Opportunity,
            "people" => Self::People,
            "communication" => Self::Communication,
            _ => Self::Process,
        }
    }
}

/// A reflective note returned alongside the action points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsiderPoint {
    /// The note itself
    pub note: String,
    /// Optional category (risk, opportunity, process, people, communication)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Task text of the action this note relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_to_action: Option<String>,
}

impl ConsiderPoint {
    /// Create an uncategorized consider point
    pub fn new(note: impl Into<String>) -> Self {
        Self {
            note: note.into(),
            category: None,
            related_to_action: None,
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the related action
    pub fn related_to(mut self, action: impl Into<String>) -> Self {
        self.related_to_action = Some(action.into());
        self
    }

    /// Styled category, if one was given
    pub fn styled_category(&self) -> Option<Category> {
        self.category.as_deref().map(Category::from_lenient)
    }
}

/// Everything the service returns for one prompt
///
/// Both lists default to empty when the service omits them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuredResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action_points: Vec<ActionPoint>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub consider_points: Vec<ConsiderPoint>,
}

impl StructuredResponse {
    /// True when the service returned neither actions nor considerations
    pub fn is_empty(&self) -> bool {
        self.action_points.is_empty() && self.consider_points.is_empty()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
