//! Screens of the application
//!
//! Exactly one view is active at a time:
//! - Chat: prompt entry and example prompts
//! - Dashboard: action and consideration boards for the current session
//! - Analysis: mission history and aggregate progress
//! - Directory: the static company directory

use colored::Colorize;
use std::fmt;

/// The active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Prompt entry
    #[default]
    Chat,
    /// Current session's action plan
    Dashboard,
    /// Mission history
    Analysis,
    /// Company directory
    Directory,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chat => write!(f, "chat"),
            Self::Dashboard => write!(f, "dashboard"),
            Self::Analysis => write!(f, "analysis"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

impl View {
    /// One-line description of the view
    pub fn description(&self) -> &'static str {
        match self {
            Self::Chat => "Describe your situation or ask for guidance",
            Self::Dashboard => "Your action plan and mindful considerations",
            Self::Analysis => "Your completed missions over time",
            Self::Directory => "People and resources across the company",
        }
    }

    /// Whether a user-triggered switch from `self` to `to` is allowed
    ///
    /// Dashboard is only ever entered by a successful prompt submission, so
    /// it is never a valid navigation target here. Analysis is reachable from
    /// chat only once a mission exists.
    pub fn can_navigate(&self, to: View, has_missions: bool) -> bool {
        matches!(
            (self, to),
            (Self::Dashboard, Self::Chat)
                | (Self::Dashboard, Self::Analysis)
                | (Self::Analysis, Self::Chat)
                | (Self::Directory, Self::Chat)
                | (Self::Chat, Self::Directory)
        ) || (*self == Self::Chat && to == Self::Analysis && has_missions)
    }

    /// Colored tag for the REPL prompt
    pub fn colored_tag(&self) -> String {
        match self {
            Self::Chat => format!("[{}]", "CHAT".purple()),
            Self::Dashboard => format!("[{}]", "DASHBOARD".blue()),
            Self::Analysis => format!("[{}]", "ANALYSIS".yellow()),
            Self::Directory => format!("[{}]", "DIRECTORY".green()),
        }
    }

    /// Prompt string with a colored view tag
    pub fn format_colored_prompt(&self) -> String {
        format!("{} >> ", self.colored_tag())
    }
}
