//! Application state
//!
//! One owned [`App`] value holds everything the interactive session needs:
//! the active view, the loading flag, the session store, the mission ledger
//! and the dashboard of the current session. Handlers receive it explicitly.

use crate::board::{ActionBoard, ConsiderationBoard};
use crate::config::ChatConfig;
use crate::error::{InteractifError, Result};
use crate::mission::{Mission, MissionLedger};
use crate::service::GuidanceService;
use crate::session::{ChatSession, SessionStore};
use crate::view::View;

/// Boards for the session currently shown on the dashboard
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub session: ChatSession,
    pub actions: ActionBoard,
    pub considerations: ConsiderationBoard,
}

impl Dashboard {
    /// Open fresh boards for `session`
    pub fn new(session: ChatSession) -> Self {
        let actions = ActionBoard::new(session.data.action_points.clone());
        let considerations = ConsiderationBoard::new(session.data.consider_points.clone());
        Self {
            session,
            actions,
            considerations,
        }
    }
}

/// Holds a loading flag up for the duration of one request
///
/// The flag drops back to `false` when the guard goes out of scope, including
/// when the request future is cancelled mid-flight.
pub(crate) struct LoadingGuard<'a>(&'a mut bool);

impl<'a> LoadingGuard<'a> {
    pub(crate) fn new(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Whole-application state for one process
#[derive(Debug, Clone, Default)]
pub struct App {
    config: ChatConfig,
    view: View,
    loading: bool,
    last_error: Option<String>,
    sessions: SessionStore,
    missions: MissionLedger,
    dashboard: Option<Dashboard>,
}

impl App {
    /// Create an app on the chat view with empty stores
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// True while a prompt submission is pending
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed submission, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn missions(&self) -> &MissionLedger {
        &self.missions
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    /// Mutable access to the open dashboard
    ///
    /// # Errors
    ///
    /// Returns `NoActiveSession` when no dashboard is open
    pub fn dashboard_mut(&mut self) -> Result<&mut Dashboard> {
        self.dashboard
            .as_mut()
            .ok_or_else(|| InteractifError::NoActiveSession.into())
    }

    /// Trim and check a prompt without sending it
    ///
    /// # Errors
    ///
    /// Returns `EmptyPrompt` for blank input and `PromptTooLong` when the
    /// trimmed prompt exceeds `chat.max_prompt_chars`
    pub fn validate_prompt(&self, input: &str) -> Result<String> {
        let prompt = input.trim();
        if prompt.is_empty() {
            return Err(InteractifError::EmptyPrompt.into());
        }
        let actual = prompt.chars().count();
        if actual > self.config.max_prompt_chars {
            return Err(InteractifError::PromptTooLong {
                limit: self.config.max_prompt_chars,
                actual,
            }
            .into());
        }
        Ok(prompt.to_string())
    }

    /// Send a prompt to the guidance service and open its dashboard
    ///
    /// Only valid on the chat view. Invalid prompts are rejected before any
    /// request is made. On failure the view does not change, the loading
    /// flag is cleared and the error is kept in [`App::last_error`].
    ///
    /// # Errors
    ///
    /// Returns validation errors, `RequestInFlight`, `InvalidTransition` when
    /// not on the chat view, or the service error
    pub async fn submit_prompt(
        &mut self,
        service: &dyn GuidanceService,
        input: &str,
    ) -> Result<&Dashboard> {
        if self.view != View::Chat {
            return Err(self.invalid_transition(View::Dashboard));
        }
        if self.loading {
            return Err(InteractifError::RequestInFlight.into());
        }
        let prompt = self.validate_prompt(input)?;

        tracing::info!("Submitting prompt ({} chars)", prompt.chars().count());
        let result = {
            let _loading = LoadingGuard::new(&mut self.loading);
            service.structured_chat(&prompt).await
        };

        match result {
            Ok(response) => {
                let session = ChatSession::new(
                    prompt,
                    response.session_id,
                    response.structured_data,
                    self.config.session_name_words,
                );
                self.sessions.push(session.clone());
                self.last_error = None;
                self.view = View::Dashboard;
                let dashboard: &Dashboard = self.dashboard.insert(Dashboard::new(session));
                Ok(dashboard)
            }
            Err(e) => {
                tracing::error!("Error sending prompt: {}", e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Snapshot the current dashboard into a mission and show the analysis
    ///
    /// # Errors
    ///
    /// Returns `NoActiveSession` when no dashboard is open
    pub fn finish_mission(&mut self) -> Result<&Mission> {
        if self.view != View::Dashboard {
            return Err(InteractifError::NoActiveSession.into());
        }
        let dashboard = self
            .dashboard
            .take()
            .ok_or(InteractifError::NoActiveSession)?;

        let mission = Mission::from_session(
            &dashboard.session,
            &dashboard.actions,
            &dashboard.considerations,
        );
        self.missions.record(mission);
        self.view = View::Analysis;

        self.missions
            .latest()
            .ok_or_else(|| InteractifError::NoActiveSession.into())
    }

    /// Switch to another view
    ///
    /// Leaving the dashboard for chat discards its boards; leaving it for
    /// analysis finishes the mission.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` and leaves state untouched when the switch
    /// is not allowed from the current view
    pub fn navigate(&mut self, to: View) -> Result<()> {
        if !self.view.can_navigate(to, !self.missions.is_empty()) {
            return Err(self.invalid_transition(to));
        }

        if self.view == View::Dashboard && to == View::Analysis {
            self.finish_mission()?;
            return Ok(());
        }

        if self.view == View::Dashboard {
            self.dashboard = None;
        }

        tracing::debug!("View {} -> {}", self.view, to);
        self.view = to;
        Ok(())
    }

    /// Go back to the chat view
    pub fn back(&mut self) -> Result<()> {
        self.navigate(View::Chat)
    }

    fn invalid_transition(&self, to: View) -> anyhow::Error {
        InteractifError::InvalidTransition {
            from: self.view.to_string(),
            to: to.to_string(),
        }
        .into()
    }
}
