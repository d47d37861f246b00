//! Mission ledger
//!
//! A mission is a session the user finished working through, together with a
//! snapshot of how far they got. Missions are only ever added.

use crate::board::actions::percent;
use crate::board::{ActionBoard, ConsiderationBoard};
use crate::guidance::StructuredResponse;
use crate::session::ChatSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A finalized session with progress counters
///
/// # Examples
///
/// ```
/// use interactif::board::{ActionBoard, ConsiderationBoard};
/// use interactif::guidance::{ActionPoint, Priority, StructuredResponse};
/// use interactif::mission::Mission;
/// use interactif::session::ChatSession;
///
/// let data = StructuredResponse {
///     action_points: vec![ActionPoint::new("A", Priority::High)],
///     consider_points: vec![],
/// };
/// let session = ChatSession::new("prompt", None, data.clone(), 5);
/// let mut actions = ActionBoard::new(data.action_points.clone());
/// actions.toggle_complete(0).unwrap();
///
/// let mission = Mission::from_session(&session, &actions, &ConsiderationBoard::default());
/// assert_eq!(mission.completed_actions, 1);
/// assert_eq!(mission.total_actions, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub name: String,
    pub data: StructuredResponse,
    pub timestamp: DateTime<Utc>,
    /// Actions marked complete at finish time
    pub completed_actions: usize,
    /// Actions on the board at finish time
    pub total_actions: usize,
    /// Considerations with a reflection at finish time
    pub reflections: usize,
    /// Considerations on the board at finish time
    pub total_considerations: usize,
}

impl Mission {
    /// Snapshot the boards of `session` into a mission
    ///
    /// The data snapshot includes any in-place edits made on the action board.
    pub fn from_session(
        session: &ChatSession,
        actions: &ActionBoard,
        considerations: &ConsiderationBoard,
    ) -> Self {
        Self {
            id: session.id.clone(),
            name: session.name.clone(),
            data: StructuredResponse {
                action_points: actions.actions().to_vec(),
                consider_points: considerations.points().to_vec(),
            },
            timestamp: session.timestamp,
            completed_actions: actions.completed_count(),
            total_actions: actions.len(),
            reflections: considerations.reflected_count(),
            total_considerations: considerations.len(),
        }
    }

    /// Action completion as a rounded percentage
    pub fn completion_percent(&self) -> u32 {
        percent(self.completed_actions, self.total_actions)
    }
}

/// Finished missions, newest first
#[derive(Debug, Clone, Default)]
pub struct MissionLedger {
    missions: Vec<Mission>,
}

impl MissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mission at the front of the ledger
    pub fn record(&mut self, mission: Mission) {
        tracing::info!(
            "Mission recorded: {} ({}/{} actions, {}/{} reflections)",
            mission.name,
            mission.completed_actions,
            mission.total_actions,
            mission.reflections,
            mission.total_considerations
        );
        self.missions.insert(0, mission);
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn latest(&self) -> Option<&Mission> {
        self.missions.first()
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Aggregate counters for the analysis screen
    pub fn summary(&self) -> MissionSummary {
        let mut summary = MissionSummary {
            total_missions: self.missions.len(),
            ..Default::default()
        };
        for mission in &self.missions {
            summary.total_actions += mission.total_actions;
            summary.completed_actions += mission.completed_actions;
            summary.total_reflections += mission.reflections;
            summary.total_considerations += mission.total_considerations;
        }
        summary
    }
}

/// Totals across every mission in the ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MissionSummary {
    pub total_missions: usize,
    pub total_actions: usize,
    pub completed_actions: usize,
    pub total_reflections: usize,
    pub total_considerations: usize,
}

impl MissionSummary {
    /// Overall action completion rate, rounded; 0 with no actions
    pub fn completion_rate(&self) -> u32 {
        percent(self.completed_actions, self.total_actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::{ActionPoint, ConsiderPoint, Priority};

    fn mission(completed: usize, total: usize, reflections: usize, considerations: usize) -> Mission {
        Mission {
            id: format!("m-{}-{}", completed, total),
            name: "mission".to_string(),
            data: StructuredResponse::default(),
            timestamp: Utc::now(),
            completed_actions: completed,
            total_actions: total,
            reflections,
            total_considerations: considerations,
        }
    }

    #[test]
    fn test_from_session_snapshots_counts() {
        let data = StructuredResponse {
            action_points: vec![
                ActionPoint::new("a", Priority::High),
                ActionPoint::new("b", Priority::Low),
            ],
            consider_points: vec![ConsiderPoint::new("c")],
        };
        let session = ChatSession::new("do things", None, data.clone(), 5);
        let mut actions = ActionBoard::new(data.action_points.clone());
        let mut considerations = ConsiderationBoard::new(data.consider_points.clone());
        actions.toggle_complete(1).unwrap();
        actions
            .edit(0, ActionPoint::new("a, edited", Priority::Medium))
            .unwrap();
        considerations.reflect(0, "noted").unwrap();

        let m = Mission::from_session(&session, &actions, &considerations);
        assert_eq!(m.id, session.id);
        assert_eq!(m.name, session.name);
        assert_eq!(m.timestamp, session.timestamp);
        assert_eq!((m.completed_actions, m.total_actions), (1, 2));
        assert_eq!((m.reflections, m.total_considerations), (1, 1));
        assert_eq!(m.data.action_points[0].task, "a, edited");
        assert_eq!(m.completion_percent(), 50);
    }

    #[test]
    fn test_ledger_prepends() {
        let mut ledger = MissionLedger::new();
        ledger.record(mission(0, 1, 0, 0));
        ledger.record(mission(1, 2, 0, 0));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.latest().unwrap().total_actions, 2);
        assert_eq!(ledger.missions()[1].total_actions, 1);
    }

    #[test]
    fn test_summary_totals_and_rate() {
        let mut ledger = MissionLedger::new();
        ledger.record(mission(1, 2, 1, 3));
        ledger.record(mission(2, 2, 0, 1));
        let summary = ledger.summary();
        assert_eq!(summary.total_missions, 2);
        assert_eq!(summary.total_actions, 4);
        assert_eq!(summary.completed_actions, 3);
        assert_eq!(summary.total_reflections, 1);
        assert_eq!(summary.total_considerations, 4);
        assert_eq!(summary.completion_rate(), 75);
    }

    #[test]
    fn test_empty_summary_rate_is_zero() {
        assert_eq!(MissionLedger::new().summary().completion_rate(), 0);
        let mut ledger = MissionLedger::new();
        ledger.record(mission(0, 0, 0, 0));
        assert_eq!(ledger.summary().completion_rate(), 0);
    }
}
