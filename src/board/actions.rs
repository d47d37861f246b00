//! Action-item board
//!
//! Holds the action points of the current session together with a parallel
//! list of completion flags. Storage order never changes; completed items only
//! sink in the derived display order.

use crate::error::{InteractifError, Result};
use crate::guidance::ActionPoint;

/// Result of asking the service to regenerate a single action point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepromptOutcome {
    /// The service has no endpoint for single-point regeneration yet
    Unavailable,
}

/// Mutable board of action points for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionBoard {
    actions: Vec<ActionPoint>,
    completed: Vec<bool>,
}

impl ActionBoard {
    /// Create a board with every action incomplete
    pub fn new(actions: Vec<ActionPoint>) -> Self {
        let completed = vec![false; actions.len()];
        Self { actions, completed }
    }

    /// Number of actions on the board
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when the board has no actions
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Actions in storage order
    pub fn actions(&self) -> &[ActionPoint] {
        &self.actions
    }

    /// Action at `index`
    pub fn get(&self, index: usize) -> Option<&ActionPoint> {
        self.actions.get(index)
    }

    /// Whether the action at `index` is completed
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }

    /// Flip the completion flag at `index` and return the new value
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is past the end of the board
    ///
    /// # Examples
    ///
    /// ```
    /// use interactif::board::ActionBoard;
    /// use interactif::guidance::{ActionPoint, Priority};
    ///
    /// let mut board = ActionBoard::new(vec![ActionPoint::new("A", Priority::High)]);
    /// assert!(board.toggle_complete(0).unwrap());
    /// assert!(!board.toggle_complete(0).unwrap());
    /// ```
    pub fn toggle_complete(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        let flag = &mut self.completed[index];
        *flag = !*flag;
        tracing::debug!("Action {} completed={}", index, *flag);
        Ok(*flag)
    }

    /// Replace the action at `index`
    pub fn edit(&mut self, index: usize, action: ActionPoint) -> Result<()> {
        self.check_index(index)?;
        tracing::debug!("Editing action {}: {:?}", index, action.task);
        self.actions[index] = action;
        Ok(())
    }

    /// Request regeneration of the action at `index`
    ///
    /// The guidance service has no single-point endpoint, so this only logs
    /// the request. The board is never modified.
    pub fn reprompt(&self, index: usize) -> Result<RepromptOutcome> {
        self.check_index(index)?;
        tracing::info!(
            "Reprompt requested for action {}: {}",
            index,
            self.actions[index].task
        );
        Ok(RepromptOutcome::Unavailable)
    }

    /// Indices in display order: incomplete first, then completed, each group
    /// in original order
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.actions.len()).collect();
        // sort_by_key is stable
        order.sort_by_key(|&i| self.completed[i]);
        order
    }

    /// Number of completed actions
    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|done| **done).count()
    }

    /// Completion as a rounded percentage; 0 for an empty board
    pub fn completion_percent(&self) -> u32 {
        percent(self.completed_count(), self.len())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.actions.len() {
            return Err(InteractifError::IndexOutOfRange {
                index,
                len: self.actions.len(),
            }
            .into());
        }
        Ok(())
    }
}

/// Rounded `part / total` percentage, 0 when `total` is 0
pub(crate) fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
