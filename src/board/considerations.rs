//! Consideration board
//!
//! Consider points are read-only; the user can attach one free-text
//! reflection to each of them.

use crate::board::actions::percent;
use crate::error::{InteractifError, Result};
use crate::guidance::ConsiderPoint;

/// Considerations of the current session plus the user's reflections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsiderationBoard {
    points: Vec<ConsiderPoint>,
    reflections: Vec<Option<String>>,
}

impl ConsiderationBoard {
    /// Create a board with no reflections
    pub fn new(points: Vec<ConsiderPoint>) -> Self {
        let reflections = vec![None; points.len()];
        Self {
            points,
            reflections,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ConsiderPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&ConsiderPoint> {
        self.points.get(index)
    }

    /// Attach or overwrite the reflection at `index`
    ///
    /// A blank reflection clears any existing one. Returns true when the item
    /// ends up reflected.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is past the end of the board
    pub fn reflect(&mut self, index: usize, text: impl Into<String>) -> Result<bool> {
        if index >= self.points.len() {
            return Err(InteractifError::IndexOutOfRange {
                index,
                len: self.points.len(),
            }
            .into());
        }

        let text = text.into();
        let trimmed = text.trim();
        self.reflections[index] = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        tracing::debug!(
            "Consideration {} reflected={}",
            index,
            self.reflections[index].is_some()
        );
        Ok(self.reflections[index].is_some())
    }

    /// Reflection attached to `index`, if any
    pub fn reflection(&self, index: usize) -> Option<&str> {
        self.reflections.get(index).and_then(|r| r.as_deref())
    }

    /// Number of considerations with a reflection
    pub fn reflected_count(&self) -> usize {
        self.reflections.iter().filter(|r| r.is_some()).count()
    }

    /// Reflected share as a rounded percentage; 0 for an empty board
    pub fn reflection_percent(&self) -> u32 {
        percent(self.reflected_count(), self.len())
    }
}
