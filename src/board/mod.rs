//! Dashboard boards for the current session

pub mod actions;
pub mod considerations;

pub use actions::{ActionBoard, RepromptOutcome};
pub use considerations::ConsiderationBoard;
