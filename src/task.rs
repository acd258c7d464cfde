//! Task data structure.
//!
//! This module defines the `TodoItem` struct that represents a single entry
//! in the session's task list.

use chrono::{Local, TimeZone};

/// A single to-do entry.
///
/// The `id` is assigned once at creation and is the sole lookup key for
/// toggling and deleting. `text` never changes after creation - there is no
/// edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at_utc: i64,
}

impl TodoItem {
    /// Local time-of-day the item was added, for the list view.
    pub fn added_at_label(&self) -> String {
        match Local.timestamp_millis_opt(self.created_at_utc).single() {
            Some(dt) => dt.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }
}
