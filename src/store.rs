//! In-memory task store and its derived views.
//!
//! This module provides the `TaskStore` struct holding the session's tasks,
//! along with the display-order projection and aggregate statistics. The
//! store lives only for the current run; nothing is persisted.

use std::cmp::Reverse;

use chrono::Utc;

use crate::task::TodoItem;

/// Aggregate counters derived from the store contents.
///
/// `is_all_completed` is false for an empty store - there is nothing to
/// celebrate until at least one task exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub is_all_completed: bool,
}

/// The authoritative in-memory collection of task records for one session.
///
/// All invalid inputs (blank text, unknown ids) degrade to silent no-ops;
/// no operation here can fail.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<TodoItem>,
    last_id: u64,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Generate the next task id from the wall clock, clamped so that rapid
    /// successive additions within one millisecond tick cannot collide.
    fn next_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }

    /// Add a task with the trimmed text, returning its id.
    ///
    /// Whitespace-only or empty input is ignored and returns `None`, so the
    /// caller knows not to clear its input buffer.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let id = self.next_id();
        self.tasks.push(TodoItem {
            id,
            text: trimmed.to_string(),
            completed: false,
            created_at_utc: Utc::now().timestamp_millis(),
        });
        Some(id)
    }

    /// Flip the completion flag of the task with `id`; no-op if absent.
    pub fn toggle_complete(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Remove the task with `id`; no-op if absent. Removal is permanent and
    /// the id is never reissued.
    pub fn delete(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Get a task by id.
    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks currently in the store.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in display order: incomplete before complete, newest first
    /// within each group.
    ///
    /// This is a pure projection recomputed from the current contents; each
    /// call yields a fresh sequence and mutates nothing.
    pub fn display_order(&self) -> impl Iterator<Item = &TodoItem> {
        let mut ordered: Vec<&TodoItem> = self.tasks.iter().collect();
        ordered.sort_by_key(|t| (t.completed, Reverse((t.created_at_utc, t.id))));
        ordered.into_iter()
    }

    /// Compute aggregate statistics over the current contents.
    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total,
            completed,
            remaining: total - completed,
            is_all_completed: total > 0 && completed == total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_raw(store: &mut TaskStore, text: &str, completed: bool, created_at_utc: i64) -> u64 {
        let id = store.add(text).expect("non-blank add");
        if completed {
            store.toggle_complete(id);
        }
        let task = store.tasks.iter_mut().find(|t| t.id == id).unwrap();
        task.created_at_utc = created_at_utc;
        id
    }

    #[test]
    fn test_add_rejects_blank_input() {
        let mut store = TaskStore::new();
        assert_eq!(store.add(""), None);
        assert_eq!(store.add("   "), None);
        assert_eq!(store.add("\t\n"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_trims_text() {
        let mut store = TaskStore::new();
        let id = store.add("  water the plants  ").unwrap();
        assert_eq!(store.get(id).unwrap().text, "water the plants");
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn test_store_size_counts_successful_adds_only() {
        let mut store = TaskStore::new();
        for text in ["one", "  ", "two", "", "three"] {
            store.add(text);
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_ids_unique_under_rapid_adds() {
        let mut store = TaskStore::new();
        let mut ids: Vec<u64> = (0..100)
            .map(|i| store.add(&format!("task {i}")).unwrap())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut store = TaskStore::new();
        let id = store.add("feed the cat").unwrap();
        store.toggle_complete(id);
        assert!(store.get(id).unwrap().completed);
        store.toggle_complete(id);
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut store = TaskStore::new();
        let id = store.add("tidy desk").unwrap();
        store.toggle_complete(id + 1);
        assert!(!store.get(id).unwrap().completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_removes_one_task() {
        let mut store = TaskStore::new();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        store.delete(a);
        assert_eq!(store.len(), 1);
        assert!(store.get(a).is_none());
        assert!(store.get(b).is_some());
    }

    #[test]
    fn test_operations_after_delete_are_noops() {
        let mut store = TaskStore::new();
        let id = store.add("gone soon").unwrap();
        store.delete(id);
        store.toggle_complete(id);
        store.delete(id);
        assert!(store.is_empty());
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_display_order_incomplete_first_newest_first() {
        let mut store = TaskStore::new();
        let a = add_raw(&mut store, "A", false, 1);
        let b = add_raw(&mut store, "B", true, 2);
        let c = add_raw(&mut store, "C", false, 3);
        let order: Vec<u64> = store.display_order().map(|t| t.id).collect();
        assert_eq!(order, vec![c, a, b]);
    }

    #[test]
    fn test_display_order_is_restartable_and_pure() {
        let mut store = TaskStore::new();
        add_raw(&mut store, "A", false, 1);
        add_raw(&mut store, "B", true, 2);
        let first: Vec<u64> = store.display_order().map(|t| t.id).collect();
        let second: Vec<u64> = store.display_order().map(|t| t.id).collect();
        assert_eq!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_stats_partial_completion() {
        let mut store = TaskStore::new();
        add_raw(&mut store, "a", true, 1);
        add_raw(&mut store, "b", true, 2);
        add_raw(&mut store, "c", false, 3);
        let stats = store.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.remaining, 1);
        assert!(!stats.is_all_completed);
    }

    #[test]
    fn test_stats_empty_store_is_never_all_completed() {
        let store = TaskStore::new();
        let stats = store.stats();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.remaining, 0);
        assert!(!stats.is_all_completed);
    }

    #[test]
    fn test_stats_all_completed() {
        let mut store = TaskStore::new();
        add_raw(&mut store, "a", true, 1);
        add_raw(&mut store, "b", true, 2);
        assert!(store.stats().is_all_completed);
    }

    #[test]
    fn test_end_to_end_lifecycle() {
        let mut store = TaskStore::new();
        let id = store.add("Clean room").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().text, "Clean room");
        assert!(!store.get(id).unwrap().completed);

        store.toggle_complete(id);
        assert!(store.get(id).unwrap().completed);
        assert!(store.stats().is_all_completed);

        store.delete(id);
        assert!(store.is_empty());
    }
}
