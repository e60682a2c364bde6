//! Task list with category filtering and snapshot semantics.
//!
//! Every mutation produces a brand-new sequence value (`Arc<[TaskItem]>`);
//! the previous snapshot is never touched, so consumers can detect change
//! with `Arc::ptr_eq`. The store is the only writer of the sequence -- the
//! coordinator forwards each new snapshot to the external profile store.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    Personal,
    Work,
    Home,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 3] =
        [TaskCategory::Personal, TaskCategory::Work, TaskCategory::Home];

    /// Parse a category from its display label, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "personal" => Some(TaskCategory::Personal),
            "work" => Some(TaskCategory::Work),
            "home" => Some(TaskCategory::Home),
            _ => None,
        }
    }
}

impl Default for TaskCategory {
    fn default() -> Self {
        TaskCategory::Personal
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskCategory::Personal => "Personal",
            TaskCategory::Work => "Work",
            TaskCategory::Home => "Home",
        };
        f.write_str(label)
    }
}

/// Active list filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskFilter {
    All,
    Category(TaskCategory),
}

impl Default for TaskFilter {
    fn default() -> Self {
        TaskFilter::All
    }
}

/// Changing the active filter, if not `All`, sets the default category
/// for new tasks to that filter. `All` leaves the default alone.
pub fn default_category_for(filter: TaskFilter) -> Option<TaskCategory> {
    match filter {
        TaskFilter::All => None,
        TaskFilter::Category(category) => Some(category),
    }
}

/// A single user task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Unique within the session; `task-<seq>-<uuid>`.
    pub id: String,
    /// Non-empty by construction -- `add` refuses blank text.
    pub text: String,
    pub category: TaskCategory,
    pub completed: bool,
}

/// Ordered task collection. Newest-first ordering is an invariant, not
/// incidental: `add` prepends.
#[derive(Debug, Clone)]
pub struct TaskStore {
    items: Arc<[TaskItem]>,
    /// Monotonic per-session counter folded into every generated id, so
    /// rapid successive adds cannot collide even within one clock unit.
    next_seq: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

impl TaskStore {
    /// Seed the store from the persisted task sequence.
    pub fn from_items(items: Vec<TaskItem>) -> Self {
        Self {
            items: items.into(),
            next_seq: 0,
        }
    }

    /// Replace the sequence without touching the id counter. Used to fall
    /// back to the profile's sequence when a forward fails.
    pub fn reset_items(&mut self, items: Vec<TaskItem>) {
        self.items = items.into();
    }

    /// The current sequence value. Cheap to clone; compare snapshots with
    /// `Arc::ptr_eq` to detect change.
    pub fn snapshot(&self) -> Arc<[TaskItem]> {
        Arc::clone(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn next_id(&mut self) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;
        format!("task-{seq}-{}", Uuid::new_v4())
    }

    /// Prepend a new task. Empty or whitespace-only text is silently
    /// refused (no state change). Returns the new sequence on success.
    pub fn add(&mut self, text: &str, category: TaskCategory) -> Option<Arc<[TaskItem]>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = TaskItem {
            id: self.next_id(),
            text: text.to_string(),
            category,
            completed: false,
        };

        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(task);
        next.extend(self.items.iter().cloned());
        self.items = next.into();
        Some(self.snapshot())
    }

    /// Flip `completed` for the matching task. No-op if the id is absent.
    pub fn toggle(&mut self, id: &str) -> Option<Arc<[TaskItem]>> {
        if !self.items.iter().any(|t| t.id == id) {
            return None;
        }

        let next: Vec<TaskItem> = self
            .items
            .iter()
            .map(|t| {
                if t.id == id {
                    TaskItem {
                        completed: !t.completed,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect();
        self.items = next.into();
        Some(self.snapshot())
    }

    /// Delete the matching task. No-op if the id is absent.
    pub fn remove(&mut self, id: &str) -> Option<Arc<[TaskItem]>> {
        if !self.items.iter().any(|t| t.id == id) {
            return None;
        }

        let next: Vec<TaskItem> = self
            .items
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        self.items = next.into();
        Some(self.snapshot())
    }

    /// Pure projection: `All` returns the full sequence, otherwise only
    /// matching items, preserving relative order. Never mutates.
    pub fn filter(&self, filter: TaskFilter) -> Vec<TaskItem> {
        match filter {
            TaskFilter::All => self.items.to_vec(),
            TaskFilter::Category(category) => self
                .items
                .iter()
                .filter(|t| t.category == category)
                .cloned()
                .collect(),
        }
    }
}
