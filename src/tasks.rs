//! Task list backed by the record store.

use crate::error::{SuiteError, SuiteResult};
use crate::store::{Loaded, RecordStore};
use crate::types::{Task, TaskStatus};
use tracing::info;

/// To-do list persisted in one record slot.
#[derive(Debug, Clone)]
pub struct TaskList {
    store: RecordStore,
    slot: String,
}

impl TaskList {
    pub fn new(store: RecordStore, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
        }
    }

    /// All tasks in stored order.
    pub fn list(&self) -> Loaded<Task> {
        self.store.load(&self.slot)
    }

    /// Append a pending task. The due date is kept exactly as typed.
    pub fn add(&self, title: &str, due: &str) -> SuiteResult<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(SuiteError::missing_field("title"));
        }

        let task = Task::new(title, due.trim());
        let mut tasks = self.list().records;
        tasks.push(task.clone());
        self.store.save(&self.slot, &tasks)?;
        info!(title = %task.title, count = tasks.len(), "Task added");
        Ok(task)
    }

    /// Flip the status of the task at a 1-based position given as text.
    ///
    /// Returns the position and the new status. Bad input leaves the stored
    /// list untouched.
    pub fn toggle(&self, raw_index: &str) -> SuiteResult<(usize, TaskStatus)> {
        let index = parse_index(raw_index)?;
        let mut tasks = self.list().records;
        let len = tasks.len();

        let task = index
            .checked_sub(1)
            .and_then(|i| tasks.get_mut(i))
            .ok_or(SuiteError::OutOfRange { index, len })?;
        task.stat = task.stat.toggled();
        let status = task.stat;

        self.store.save(&self.slot, &tasks)?;
        info!(index, status = %status, "Task status changed");
        Ok((index, status))
    }
}

/// Parse a 1-based list position typed by the user.
pub fn parse_index(raw: &str) -> SuiteResult<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| SuiteError::invalid_value("task number", "must be a digit"))
}
