//! Task data structure and related functionality.
//!
//! A task is a unit of work with a lifecycle status, a free-form priority,
//! and an append-only comment log. Ids are assigned by the dashboard, never
//! by the task itself.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// Priority used when the caller does not supply one. Priority is a free-form
/// string and is deliberately never validated.
pub const DEFAULT_PRIORITY: &str = "media";

/// Current local wall-clock time in the format the store has always used.
pub fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// A single unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub due_date: Option<String>,
    pub status: Status,
    pub priority: String,
    #[serde(default)]
    pub comments: Vec<String>,
}

impl Task {
    /// Construct a fresh pending task. The id comes from the dashboard's
    /// counter; `created_at` is stamped at construction and preserved
    /// verbatim across reloads.
    pub fn new(
        id: u64,
        title: String,
        description: String,
        due_date: Option<String>,
        priority: Option<String>,
    ) -> Self {
        Task {
            id,
            title,
            description,
            created_at: now_stamp(),
            due_date,
            status: Status::Pending,
            priority: priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            comments: Vec::new(),
        }
    }

    /// Append a timestamped comment. Never fails.
    pub fn add_comment(&mut self, text: &str) {
        self.comments.push(format!("[{}] {}", now_stamp(), text));
    }

    /// Set the status and record the transition in the comment log.
    pub fn change_status(&mut self, new_status: Status) {
        self.status = new_status;
        self.add_comment(&format!("Status changed to: {new_status}"));
    }

    /// One-line rendering used by list output: `[id] title - STATUS`.
    pub fn one_line(&self) -> String {
        format!(
            "[{}] {} - {}",
            self.id,
            self.title,
            self.status.as_str().to_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_pending_with_default_priority() {
        let task = Task::new(1, "Write report".into(), "".into(), None, None);
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.priority, DEFAULT_PRIORITY);
        assert!(task.comments.is_empty());
    }

    #[test]
    fn add_comment_appends_timestamped_entry() {
        let mut task = Task::new(1, "t".into(), "".into(), None, None);
        task.add_comment("first note");
        task.add_comment("second note");
        assert_eq!(task.comments.len(), 2);
        assert!(task.comments[0].starts_with('['));
        assert!(task.comments[0].ends_with("first note"));
        assert!(task.comments[1].ends_with("second note"));
    }

    #[test]
    fn change_status_appends_exactly_one_comment() {
        let mut task = Task::new(1, "t".into(), "".into(), None, None);
        task.change_status(Status::InProgress);
        assert_eq!(task.status, Status::InProgress);
        assert_eq!(task.comments.len(), 1);
        assert!(task.comments[0].ends_with("Status changed to: in-progress"));
    }

    #[test]
    fn invalid_status_string_leaves_task_untouched() {
        let mut task = Task::new(1, "t".into(), "".into(), None, None);
        let before = task.clone();
        if let Ok(status) = "archived".parse() {
            task.change_status(status);
        }
        assert_eq!(task, before);
    }

    #[test]
    fn one_line_uppercases_status() {
        let mut task = Task::new(7, "Fix login".into(), "".into(), None, None);
        assert_eq!(task.one_line(), "[7] Fix login - PENDING");
        task.change_status(Status::Completed);
        assert_eq!(task.one_line(), "[7] Fix login - COMPLETED");
    }
}
