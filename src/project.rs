//! Project aggregate: a named container of tasks with derived progress.
//!
//! A project exclusively owns its tasks; insertion order is display order.

use serde::{Deserialize, Serialize};

use crate::fields::Status;
use crate::task::{now_stamp, Task};

/// A named container for zero or more tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Completion summary for one project.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    pub percentage: f64,
}

impl Project {
    pub fn new(id: u64, name: String, description: String) -> Self {
        Project {
            id,
            name,
            description,
            created_at: now_stamp(),
            tasks: Vec::new(),
        }
    }

    /// Append a task to the end of the owned sequence. Duplicate ids are the
    /// dashboard's responsibility, not checked here.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Completion counts for this project. An empty task list reports zero
    /// percent rather than dividing by zero.
    pub fn progress(&self) -> Progress {
        let total = self.tasks.len();
        let completed = self
            .tasks
            .iter()
            .filter(|t| t.status == Status::Completed)
            .count();
        let percentage = if total == 0 {
            0.0
        } else {
            round2(completed as f64 / total as f64 * 100.0)
        };
        Progress {
            total,
            completed,
            percentage,
        }
    }
}

/// Round to two decimal places, for stable percentage display.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
