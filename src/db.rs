//! Dashboard aggregate root and its JSON persistence.
//!
//! The `Dashboard` owns every project and every standalone task, hands out
//! ids from two monotonically increasing counters, and serializes the whole
//! store to a single pretty-printed JSON file. The in-memory state is the
//! source of truth during a run; the file is a snapshot rewritten in full
//! after each mutation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fields::Status;
use crate::project::{round2, Project};
use crate::task::Task;

/// Errors surfaced by dashboard operations.
///
/// None of these are fatal to the process: the command layer decides whether
/// to abort the current action, warn, or carry on with in-memory state.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid status '{0}': use pending, in-progress or completed")]
    InvalidStatus(String),
    #[error("project {0} not found")]
    ProjectNotFound(u64),
    #[error("task {0} not found")]
    TaskNotFound(u64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The whole store: projects, standalone tasks, and the id counters.
///
/// Task ids share one counter whether the task lives in a project or
/// standalone, so ids are unique across the entire store. Counters only ever
/// move forward; there is no delete operation and ids are never reused.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dashboard {
    pub projects: Vec<Project>,
    pub standalone_tasks: Vec<Task>,
    pub next_project_id: u64,
    pub next_task_id: u64,
}

impl Default for Dashboard {
    fn default() -> Self {
        Dashboard {
            projects: Vec::new(),
            standalone_tasks: Vec::new(),
            next_project_id: 1,
            next_task_id: 1,
        }
    }
}

/// Aggregate counts across the whole store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total_projects: usize,
    pub total_tasks: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub percent_completed: f64,
}

impl Dashboard {
    /// Load the store from a JSON file. A missing file is simply an empty
    /// dashboard; a present but unreadable or malformed file is an error the
    /// caller decides how to handle.
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        if !path.exists() {
            return Ok(Dashboard::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Serialize the whole store to `path`, overwriting any previous file.
    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Create a project with the next project id and append it.
    pub fn create_project(&mut self, name: String, description: String) -> &Project {
        let project = Project::new(self.next_project_id, name, description);
        self.next_project_id += 1;
        self.projects.push(project);
        &self.projects[self.projects.len() - 1]
    }

    /// Create a task with the next task id, attached to the project with id
    /// `project_id` or standalone when `None`.
    ///
    /// An unknown project id fails before the counter moves, so a rejected
    /// call consumes nothing.
    pub fn create_task(
        &mut self,
        title: String,
        description: String,
        due_date: Option<String>,
        priority: Option<String>,
        project_id: Option<u64>,
    ) -> Result<&Task, DashboardError> {
        let slot = match project_id {
            Some(pid) => Some(
                self.projects
                    .iter()
                    .position(|p| p.id == pid)
                    .ok_or(DashboardError::ProjectNotFound(pid))?,
            ),
            None => None,
        };

        let task = Task::new(self.next_task_id, title, description, due_date, priority);
        self.next_task_id += 1;

        match slot {
            Some(i) => {
                let project = &mut self.projects[i];
                project.add_task(task);
                Ok(&project.tasks[project.tasks.len() - 1])
            }
            None => {
                self.standalone_tasks.push(task);
                Ok(&self.standalone_tasks[self.standalone_tasks.len() - 1])
            }
        }
    }

    /// Get a project by id.
    pub fn find_project(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Get a task by id, searching standalone tasks before project tasks.
    pub fn find_task(&self, id: u64) -> Option<&Task> {
        self.all_tasks().find(|t| t.id == id)
    }

    /// Get a mutable reference to a task by id, same search order as
    /// [`find_task`](Self::find_task).
    pub fn find_task_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.standalone_tasks
            .iter_mut()
            .chain(self.projects.iter_mut().flat_map(|p| p.tasks.iter_mut()))
            .find(|t| t.id == id)
    }

    /// Change a task's status, recording the transition in its comment log.
    pub fn change_task_status(
        &mut self,
        id: u64,
        new_status: Status,
    ) -> Result<&Task, DashboardError> {
        let task = self
            .find_task_mut(id)
            .ok_or(DashboardError::TaskNotFound(id))?;
        task.change_status(new_status);
        Ok(&*task)
    }

    /// Append a comment to a task.
    pub fn add_task_comment(&mut self, id: u64, text: &str) -> Result<(), DashboardError> {
        let task = self
            .find_task_mut(id)
            .ok_or(DashboardError::TaskNotFound(id))?;
        task.add_comment(text);
        Ok(())
    }

    /// Every task in the store: standalone first, then project by project in
    /// insertion order.
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.standalone_tasks
            .iter()
            .chain(self.projects.iter().flat_map(|p| p.tasks.iter()))
    }

    /// Aggregate counts over standalone and project-owned tasks combined.
    pub fn statistics(&self) -> Statistics {
        let mut total_tasks = 0;
        let mut pending = 0;
        let mut in_progress = 0;
        let mut completed = 0;
        for task in self.all_tasks() {
            total_tasks += 1;
            match task.status {
                Status::Pending => pending += 1,
                Status::InProgress => in_progress += 1,
                Status::Completed => completed += 1,
            }
        }
        let percent_completed = if total_tasks == 0 {
            0.0
        } else {
            round2(completed as f64 / total_tasks as f64 * 100.0)
        };
        Statistics {
            total_projects: self.projects.len(),
            total_tasks,
            pending,
            in_progress,
            completed,
            percent_completed,
        }
    }
}
