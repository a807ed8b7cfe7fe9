//! # taskdash - personal task and project dashboard
//!
//! A small, file-backed tracker: create projects, attach tasks to them or
//! keep tasks standalone, change task status, append comments, and view
//! aggregate statistics. Everything is persisted to a single pretty-printed
//! JSON file (`dashboard_data.json` by default) rewritten after every
//! mutation.
//!
//! ## Quick start
//!
//! ```bash
//! # Create a project and a task inside it
//! td new-project "Course work" --desc "POO assignments"
//! td add "Write the report" --project 1 --due 2026-09-15
//!
//! # Standalone task, move it along, leave a note
//! td add "Renew licence"
//! td status 2 in-progress
//! td comment 2 "waiting on paperwork"
//!
//! # Inspect
//! td projects
//! td tasks
//! td stats
//! ```
//!
//! The core model (tasks, projects, the dashboard aggregate) lives in
//! [`task`], [`project`] and [`db`]; the CLI in [`cli`] and [`cmd`] is a thin
//! caller that invokes those operations and prints the results.
//!
//! Single process, single user, single file: no locking, no migrations, and
//! no tolerance for concurrent external writers.

pub mod cli;
pub mod cmd;
pub mod db;
pub mod fields;
pub mod project;
pub mod task;
