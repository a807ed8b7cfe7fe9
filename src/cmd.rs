//! Command implementations for the CLI interface.
//!
//! This is the caller layer: it parses user input, invokes dashboard
//! operations, prints their results, and persists the store after each
//! mutation. All prompting and formatting lives here; the core modules only
//! expose typed operations.

use std::path::Path;

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::db::Dashboard;
use crate::fields::Status;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project.
    NewProject {
        /// Project name.
        name: String,
        /// Optional longer description.
        #[arg(long)]
        desc: Option<String>,
    },

    /// Add a new task, standalone or attached to a project.
    Add {
        /// Short title for the task.
        title: String,
        /// Optional longer description.
        #[arg(long)]
        desc: Option<String>,
        /// Due date, stored as given (no calendar validation).
        #[arg(long)]
        due: Option<String>,
        /// Free-form priority (defaults to "media").
        #[arg(long)]
        priority: Option<String>,
        /// Project id to attach the task to.
        #[arg(long)]
        project: Option<u64>,
    },

    /// List projects with their progress and tasks.
    Projects,

    /// List standalone tasks.
    Tasks,

    /// View a single task by id, including its comment log.
    View {
        /// Task id.
        id: u64,
    },

    /// Change a task's status: pending | in-progress | completed.
    Status {
        /// Task id.
        id: u64,
        /// New status value.
        status: String,
    },

    /// Append a comment to a task.
    Comment {
        /// Task id.
        id: u64,
        /// Comment text.
        text: String,
    },

    /// Show aggregate statistics for the whole dashboard.
    Stats,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Write the store back after a mutation. A failed save is reported as a
/// warning rather than aborting: the in-memory state stays live for the rest
/// of the run.
fn persist(dashboard: &Dashboard, db_path: &Path) {
    if let Err(e) = dashboard.save(db_path) {
        eprintln!("Warning: failed to save dashboard: {e}");
    }
}

/// Create a new project and persist the store.
pub fn cmd_new_project(
    dashboard: &mut Dashboard,
    db_path: &Path,
    name: String,
    desc: Option<String>,
) {
    let (id, name) = {
        let project = dashboard.create_project(name, desc.unwrap_or_default());
        (project.id, project.name.clone())
    };
    persist(dashboard, db_path);
    println!("Created project {id} '{name}'");
}

/// Add a new task and persist the store.
pub fn cmd_add(
    dashboard: &mut Dashboard,
    db_path: &Path,
    title: String,
    desc: Option<String>,
    due: Option<String>,
    priority: Option<String>,
    project: Option<u64>,
) {
    match dashboard.create_task(title, desc.unwrap_or_default(), due, priority, project) {
        Ok(task) => println!("Added task {}", task.one_line()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
    persist(dashboard, db_path);
}

/// List every project with its completion percentage and owned tasks.
pub fn cmd_projects(dashboard: &Dashboard) {
    if dashboard.projects.is_empty() {
        println!("No projects yet.");
        return;
    }
    for project in &dashboard.projects {
        let progress = project.progress();
        println!(
            "[{}] {} - {}% completed ({}/{})",
            project.id, project.name, progress.percentage, progress.completed, progress.total
        );
        for task in &project.tasks {
            println!("  - {}", task.one_line());
        }
    }
}

/// List standalone tasks.
pub fn cmd_tasks(dashboard: &Dashboard) {
    if dashboard.standalone_tasks.is_empty() {
        println!("No standalone tasks.");
        return;
    }
    for task in &dashboard.standalone_tasks {
        println!("{}", task.one_line());
    }
}

/// View detailed information about one task.
pub fn cmd_view(dashboard: &Dashboard, id: u64) {
    let Some(task) = dashboard.find_task(id) else {
        eprintln!("Task {id} not found.");
        std::process::exit(1);
    };
    println!("ID:        {}", task.id);
    println!("Title:     {}", task.title);
    println!("Status:    {}", task.status);
    println!("Priority:  {}", task.priority);
    println!("Due:       {}", task.due_date.as_deref().unwrap_or("-"));
    println!("Created:   {}", task.created_at);
    let desc = if task.description.is_empty() {
        "-"
    } else {
        &task.description
    };
    println!("Description:\n{desc}");
    if !task.comments.is_empty() {
        println!("Comments:");
        for comment in &task.comments {
            println!("  {comment}");
        }
    }
}

/// Change a task's status and persist the store.
pub fn cmd_status(dashboard: &mut Dashboard, db_path: &Path, id: u64, status: String) {
    let new_status: Status = match status.parse() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    match dashboard.change_task_status(id, new_status) {
        Ok(task) => println!("{}", task.one_line()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
    persist(dashboard, db_path);
}

/// Append a comment to a task and persist the store.
pub fn cmd_comment(dashboard: &mut Dashboard, db_path: &Path, id: u64, text: String) {
    if let Err(e) = dashboard.add_task_comment(id, &text) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    persist(dashboard, db_path);
    println!("Comment added to task {id}");
}

/// Print the aggregate statistics block.
pub fn cmd_stats(dashboard: &Dashboard) {
    let stats = dashboard.statistics();
    println!("{}", "=".repeat(40));
    println!("DASHBOARD STATISTICS");
    println!("{}", "=".repeat(40));
    println!("Total projects:      {}", stats.total_projects);
    println!("Total tasks:         {}", stats.total_tasks);
    println!("Pending:             {}", stats.pending);
    println!("In progress:         {}", stats.in_progress);
    println!("Completed:           {}", stats.completed);
    println!("Percent completed:   {}%", stats.percent_completed);
    println!("{}", "=".repeat(40));
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
