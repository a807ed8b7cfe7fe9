use std::path::PathBuf;

use clap::Parser;

use taskdash::cli::Cli;
use taskdash::cmd::{self, Commands};
use taskdash::db::Dashboard;

/// Default store file, resolved relative to the working directory.
const DEFAULT_DB: &str = "dashboard_data.json";

fn main() {
    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(|| PathBuf::from(DEFAULT_DB));

    // A missing file is a fresh start; an unreadable or malformed one is
    // reported, then we fall back to an empty dashboard and keep going.
    let mut dashboard = match Dashboard::load(&db_path) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            eprintln!("Error loading dashboard, starting fresh: {e}");
            Dashboard::default()
        }
    };

    match cli.command {
        Commands::NewProject { name, desc } => {
            cmd::cmd_new_project(&mut dashboard, &db_path, name, desc)
        }
        Commands::Add {
            title,
            desc,
            due,
            priority,
            project,
        } => cmd::cmd_add(&mut dashboard, &db_path, title, desc, due, priority, project),
        Commands::Projects => cmd::cmd_projects(&dashboard),
        Commands::Tasks => cmd::cmd_tasks(&dashboard),
        Commands::View { id } => cmd::cmd_view(&dashboard, id),
        Commands::Status { id, status } => cmd::cmd_status(&mut dashboard, &db_path, id, status),
        Commands::Comment { id, text } => cmd::cmd_comment(&mut dashboard, &db_path, id, text),
        Commands::Stats => cmd::cmd_stats(&dashboard),
        Commands::Completions { shell } => cmd::cmd_completions(shell),
    }
}
