use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed task and project dashboard.
/// Storage defaults to ./dashboard_data.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "td", version, about = "Personal task and project dashboard CLI")]
pub struct Cli {
    /// Path to the JSON store.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
