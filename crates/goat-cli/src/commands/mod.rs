//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod list;
pub mod seed;
pub mod serve;

/// GOAT Todo - server-rendered todo list with live updates
#[derive(Parser)]
#[command(name = "goat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = "GOAT_DB", default_value = "todo.db")]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Insert sample todos into an empty database
    Seed,

    /// Print all todos
    List,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args, &self.db).await,
            Commands::Seed => seed::execute(&self.db),
            Commands::List => list::execute(&self.db),
        }
    }
}
