//! Seed command.

use anyhow::Result;
use colored::Colorize;
use goat_core::TodoService;
use std::path::Path;
use std::sync::Arc;

pub fn execute(db_path: &Path) -> Result<()> {
    let pool = Arc::new(goat_db::init_pool(db_path)?);
    let inserted = TodoService::new(pool).seed_if_empty()?;

    if inserted == 0 {
        println!("{}", "Database already has todos, nothing seeded.".dimmed());
    } else {
        println!("{} Inserted {} sample todos", "✓".green(), inserted);
    }
    Ok(())
}
