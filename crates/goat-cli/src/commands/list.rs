//! List command.

use anyhow::Result;
use goat_core::TodoService;
use std::path::Path;
use std::sync::Arc;

use crate::output;

pub fn execute(db_path: &Path) -> Result<()> {
    let pool = Arc::new(goat_db::init_pool(db_path)?);
    let todos = TodoService::new(pool).list_all()?;
    output::print_todos(&todos);
    Ok(())
}
