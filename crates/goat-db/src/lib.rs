//! GOAT Todo database layer.
//!
//! SQLite persistence for todo items: connection pool, schema
//! migrations and the query functions used by the service layer.

pub mod migrations;
pub mod pool;
pub mod queries;

pub use pool::{DbError, DbPool, DbResult};

use std::path::Path;
use tracing::info;

/// Open the database at `path` and bring the schema up to date.
pub fn init_pool(path: impl AsRef<Path>) -> DbResult<DbPool> {
    let path = path.as_ref();
    let pool = DbPool::open(path)?;
    migrations::run_migrations(&pool)?;
    info!(path = %path.display(), "Database ready");
    Ok(pool)
}

/// In-memory database with migrations applied.
pub fn init_memory_pool() -> DbResult<DbPool> {
    let pool = DbPool::in_memory()?;
    migrations::run_migrations(&pool)?;
    Ok(pool)
}
