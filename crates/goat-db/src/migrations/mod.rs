//! Schema for the `todos` table.
//!
//! Ids come from `AUTOINCREMENT`, so a deleted id is never handed out
//! again, and `done` defaults to false for new rows.

use crate::pool::{DbError, DbPool, DbResult};
use rusqlite_migration::{Migrations, M};

const SCHEMA: &str = include_str!("schema.sql");

/// Bring the schema up to date. Safe to call on every start.
pub fn run_migrations(pool: &DbPool) -> DbResult<()> {
    let migrations = Migrations::new(vec![M::up(SCHEMA)]);

    pool.with_conn_mut(|conn| {
        migrations
            .to_latest(conn)
            .map_err(|e| DbError::Migration(e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn migrated() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    #[test]
    fn test_todos_columns() {
        let pool = migrated();

        let columns = pool
            .with_conn(|conn| {
                let mut stmt = conn.prepare("SELECT name, \"notnull\" FROM pragma_table_info('todos')")?;
                let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, bool>(1)?)))?;
                rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
            })
            .unwrap();

        assert_eq!(
            columns,
            vec![
                ("id".to_string(), false),
                ("title".to_string(), true),
                ("done".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_done_defaults_to_false() {
        let pool = migrated();

        let done: bool = pool
            .with_conn(|conn| {
                conn.execute("INSERT INTO todos (title) VALUES ('x')", [])?;
                conn.query_row("SELECT done FROM todos", [], |row| row.get(0))
                    .map_err(DbError::from)
            })
            .unwrap();
        assert!(!done);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let pool = migrated();

        let (first, second): (i64, i64) = pool
            .with_conn(|conn| {
                conn.execute("INSERT INTO todos (title) VALUES ('a')", [])?;
                let first = conn.last_insert_rowid();
                conn.execute("DELETE FROM todos WHERE id = ?1", [first])?;
                conn.execute("INSERT INTO todos (title) VALUES ('b')", [])?;
                Ok((first, conn.last_insert_rowid()))
            })
            .unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_rerun_keeps_rows() {
        let pool = migrated();
        pool.with_conn(|conn| {
            conn.execute("INSERT INTO todos (title) VALUES ('kept')", [])?;
            Ok(())
        })
        .unwrap();

        run_migrations(&pool).unwrap();

        let count: i64 = pool
            .with_conn(|conn| {
                conn.query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))
                    .map_err(DbError::from)
            })
            .unwrap();
        assert_eq!(count, 1);
    }
}
