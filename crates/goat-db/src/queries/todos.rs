//! Todo queries.

use crate::pool::{DbError, DbPool, DbResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Todo row from database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

impl TodoRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            done: row.get(2)?,
        })
    }
}

/// Sample todos inserted into an empty database: (title, done).
pub const SEED_TODOS: &[(&str, bool)] = &[
    ("Welcome to GOAT Todo!", true),
    ("Add a new todo with the form above", false),
    ("Click the checkbox to mark an item as done", false),
    ("Click the delete button to remove a todo", false),
    ("Deployed successfully!", true),
];

/// Insert a new todo. New todos start open.
pub fn create(pool: &DbPool, title: &str) -> DbResult<TodoRow> {
    pool.with_conn(|conn| {
        conn.execute("INSERT INTO todos (title) VALUES (?1)", params![title])?;
        Ok(TodoRow {
            id: conn.last_insert_rowid(),
            title: title.to_string(),
            done: false,
        })
    })
}

/// List all todos, newest first.
pub fn list_all(pool: &DbPool) -> DbResult<Vec<TodoRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare("SELECT id, title, done FROM todos ORDER BY id DESC")?;
        let rows = stmt.query_map([], TodoRow::from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// Get a todo by ID.
pub fn get(pool: &DbPool, id: i64) -> DbResult<Option<TodoRow>> {
    pool.with_conn(|conn| get_in(conn, id))
}

fn get_in(conn: &Connection, id: i64) -> DbResult<Option<TodoRow>> {
    conn.query_row(
        "SELECT id, title, done FROM todos WHERE id = ?1",
        params![id],
        TodoRow::from_row,
    )
    .optional()
    .map_err(DbError::from)
}

/// Flip the done flag. Returns the updated row, or `None` if the id is unknown.
pub fn toggle(pool: &DbPool, id: i64) -> DbResult<Option<TodoRow>> {
    pool.with_conn(|conn| {
        let changed = conn.execute(
            "UPDATE todos SET done = NOT done WHERE id = ?1",
            params![id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        get_in(conn, id)
    })
}

/// Delete a todo. Returns whether a row was removed.
pub fn delete(pool: &DbPool, id: i64) -> DbResult<bool> {
    pool.with_conn(|conn| {
        let changed = conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    })
}

#[cfg(test)]
fn count(pool: &DbPool) -> DbResult<i64> {
    pool.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))
            .map_err(DbError::from)
    })
}

/// Populate an empty table with [`SEED_TODOS`]. Returns the number of rows inserted.
pub fn seed_if_empty(pool: &DbPool) -> DbResult<usize> {
    pool.with_conn(|conn| {
        let existing: i64 = conn.query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))?;
        if existing > 0 {
            return Ok(0);
        }

        let mut stmt = conn.prepare("INSERT INTO todos (title, done) VALUES (?1, ?2)")?;
        for (title, done) in SEED_TODOS {
            stmt.execute(params![title, done])?;
        }
        Ok(SEED_TODOS.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    #[test]
    fn test_create_and_list_newest_first() {
        let pool = pool();
        let first = create(&pool, "first").unwrap();
        let second = create(&pool, "second").unwrap();
        assert!(!first.done);
        assert!(second.id > first.id);

        let all = list_all(&pool).unwrap();
        assert_eq!(all, vec![second, first]);
    }

    #[test]
    fn test_toggle_flips_done() {
        let pool = pool();
        let todo = create(&pool, "flip me").unwrap();

        let toggled = toggle(&pool, todo.id).unwrap().unwrap();
        assert!(toggled.done);
        let toggled = toggle(&pool, todo.id).unwrap().unwrap();
        assert!(!toggled.done);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let pool = pool();
        assert_eq!(toggle(&pool, 999).unwrap(), None);
    }

    #[test]
    fn test_delete() {
        let pool = pool();
        let todo = create(&pool, "gone").unwrap();
        assert!(delete(&pool, todo.id).unwrap());
        assert!(!delete(&pool, todo.id).unwrap());
        assert_eq!(get(&pool, todo.id).unwrap(), None);
    }

    #[test]
    fn test_seed_if_empty_only_once() {
        let pool = pool();
        assert_eq!(seed_if_empty(&pool).unwrap(), SEED_TODOS.len());
        assert_eq!(seed_if_empty(&pool).unwrap(), 0);
        assert_eq!(count(&pool).unwrap(), SEED_TODOS.len() as i64);

        let done = list_all(&pool).unwrap().iter().filter(|t| t.done).count();
        assert_eq!(done, 2);
    }

    #[test]
    fn test_seed_skips_non_empty_table() {
        let pool = pool();
        create(&pool, "mine").unwrap();
        assert_eq!(seed_if_empty(&pool).unwrap(), 0);
        assert_eq!(count(&pool).unwrap(), 1);
    }
}
