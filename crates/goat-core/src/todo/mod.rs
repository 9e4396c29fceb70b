//! Todo management.

pub mod model;

pub use model::Todo;

use crate::error::{GoatError, GoatResult};
use goat_db::queries::todos as queries;
use goat_db::DbPool;
use std::sync::Arc;
use tracing::debug;

/// Validates input and applies todo mutations against the store.
#[derive(Clone)]
pub struct TodoService {
    db: Arc<DbPool>,
}

impl TodoService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Create a new open todo. The title is stored trimmed and must not be empty.
    pub fn create(&self, title: &str) -> GoatResult<Todo> {
        let title = title.trim();
        if title.is_empty() {
            return Err(GoatError::validation("title is required"));
        }

        let row = queries::create(&self.db, title)?;
        debug!(id = row.id, "Todo created");
        Ok(Todo::from_row(row))
    }

    /// All todos, newest first.
    pub fn list_all(&self) -> GoatResult<Vec<Todo>> {
        let rows = queries::list_all(&self.db)?;
        Ok(rows.into_iter().map(Todo::from_row).collect())
    }

    #[cfg(test)]
    fn get(&self, id: i64) -> GoatResult<Todo> {
        check_id(id)?;
        queries::get(&self.db, id)?
            .map(Todo::from_row)
            .ok_or(GoatError::TodoNotFound(id))
    }

    /// Flip the done flag of a todo.
    pub fn toggle(&self, id: i64) -> GoatResult<Todo> {
        check_id(id)?;
        let row = queries::toggle(&self.db, id)?.ok_or(GoatError::TodoNotFound(id))?;
        debug!(id, done = row.done, "Todo toggled");
        Ok(Todo::from_row(row))
    }

    /// Delete a todo.
    pub fn delete(&self, id: i64) -> GoatResult<()> {
        check_id(id)?;
        if !queries::delete(&self.db, id)? {
            return Err(GoatError::TodoNotFound(id));
        }
        debug!(id, "Todo deleted");
        Ok(())
    }

    /// Insert the sample todos if the store is empty.
    pub fn seed_if_empty(&self) -> GoatResult<usize> {
        Ok(queries::seed_if_empty(&self.db)?)
    }
}

/// Number of completed todos.
pub fn count_done(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| t.done).count()
}

/// Parse a todo id from a path segment. Only positive integers are accepted.
pub fn parse_id(raw: &str) -> GoatResult<i64> {
    let id: i64 = raw.parse().map_err(|_| GoatError::InvalidId)?;
    check_id(id)?;
    Ok(id)
}

fn check_id(id: i64) -> GoatResult<()> {
    if id <= 0 {
        return Err(GoatError::InvalidId);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TodoService {
        TodoService::new(Arc::new(goat_db::init_memory_pool().unwrap()))
    }

    #[test]
    fn test_create_trims_title() {
        let svc = service();
        let todo = svc.create("  Buy milk  ").unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.done);
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let svc = service();
        for title in ["", "   "] {
            let err = svc.create(title).unwrap_err();
            assert!(matches!(err, GoatError::ValidationError(_)));
            assert_eq!(err.to_string(), "title is required");
        }
        assert!(svc.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_and_count_done() {
        let svc = service();
        let a = svc.create("a").unwrap();
        svc.create("b").unwrap();

        assert!(svc.toggle(a.id).unwrap().done);
        let todos = svc.list_all().unwrap();
        assert_eq!(count_done(&todos), 1);
        assert!(svc.get(a.id).unwrap().done);
    }

    #[test]
    fn test_missing_todo() {
        let svc = service();
        assert!(matches!(svc.toggle(42), Err(GoatError::TodoNotFound(42))));
        assert!(matches!(svc.delete(42), Err(GoatError::TodoNotFound(42))));
    }

    #[test]
    fn test_delete() {
        let svc = service();
        let todo = svc.create("temp").unwrap();
        svc.delete(todo.id).unwrap();
        assert!(matches!(svc.get(todo.id), Err(GoatError::TodoNotFound(_))));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("7").unwrap(), 7);
        for raw in ["0", "-3", "abc", "", "1.5"] {
            assert!(matches!(parse_id(raw), Err(GoatError::InvalidId)), "{raw}");
        }
    }

    #[test]
    fn test_non_positive_ids_rejected_before_store() {
        let svc = service();
        assert!(matches!(svc.toggle(0), Err(GoatError::InvalidId)));
        assert!(matches!(svc.delete(-1), Err(GoatError::InvalidId)));
    }
}
