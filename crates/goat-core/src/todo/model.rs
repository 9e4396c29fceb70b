//! Todo domain model.

use goat_db::queries::todos::TodoRow;
use serde::{Deserialize, Serialize};

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

impl Todo {
    pub fn from_row(row: TodoRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            done: row.done,
        }
    }
}
