//! GOAT Todo Core Library
//!
//! Domain model and business logic for the todo list.

pub mod error;
pub mod todo;

pub use error::{GoatError, GoatResult};
pub use todo::{count_done, parse_id, Todo, TodoService};
