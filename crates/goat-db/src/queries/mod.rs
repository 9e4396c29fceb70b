//! Database query implementations.

pub mod todos;
