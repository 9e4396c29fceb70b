//! Terminal output formatting.

use colored::Colorize;
use goat_core::{count_done, Todo};

/// Print todos as a checklist with a done summary.
pub fn print_todos(todos: &[Todo]) {
    if todos.is_empty() {
        println!("{}", "No todos yet.".dimmed());
        return;
    }

    for todo in todos {
        let id = format!("#{:<4}", todo.id).dimmed();
        if todo.done {
            println!("{} {} {}", id, "[x]".green(), truncate(&todo.title, 60).dimmed());
        } else {
            println!("{} {} {}", id, "[ ]".yellow(), truncate(&todo.title, 60));
        }
    }

    println!();
    println!("{} of {} done", count_done(todos).to_string().bold(), todos.len());
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
