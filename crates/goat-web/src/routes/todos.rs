//! HTMX-driven todo handlers.
//!
//! Mutations return the re-rendered todo container fragment and notify
//! live streams so other browsers refetch it.

use askama::Template;
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::Html,
    Form,
};
use goat_core::{count_done, parse_id, GoatError, Todo};
use serde::Deserialize;
use tracing::{debug, error};

use crate::state::AppState;

type HtmlResult = Result<Html<String>, (StatusCode, String)>;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    todos: Vec<Todo>,
    done: usize,
}

#[derive(Template)]
#[template(path = "partials/todo_container.html")]
struct TodoContainerTemplate {
    todos: Vec<Todo>,
    done: usize,
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct CreateTodoForm {
    #[serde(default)]
    pub title: String,
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Render the full page.
pub async fn index(State(state): State<AppState>) -> HtmlResult {
    let todos = state.todos.list_all().map_err(error_response)?;
    let done = count_done(&todos);
    render(IndexTemplate { todos, done })
}

/// GET /todos - Render the todo container fragment.
pub async fn list(State(state): State<AppState>) -> HtmlResult {
    render_container(&state)
}

/// POST /todos - Create a todo from the `title` form field.
///
/// A body that is missing or not form-encoded carries no title, so it gets
/// the same 400 as an empty one.
pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<CreateTodoForm>, FormRejection>,
) -> HtmlResult {
    let title = match form {
        Ok(Form(form)) => form.title,
        Err(rejection) => {
            debug!(%rejection, "Unreadable create form, treating title as empty");
            String::new()
        }
    };
    state.todos.create(&title).map_err(error_response)?;
    state.notify_changed();
    render_container(&state)
}

/// POST /todos/{id}/toggle - Flip a todo's done flag.
pub async fn toggle(State(state): State<AppState>, Path(id): Path<String>) -> HtmlResult {
    let id = parse_id(&id).map_err(error_response)?;
    state.todos.toggle(id).map_err(error_response)?;
    state.notify_changed();
    render_container(&state)
}

/// POST /todos/{id}/delete - Remove a todo.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> HtmlResult {
    let id = parse_id(&id).map_err(error_response)?;
    state.todos.delete(id).map_err(error_response)?;
    state.notify_changed();
    render_container(&state)
}

// ============================================================
// HELPERS
// ============================================================

/// Render the todo container from a fresh read of the store.
fn render_container(state: &AppState) -> HtmlResult {
    let todos = state.todos.list_all().map_err(error_response)?;
    let done = count_done(&todos);
    render(TodoContainerTemplate { todos, done })
}

fn render(template: impl Template) -> HtmlResult {
    template.render().map(Html).map_err(|e| {
        error!(error = %e, "Template render failed");
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Template error: {}", e))
    })
}

fn error_response(err: GoatError) -> (StatusCode, String) {
    let status = match &err {
        GoatError::ValidationError(_) | GoatError::InvalidId => StatusCode::BAD_REQUEST,
        GoatError::TodoNotFound(_) => StatusCode::NOT_FOUND,
        GoatError::Database(_) => {
            error!(error = %err, "Store operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, err.to_string())
}
