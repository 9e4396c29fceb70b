//! Application state.

use goat_core::TodoService;
use goat_db::DbPool;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;
use crate::hub::EventHub;

/// Payload broadcast after every successful mutation.
pub const UPDATE_EVENT: &str = "update";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub todos: TodoService,
    pub hub: Arc<EventHub>,
    /// Cancelled when the server shuts down; live streams hold child tokens.
    pub shutdown: CancellationToken,
    pub keep_alive: Option<Duration>,
}

impl AppState {
    pub fn new(db: Arc<DbPool>, config: &ServerConfig, shutdown: CancellationToken) -> Self {
        Self {
            todos: TodoService::new(db),
            hub: Arc::new(EventHub::new(config.queue_capacity)),
            shutdown,
            keep_alive: config.keep_alive,
        }
    }

    /// Tell every live stream that the todo list changed.
    pub fn notify_changed(&self) {
        self.hub.broadcast(UPDATE_EVENT);
    }
}
