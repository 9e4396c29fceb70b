//! Web server configuration.

use std::time::Duration;

use crate::hub::DEFAULT_QUEUE_CAPACITY;

/// Settings for [`crate::run_server`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Pending messages each live-stream subscriber may buffer.
    pub queue_capacity: usize,
    /// Interval for SSE keep-alive comments. `None` disables them.
    pub keep_alive: Option<Duration>,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            keep_alive: Some(Duration::from_secs(15)),
        }
    }
}
