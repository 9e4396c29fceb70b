//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use goat_core::TodoService;
use goat_web::ServerConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "GOAT_PORT", default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "GOAT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Pending live-update messages buffered per browser
    #[arg(long, default_value_t = goat_web::hub::DEFAULT_QUEUE_CAPACITY)]
    pub queue_capacity: usize,

    /// Seconds between SSE keep-alive comments (0 disables them)
    #[arg(long, default_value = "15")]
    pub keep_alive_secs: u64,

    /// Do not insert sample todos into an empty database
    #[arg(long)]
    pub no_seed: bool,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "goat.log")]
    pub log_file: PathBuf,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            queue_capacity: self.queue_capacity,
            keep_alive: (self.keep_alive_secs > 0).then(|| Duration::from_secs(self.keep_alive_secs)),
        }
    }
}

pub async fn execute(args: ServeArgs, db_path: &Path) -> Result<()> {
    let pool = Arc::new(goat_db::init_pool(db_path)?);

    if !args.no_seed {
        match TodoService::new(Arc::clone(&pool)).seed_if_empty() {
            Ok(0) => {}
            Ok(inserted) => info!(inserted, "Seeded sample todos"),
            Err(e) => warn!(error = %e, "Failed to seed database"),
        }
    }

    let config = args.server_config();

    println!();
    println!("  {} {}", "GOAT".cyan().bold(), "Todo".bold());
    println!();
    println!("  {}    http://{}", "App".green(), config.addr());
    println!("  {} http://{}/events", "Events".green(), config.addr());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    goat_web::run_server(pool, config).await?;

    Ok(())
}
