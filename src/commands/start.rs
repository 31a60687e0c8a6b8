use anyhow::Result;
use colored::Colorize;
use tracing::info;
use uniform_shop::{config::Config, server};

/// Execute the start command
///
/// Runs the server in the foreground until SIGINT/SIGTERM.
pub async fn execute(cfg: Config) -> Result<()> {
    println!("{}", "Starting uniform shop in foreground mode...".green());
    info!(
        host = %cfg.server.host,
        port = cfg.server.port,
        database = %cfg.database.path,
        "Configuration loaded"
    );

    // Blocks until shutdown
    server::start_server(cfg).await?;

    Ok(())
}
