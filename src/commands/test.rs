use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;
use uniform_shop::config;

/// Execute the test command
///
/// This validates the configuration file without starting the server
pub fn execute(path: &Path) -> Result<()> {
    println!("{}", "Testing configuration...".yellow());
    info!(path = %path.display(), "Loading and validating configuration");

    // Load configuration (this will validate it)
    let cfg = config::load_config(path)?;

    println!("{}", "✓ Configuration test successful".green());
    println!();

    println!("{}", "Configuration Summary:".bold());
    println!("  {}: {}:{}", "Server".cyan(), cfg.server.host, cfg.server.port);
    println!("  {}: {}", "Log Level".cyan(), cfg.server.log_level);
    println!("  {}: {}", "Log Format".cyan(), cfg.server.log_format);
    println!("  {}: {} bytes", "Body Limit".cyan(), cfg.server.max_body_bytes);
    if cfg.server.cors_allowed_origins.is_empty() {
        println!("  {}: any", "CORS Origins".cyan());
    } else {
        println!("  {}: {}", "CORS Origins".cyan(), cfg.server.cors_allowed_origins.join(", "));
    }
    println!("  {}: {}", "Database".cyan(), cfg.database.path);

    Ok(())
}
