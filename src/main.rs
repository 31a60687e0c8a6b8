use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use uniform_shop::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.get_command();

    // The server takes its log settings from the config file; other
    // commands log with defaults so a broken config can still be reported.
    match command {
        cli::Commands::Start => {
            let cfg = config::load_config(&args.config)?;
            init_tracing(&cfg.server.log_level, &cfg.server.log_format);
            commands::start::execute(cfg).await?;
        }
        cli::Commands::Test => {
            init_tracing("warn", "text");
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Options => {
            commands::options::execute();
        }
        cli::Commands::Estimate(estimate_args) => {
            init_tracing("warn", "text");
            commands::estimate::execute(&estimate_args)?;
        }
        cli::Commands::Quotes(quotes_args) => {
            init_tracing("warn", "text");
            commands::quotes::execute(&args.config, &quotes_args).await?;
        }
        cli::Commands::Version => {
            println!("Uniform Shop v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
