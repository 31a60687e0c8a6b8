use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uniform_shop::quotes::store::DEFAULT_LIST_LIMIT;

#[derive(Parser, Debug)]
#[command(name = "uniform-shop", version, about = "Custom uniform shop backend")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP server (default)
    Start,

    /// Test configuration file validity
    Test,

    /// Print the calculator catalog
    Options,

    /// Price a selection with the calculator
    Estimate(EstimateArgs),

    /// List recent quote requests from the database
    Quotes(QuotesArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Category id (e.g. shirts)
    #[arg(long)]
    pub category: String,

    /// Quantity range label (e.g. 51-100)
    #[arg(long)]
    pub quantity: String,

    /// Fabric id (e.g. cotton)
    #[arg(long)]
    pub fabric: String,

    /// Branding id (e.g. embroidery)
    #[arg(long, default_value = "none")]
    pub branding: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct QuotesArgs {
    /// Number of quote requests to show, newest first (1-200)
    #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: u32,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_start() {
        let cli = Cli {
            config: PathBuf::from("config.toml"),
            command: None,
        };

        assert!(matches!(cli.get_command(), Commands::Start));
    }

    #[test]
    fn test_cli_parsing_estimate() {
        let args = vec![
            "uniform-shop",
            "estimate",
            "--category",
            "suits",
            "--quantity",
            "1-10",
            "--fabric",
            "wool",
            "--json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Estimate(args) => {
                assert_eq!(args.category, "suits");
                assert_eq!(args.quantity, "1-10");
                assert_eq!(args.fabric, "wool");
                assert_eq!(args.branding, "none");
                assert!(args.json);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_parsing_global_config() {
        let args = vec!["uniform-shop", "test", "--config", "/etc/uniform-shop.toml"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.config, PathBuf::from("/etc/uniform-shop.toml"));
        assert!(matches!(cli.get_command(), Commands::Test));
    }

    #[test]
    fn test_cli_parsing_quotes() {
        let cli = Cli::try_parse_from(["uniform-shop", "quotes"]).unwrap();
        match cli.get_command() {
            Commands::Quotes(args) => assert_eq!(args.limit, DEFAULT_LIST_LIMIT),
            _ => panic!("Expected Quotes command"),
        }

        let cli = Cli::try_parse_from(["uniform-shop", "quotes", "--limit", "5"]).unwrap();
        match cli.get_command() {
            Commands::Quotes(args) => assert_eq!(args.limit, 5),
            _ => panic!("Expected Quotes command"),
        }
    }

    #[test]
    fn test_cli_estimate_requires_category() {
        let args = vec!["uniform-shop", "estimate", "--quantity", "1-10", "--fabric", "wool"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
