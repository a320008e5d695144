//! pgdt - Command-line companion for the DHCP server.
//!
//! Lists and checks the tokens of configuration files, and queries a running
//! server for pool statistics and process status.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    common::OutputFormat,
    server::{run_pools, run_status, ServerArgs},
    tokens::{run_tokens, TokensArgs},
};
use config::Config;
use error::{PgdtError, Result};

/// pgdt - DHCP configuration and server tool
#[derive(Parser, Debug)]
#[command(name = "pgdt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect DHCP server configuration files and query a running server", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PGDT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PGDT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PGDT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the pgdt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of a configuration file
    ///
    /// Prints one token per line as `<line> <KIND> <value>`, tab separated,
    /// or a JSON array with `--format json`.
    Tokens(TokensCommand),

    /// Check configuration files for illegal tokens
    ///
    /// Prints a diagnostic for every literal that could not be decoded and
    /// exits with a failure status if there was any.
    Check(CheckCommand),

    /// Show lease statistics for every pool of a running server
    Pools(ServerCommand),

    /// Show memory and runtime status of a running server
    Status(ServerCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Configuration file to lex
    file: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave comments out of the listing
    #[arg(long)]
    skip_comments: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Configuration files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Arguments for the server query subcommands.
#[derive(Parser, Debug)]
struct ServerCommand {
    /// Server RPC address as host:port (default: from config)
    #[arg(short, long, env = "PGDT_SERVER")]
    server: Option<String>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Main entry point for the pgdt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    // Initialize logging
    init_logging(verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PgdtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose),
        Commands::Pools(args) => run_pools(server_args(args, config)),
        Commands::Status(args) => run_status(server_args(args, config)),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        file: args.file,
        format: args.format.unwrap_or(config.tokens.format),
        skip_comments: args.skip_comments || config.tokens.skip_comments,
        verbose,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool) -> Result<()> {
    run_check(CheckArgs {
        files: args.files,
        verbose,
    })
}

/// Merge server query flags over the configured defaults.
fn server_args(args: ServerCommand, config: Config) -> ServerArgs {
    ServerArgs {
        address: args.server.unwrap_or(config.rpc.address),
        format: args.format.unwrap_or(config.rpc.format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["pgdt", "tokens", "dhcp.conf"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("dhcp.conf"));
            assert_eq!(args.format, None);
            assert!(!args.skip_comments);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_format() {
        let cli = Cli::parse_from(["pgdt", "tokens", "dhcp.conf", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_skip_comments() {
        let cli = Cli::parse_from(["pgdt", "tokens", "--skip-comments", "dhcp.conf"]);
        if let Commands::Tokens(args) = cli.command {
            assert!(args.skip_comments);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["pgdt", "tokens", "dhcp.conf", "-F", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_check_many_files() {
        let cli = Cli::parse_from(["pgdt", "check", "a.conf", "b.conf"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.files.len(), 2);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_check_requires_file() {
        assert!(Cli::try_parse_from(["pgdt", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_pools_with_server() {
        let cli = Cli::parse_from(["pgdt", "pools", "--server", "10.0.0.1:9000"]);
        if let Commands::Pools(args) = cli.command {
            assert_eq!(args.server, Some("10.0.0.1:9000".to_string()));
        } else {
            panic!("Expected Pools command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "pgdt",
            "--verbose",
            "--no-color",
            "--config",
            "/etc/pgdt.toml",
            "status",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/pgdt.toml")));
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_server_args_prefer_flags() {
        let mut config = Config::default();
        config.rpc.format = OutputFormat::Json;

        let args = server_args(
            ServerCommand {
                server: Some("192.168.1.1:1".to_string()),
                format: None,
            },
            config,
        );
        assert_eq!(args.address, "192.168.1.1:1");
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_server_args_fall_back_to_config() {
        let args = server_args(
            ServerCommand {
                server: None,
                format: Some(OutputFormat::Text),
            },
            Config::default(),
        );
        assert_eq!(args.address, config::DEFAULT_RPC_ADDRESS);
        assert_eq!(args.format, OutputFormat::Text);
    }
}
