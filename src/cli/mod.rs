//! Command-line interface for vulnsweep
//!
//! This module provides the main CLI structure and command handling.
//! It uses clap for argument parsing and provides a clean, user-friendly
//! interface.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod output;

pub use commands::scan::ScanArgs;
pub use output::Output;

/// Vulnsweep - Batch vulnerability scanning across project directories
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Force overwrite without prompting
    #[arg(short, long, global = true)]
    pub force: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan every project under the configured root and write the report
    Scan(ScanArgs),
    /// Show version information
    Version,
    /// External scanner tooling
    #[command(subcommand)]
    Tools(ToolsCommands),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Scanner tooling subcommands
#[derive(Subcommand)]
pub enum ToolsCommands {
    /// Check that the configured scanner command is installed
    Check,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize configuration
    Init,
    /// Validate configuration
    Validate,
    /// Show current configuration
    Show {
        /// Output format (text, toml, json, yaml)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Scan(args)) => {
                commands::scan::execute(args, config_path, &output).await
            }
            Some(Commands::Version) => commands::version::execute(&output).await,
            Some(Commands::Tools(cmd)) => commands::tools::execute(cmd, config_path, &output).await,
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, config_path, self.force, &output).await
            }
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
