//! Scanner tooling commands
//!
//! Checks availability of the configured external scanner.

use crate::cli::{Output, ToolsCommands};
use crate::config::VulnsweepConfig;
use crate::scanner::ScannerCommand;
use anyhow::Result;

/// Execute tools commands
pub async fn execute(cmd: ToolsCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ToolsCommands::Check => check(config_path, output).await,
    }
}

async fn check(config_path: Option<&str>, output: &Output) -> Result<()> {
    output.header("🔎 Scanner Availability");

    let config = VulnsweepConfig::load_with_custom_config(config_path)?;
    let command = ScannerCommand::from_config(&config.scanner);

    match which::which(command.program()) {
        Ok(resolved) => {
            output.status_indicator("FOUND", command.program(), true);
            output.table_row("Resolved path", &resolved.display().to_string());
            output.table_row("Recursive flag", &config.scanner.recursive_flag);
            Ok(())
        }
        Err(_) => {
            output.status_indicator("MISSING", command.program(), false);
            output.indent("Install the scanner or set scanner.command in vulnsweep.toml");
            output.indent("A scan will still run, but every project will report an invocation error");
            Ok(())
        }
    }
}
