//! Configuration command implementations
//!
//! Commands for managing vulnsweep configuration.

use crate::cli::{ConfigCommands, Output};
use crate::config::{DEFAULT_CONFIG, VulnsweepConfig};
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Execute config commands
pub async fn execute(
    cmd: ConfigCommands,
    config_path: Option<&str>,
    force: bool,
    output: &Output,
) -> Result<()> {
    match cmd {
        ConfigCommands::Init => init(force, output).await,
        ConfigCommands::Validate => validate(config_path, output).await,
        ConfigCommands::Show { format } => show(config_path, &format, output).await,
    }
}

async fn init(force: bool, output: &Output) -> Result<()> {
    output.header("🔧 Initializing Configuration");

    let config_file = Path::new("vulnsweep.toml");
    if config_file.exists() && !force {
        output.warning("Configuration file already exists");
        if !output.confirm("Do you want to overwrite it?") {
            output.info("Configuration initialization cancelled");
            return Ok(());
        }
    }

    // The embedded defaults double as a commented starter config
    fs::write(config_file, DEFAULT_CONFIG)?;

    output.success("Configuration file created successfully");
    output.table_row("Config file", "vulnsweep.toml");
    output.info("Edit vulnsweep.toml and set projects.root to your projects directory");

    Ok(())
}

async fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    output.header("✅ Validating Configuration");

    match VulnsweepConfig::load_with_custom_config(config_path) {
        Ok(config) => {
            output.success("Configuration is valid");
            output.blank_line();

            output.step("Configuration Summary");
            match &config.projects.root {
                Some(root) if !root.as_os_str().is_empty() => {
                    output.table_row("Projects root", &root.display().to_string());
                }
                _ => {
                    output.warning("projects.root is not set; `vulnsweep scan` will fail");
                }
            }
            output.table_row("Scanner command", &config.scanner.command);
            output.table_row("Recursive flag", &config.scanner.recursive_flag);
            output.table_row("Report output", &config.report.output.display().to_string());
            output.table_row("Sorted order", &config.projects.sort.to_string());
            Ok(())
        }
        Err(e) => {
            output.error(&format!("Configuration is invalid: {}", e));
            Err(e)
        }
    }
}

async fn show(config_path: Option<&str>, format: &str, output: &Output) -> Result<()> {
    let config = VulnsweepConfig::load_with_custom_config(config_path)?;

    match format {
        "toml" => println!("{}", toml::to_string_pretty(&config)?),
        "json" => println!("{}", serde_json::to_string_pretty(&config)?),
        "yaml" => println!("{}", serde_yml::to_string(&config)?),
        _ => {
            output.header("⚙️ Current Configuration");
            let root = config
                .projects
                .root
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unset)".to_string());
            output.table_row("Projects root", &root);
            output.table_row("Sorted order", &config.projects.sort.to_string());
            output.table_row("Scanner command", &config.scanner.command);
            output.table_row("Recursive flag", &config.scanner.recursive_flag);
            output.table_row("Extra args", &config.scanner.args.join(" "));
            output.table_row("Report output", &config.report.output.display().to_string());
        }
    }

    Ok(())
}
