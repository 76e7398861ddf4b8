//! Scan command implementation
//!
//! Resolves configuration, enumerates projects under the root, runs the
//! external scanner against each one and writes the aggregated report.

use crate::cli::Output;
use crate::config::VulnsweepConfig;
use crate::projects;
use crate::report::ReportWriter;
use crate::scanner::{ScannerCommand, scan_all};
use anyhow::{Result, bail};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ScanArgs {
    /// Root directory containing the projects to scan
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Report file path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Scanner command to invoke (name or path)
    #[arg(long, value_name = "CMD")]
    pub tool: Option<String>,

    /// Sort projects by name for a deterministic report order
    #[arg(long)]
    pub sort: bool,
}

/// Execute the scan command
pub async fn execute(args: ScanArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let mut config = VulnsweepConfig::load_with_custom_config(config_path)?;

    // CLI flags override the merged configuration
    if let Some(root) = args.root {
        config.projects.root = Some(root);
    }
    if let Some(report_path) = args.output {
        config.report.output = report_path;
    }
    if let Some(tool) = args.tool {
        config.scanner.command = tool;
    }
    let sort = args.sort || config.projects.sort;

    let root = match config.projects.root {
        Some(root) if !root.as_os_str().is_empty() => root,
        _ => bail!(
            "no projects root configured; set projects.root in vulnsweep.toml or pass --root"
        ),
    };

    let command = ScannerCommand::from_config(&config.scanner);
    if !command.is_available() {
        output.warning(&format!(
            "scanner '{}' not found on PATH; every project will report an invocation error",
            command.program()
        ));
    }

    output.header("🔍 Vulnerability Scan");
    output.step(&format!("Scanning projects under {}", root.display()));

    let projects = projects::discover(&root, sort)?;
    if projects.is_empty() {
        output.warning("No project directories found under the root");
    }

    let mut report = ReportWriter::create(&config.report.output)?;
    scan_all(&projects, &command, &mut report, output)?;
    let report_path = report.finish()?;

    output.blank_line();
    output.success(&format!(
        "Vulnerability report generated at: {}",
        report_path.display()
    ));
    Ok(())
}
