//! Scanner process invocation
//!
//! Runs the configured static-analysis command against a single project
//! directory and classifies the result. The contract for the external tool
//! is "accepts a recursive-scan flag and a path argument; exits 0 with
//! findings on stdout, or non-zero with findings/errors on stderr" -
//! bandit, semgrep and similar scanners all fit.

use crate::config::ScannerConfig;
use crate::scanner::types::ScanOutcome;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// The external scanner command, resolved from configuration
#[derive(Debug, Clone)]
pub struct ScannerCommand {
    program: String,
    recursive_flag: String,
    extra_args: Vec<String>,
}

impl ScannerCommand {
    /// Create a scanner command
    pub fn new(program: impl Into<String>, recursive_flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            recursive_flag: recursive_flag.into(),
            extra_args: Vec::new(),
        }
    }

    /// Build a scanner command from configuration
    pub fn from_config(config: &ScannerConfig) -> Self {
        Self {
            program: config.command.clone(),
            recursive_flag: config.recursive_flag.clone(),
            extra_args: config.args.clone(),
        }
    }

    /// The program name or path this command invokes
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check whether the scanner executable can be resolved on PATH
    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    /// Run the scanner against one project directory and wait for it.
    ///
    /// Never returns an error: launch failures are folded into
    /// [`ScanOutcome::InvocationError`] so a batch run continues past a
    /// broken project. No timeout is enforced.
    ///
    /// Captured output is decoded as UTF-8; invalid byte sequences are
    /// replaced with U+FFFD rather than failing the scan.
    pub fn scan(&self, project_path: &Path) -> ScanOutcome {
        debug!(
            program = %self.program,
            path = %project_path.display(),
            "invoking scanner"
        );

        let mut command = Command::new(&self.program);
        if !self.recursive_flag.is_empty() {
            command.arg(&self.recursive_flag);
        }
        command.args(&self.extra_args).arg(project_path);

        match command.output() {
            Ok(output) if output.status.success() => {
                ScanOutcome::Success(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => {
                ScanOutcome::Findings(String::from_utf8_lossy(&output.stderr).into_owned())
            }
            Err(err) => ScanOutcome::InvocationError(format!(
                "Failed to scan project {}: {}",
                project_path.display(),
                err
            )),
        }
    }
}
