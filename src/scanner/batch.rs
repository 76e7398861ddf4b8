//! Sequential batch scan over discovered projects
//!
//! One project is scanned at a time; the next scan does not start until
//! the previous project's report block has been written. The report writer
//! is exclusively owned by the batch for the duration of the run.

use crate::cli::Output;
use crate::projects::Project;
use crate::report::ReportWriter;
use crate::scanner::invoker::ScannerCommand;
use anyhow::Result;

/// Scan every project and append one report block per project.
///
/// Scanner-level problems (findings, launch failures) end up as report
/// text; only report write failures abort the run. Returns the number of
/// projects scanned.
pub fn scan_all(
    projects: &[Project],
    command: &ScannerCommand,
    report: &mut ReportWriter,
    output: &Output,
) -> Result<usize> {
    for project in projects {
        let outcome = command.scan(&project.path);
        report.write_block(&project.name, outcome.text())?;

        output.verbose(&format!("{}: {}", project.name, outcome.label()));
        output.success(&format!("Finished scanning {}", project.name));
    }
    Ok(projects.len())
}
