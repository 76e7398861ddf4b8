//! Aggregated report writing
//!
//! The report is a plain-text UTF-8 file with one delimited block per
//! scanned project:
//!
//! ```text
//! Scanning project: <name>
//! --------------------------------------------------
//! <scan output, verbatim>
//! ==================================================
//!
//! ```
//!
//! The file is opened once per run (truncating any previous report) and
//! written incrementally. Write failures are fatal and propagate.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Width of the `-` and `=` separator lines
pub const SEPARATOR_WIDTH: usize = 50;

/// Incremental writer for the aggregated report file
#[derive(Debug)]
pub struct ReportWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl ReportWriter {
    /// Create the report file, truncating any existing content
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create report file {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Path of the report file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one project block.
    ///
    /// The body bytes are written verbatim between the separators; no
    /// newline is added after the body, so a body without a trailing
    /// newline runs straight into the `=` separator, exactly as captured.
    pub fn write_block(&mut self, project_name: &str, body: &str) -> Result<()> {
        self.try_write_block(project_name, body)
            .with_context(|| format!("failed to write report block to {}", self.path.display()))
    }

    fn try_write_block(&mut self, project_name: &str, body: &str) -> std::io::Result<()> {
        writeln!(self.writer, "Scanning project: {}", project_name)?;
        writeln!(self.writer, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        self.writer.write_all(body.as_bytes())?;
        write!(self.writer, "{}\n\n", "=".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }

    /// Flush buffered content and return the report path
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer
            .flush()
            .with_context(|| format!("failed to flush report file {}", self.path.display()))?;
        Ok(self.path)
    }
}
