/// Result of invoking the external scanner against one project.
///
/// A non-zero exit status is not a hard failure: most scanners exit
/// non-zero when they find issues, so their stderr is treated as findings
/// output. Only a failure to launch the process at all is an invocation
/// error, and even that is recovered into report text so one broken
/// project never aborts the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Scanner exited 0; captured stdout
    Success(String),
    /// Scanner exited non-zero; captured stderr
    Findings(String),
    /// Scanner could not be launched; synthesized message naming the
    /// project path and the OS error
    InvocationError(String),
}

impl ScanOutcome {
    /// Text that goes into the report block for this project, verbatim
    pub fn text(&self) -> &str {
        match self {
            ScanOutcome::Success(text) => text,
            ScanOutcome::Findings(text) => text,
            ScanOutcome::InvocationError(message) => message,
        }
    }

    /// Short label for console/progress output
    pub fn label(&self) -> &'static str {
        match self {
            ScanOutcome::Success(_) => "clean",
            ScanOutcome::Findings(_) => "findings",
            ScanOutcome::InvocationError(_) => "invocation error",
        }
    }
}
