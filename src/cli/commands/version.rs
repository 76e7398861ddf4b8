//! Version command implementation

use crate::cli::Output;
use anyhow::Result;

/// Execute the version command
pub async fn execute(output: &Output) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");
    let description = env!("CARGO_PKG_DESCRIPTION");

    output.header("🧹 Vulnsweep Version Information");
    output.status_indicator("VERSION", &format!("{} v{}", name, version), true);
    output.blank_line();

    output.table_row("Description", description);
    output.table_row("Rust edition", "2024");
    output.table_row("Target", std::env::consts::ARCH);
    output.table_row(
        "Profile",
        if cfg!(debug_assertions) { "debug" } else { "release" },
    );

    output.blank_line();
    output.success("💡 Run 'vulnsweep --help' for usage information");

    Ok(())
}
