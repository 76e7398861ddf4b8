//! # Vulnsweep - Batch Vulnerability Scanning
//!
//! Vulnsweep runs an external static-analysis scanner (bandit by default)
//! against every project directory under a configured root and aggregates
//! the output into a single plain-text report.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install vulnsweep
//! cargo install vulnsweep
//!
//! # Scan every project under a directory
//! vulnsweep scan --root ~/projects
//!
//! # Check that the configured scanner is installed
//! vulnsweep tools check
//! ```

pub mod cli;
pub mod config;
pub mod projects;
pub mod report;
pub mod scanner;

pub use cli::{Cli, Output};
pub use config::VulnsweepConfig;

/// Result type alias for vulnsweep operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
