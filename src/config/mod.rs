//! Configuration management for vulnsweep
//!
//! Configuration is layered with figment: embedded defaults, then a user
//! config, then a repository config (TOML, JSON or YAML), then
//! VULNSWEEP_-prefixed environment variables. CLI flags override the
//! merged result at command level.

use anyhow::Result;
use figment::{
    Figment,
    providers::{Data, Env, Format, Json, Toml, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

// Embed the default config at compile time
pub const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Main configuration structure for vulnsweep
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VulnsweepConfig {
    /// Project enumeration settings
    pub projects: ProjectsConfig,

    /// External scanner settings
    pub scanner: ScannerConfig,

    /// Report output settings
    pub report: ReportConfig,
}

/// Project enumeration configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectsConfig {
    /// Root directory containing the projects to scan. Required: there is
    /// no usable default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Sort projects by name before scanning. When false, projects are
    /// scanned in filesystem listing order, which is OS-dependent.
    #[serde(default)]
    pub sort: bool,
}

/// External scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Command to invoke per project
    pub command: String,

    /// Flag that makes the scanner recurse into the project directory
    pub recursive_flag: String,

    /// Extra arguments inserted before the project path
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            command: "bandit".to_string(),
            recursive_flag: "-r".to_string(),
            args: Vec::new(),
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// File the aggregated report is written to (truncated on every run)
    pub output: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("vulnerabilities_report.txt"),
        }
    }
}

impl VulnsweepConfig {
    /// Load configuration using the standard layering
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    /// Load configuration, optionally pinning a single custom config file.
    ///
    /// The custom file's format is chosen by extension (`.json`, `.yaml`,
    /// `.yml`; anything else is parsed as TOML).
    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            debug!(path = custom_path, "loading custom config file");
            figment = figment.merge(config_file(custom_path));
        } else {
            // Standard priority: user config -> repo config
            figment = figment
                .merge(Toml::file(Self::user_config_path()))
                .merge(Toml::file("vulnsweep.toml"))
                .merge(Json::file("vulnsweep.json"))
                .merge(Yaml::file("vulnsweep.yaml"))
                .merge(Yaml::file("vulnsweep.yml"));
        }

        // Environment variables always have highest priority. `__` separates
        // nesting levels so keys like scanner.recursive_flag stay reachable
        // (VULNSWEEP_SCANNER__RECURSIVE_FLAG).
        figment = figment.merge(Env::prefixed("VULNSWEEP_").split("__"));

        Ok(figment.extract()?)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/vulnsweep/config.toml", home),
            Err(_) => "~/.config/vulnsweep/config.toml".to_string(),
        }
    }
}

/// Pick the provider for a config file based on its extension.
/// Unknown extensions are treated as TOML.
fn config_file(path: &str) -> ConfigFile {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => ConfigFile::Json(Json::file(path)),
        Some("yaml") | Some("yml") => ConfigFile::Yaml(Yaml::file(path)),
        _ => ConfigFile::Toml(Toml::file(path)),
    }
}

/// Wrapper enum to handle different provider types
enum ConfigFile {
    Toml(Data<Toml>),
    Json(Data<Json>),
    Yaml(Data<Yaml>),
}

impl figment::Provider for ConfigFile {
    fn metadata(&self) -> figment::Metadata {
        match self {
            ConfigFile::Toml(p) => p.metadata(),
            ConfigFile::Json(p) => p.metadata(),
            ConfigFile::Yaml(p) => p.metadata(),
        }
    }

    fn data(
        &self,
    ) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, figment::Error> {
        match self {
            ConfigFile::Toml(p) => p.data(),
            ConfigFile::Json(p) => p.data(),
            ConfigFile::Yaml(p) => p.data(),
        }
    }
}
