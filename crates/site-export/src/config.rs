//! Configuration for the static site exporter

use anyhow::{Context, Result};
use concepts_web::render::DocumentOptions;
use serde::Deserialize;
use shared::CONFIG;
use std::path::{Path, PathBuf};

/// Output directory used when neither the config file nor the CLI names one
pub const DEFAULT_OUTPUT_DIR: &str = "./dist";

// =============================================================================
// File-based Configuration (site.toml)
// =============================================================================

/// Configuration loaded from site.toml
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Document settings, all optional
#[derive(Debug, Default, Deserialize)]
pub struct SiteConfig {
    /// Page title (defaults to the site name)
    pub title: Option<String>,
    /// Document language (defaults to the site language)
    pub lang: Option<String>,
    /// Stylesheet href linked from `<head>`
    pub stylesheet: Option<String>,
}

/// Output settings
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| {
            "Invalid site config. Check for:\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
             - Unknown value types (all values are strings)"
        })
    }
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Resolved export settings
#[derive(Debug)]
pub struct Config {
    pub document: DocumentOptions,
    pub output_dir: PathBuf,
}

impl Config {
    /// Merge file config with an optional output directory override
    pub fn from_file(file_config: FileConfig, output_dir: Option<PathBuf>) -> Self {
        let FileConfig { site, output } = file_config;

        Self {
            document: DocumentOptions {
                title: site.title.unwrap_or_else(|| CONFIG.name.to_string()),
                lang: site.lang.unwrap_or_else(|| CONFIG.lang.to_string()),
                stylesheet: site.stylesheet,
            },
            // CLI flag wins over the config file
            output_dir: output_dir
                .or(output.dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        }
    }

    /// Path of the rendered page
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join("index.html")
    }
}
