//! Static export of the React Essentials core concepts page
//!
//! Renders the home page on the server side and writes it as a single
//! `index.html` that any static host can serve.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use concepts_web::render::render_document;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use config::{Config, FileConfig};

/// Config file picked up from the working directory when `--config` is absent
const CONFIG_FILE: &str = "site.toml";

#[derive(Parser, Debug)]
#[command(name = "site-export")]
#[command(about = "Render the core concepts page to static HTML")]
struct Args {
    /// Site config file (default: ./site.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides [output].dir)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Load the named config file, `site.toml` in `base_dir` if it exists, or built-in defaults
fn load_config_file(path: Option<&Path>, base_dir: &Path) -> Result<FileConfig> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            FileConfig::load(path).with_context(|| {
                format!(
                    "Config file '{}' could not be loaded.\n\n\
                    Omit --config to use ./{} or the built-in defaults.",
                    path.display(),
                    CONFIG_FILE
                )
            })
        }
        None => {
            let default_path = base_dir.join(CONFIG_FILE);
            if default_path.is_file() {
                tracing::info!(path = %default_path.display(), "loading config");
                FileConfig::load(&default_path)
            } else {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                Ok(FileConfig::default())
            }
        }
    }
}

/// Log filter from `RUST_LOG` when set and valid, else `info` (`debug` when verbose)
fn env_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

/// Render the page and write it below the configured output directory
fn export(config: &Config) -> Result<PathBuf> {
    let html = render_document(&config.document);

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create output directory: {}", config.output_dir.display()))?;

    let index = config.index_path();
    std::fs::write(&index, &html).with_context(|| format!("Failed to write {}", index.display()))?;

    tracing::info!(path = %index.display(), bytes = html.len(), "page written");
    Ok(index)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref(), args.verbose))
        .init();

    let file_config = load_config_file(args.config.as_deref(), Path::new("."))?;
    let config = Config::from_file(file_config, args.output_dir);
    tracing::debug!(?config, "resolved export config");

    export(&config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use concepts_web::render::DocumentOptions;

    #[test]
    fn test_export_writes_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            document: DocumentOptions::default(),
            output_dir: dir.path().join("nested").join("dist"),
        };

        let index = export(&config).unwrap();
        assert_eq!(index, config.output_dir.join("index.html"));

        let html = std::fs::read_to_string(&index).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="core-concepts""#));
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = load_config_file(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_default_config_loaded_from_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[site]\ntitle = \"Local\"\n").unwrap();

        let file_config = load_config_file(None, dir.path()).unwrap();
        assert_eq!(file_config.site.title.as_deref(), Some("Local"));
    }

    #[test]
    fn test_no_default_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let file_config = load_config_file(None, dir.path()).unwrap();
        assert!(file_config.site.title.is_none());
        assert!(file_config.site.lang.is_none());
        assert!(file_config.site.stylesheet.is_none());
        assert!(file_config.output.dir.is_none());
    }

    #[test]
    fn test_env_filter_keeps_rust_log_level() {
        assert_eq!(env_filter(Some("warn"), false).to_string(), "warn");
        assert_eq!(env_filter(Some("trace"), true).to_string(), "trace");
        assert_eq!(env_filter(Some("site_export=debug"), false).to_string(), "site_export=debug");
    }

    #[test]
    fn test_env_filter_defaults() {
        assert_eq!(env_filter(None, false).to_string(), "info");
        assert_eq!(env_filter(None, true).to_string(), "debug");
        assert_eq!(env_filter(Some("site_export=loud"), false).to_string(), "info");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["site-export", "--config", "a.toml", "-o", "out", "-v"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("a.toml")));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert!(args.verbose);
    }
}
