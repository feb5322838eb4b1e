//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SECTION: &str = "keyword-merge";

/// Load configuration for `working_dir`.
///
/// An explicit `config_path` must exist and parse. Otherwise a config file is
/// looked up in `working_dir`; a discovered file that fails to parse is
/// reported and the defaults are used instead.
pub fn load_config(working_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let explicit = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(working_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(with_dir(Config::default(), working_dir));
    };

    match parse_config_file(&config_file) {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(with_dir(cfg, working_dir))
        }
        Err(e) if !explicit => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(with_dir(Config::default(), working_dir))
        }
        Err(e) => Err(e),
    }
}

fn with_dir(mut config: Config, working_dir: &Path) -> Config {
    config.working_dir = working_dir.to_path_buf();
    config
}

fn parse_config_file(config_file: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => parse_toml_config(&content, config_file),
        "yaml" | "yml" => parse_yaml_config(&content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// Parse TOML config, optionally nested under a `[keyword-merge]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, optionally nested under a `keyword-merge` key.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(working_dir: &Path) -> Option<PathBuf> {
    let candidates =
        ["keyword-merge.toml", ".keyword-merge.toml", "keyword-merge.yml", "keyword-merge.yaml"];

    candidates.iter().map(|c| working_dir.join(c)).find(|path| path.is_file())
}
