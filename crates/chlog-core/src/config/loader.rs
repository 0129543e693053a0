//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find the nearest configuration file, starting at `start_dir`.
///
/// Each ancestor is tried in turn, innermost first. Within one directory the
/// file names are tried in [`config_file_names`] order, each both directly
/// and under `.github/`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");

    let found = start_dir
        .ancestors()
        .flat_map(|dir| {
            config_file_names()
                .into_iter()
                .flat_map(move |name| [dir.join(name), dir.join(".github").join(name)])
        })
        .find(|candidate| candidate.is_file());

    match &found {
        Some(path) => info!(path = %path.display(), "found config file"),
        None => debug!("no config file found"),
    }
    found
}

/// Load configuration or use defaults.
///
/// Only a missing file falls back to defaults; a file that exists but fails
/// to parse or validate is an error.
pub fn load_config_or_default(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            debug!(dir = %dir.display(), "no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}
