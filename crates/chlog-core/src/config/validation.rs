//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    validate_snippet(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    if !config.changelog.header.contains("{version}") {
        return Err(ConfigError::InvalidValue {
            field: "changelog.header".to_string(),
            message: "must contain {version} placeholder".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_snippet(config: &Config) -> Result<()> {
    if !config.snippet.tag_format.contains("{version}") {
        return Err(ConfigError::InvalidValue {
            field: "snippet.tag_format".to_string(),
            message: "must contain {version} placeholder".to_string(),
        }
        .into());
    }

    Ok(())
}
