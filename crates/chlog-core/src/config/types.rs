//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults::{DEFAULT_CHANGELOG_FILE, DEFAULT_HEADER, DEFAULT_TAG_FORMAT};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Tag snippet configuration
    pub snippet: SnippetConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Entry header template (e.g., "## [{version}] - {date}")
    pub header: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

/// Tag snippet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    /// Tag format (e.g., "v{version}")
    pub tag_format: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            tag_format: DEFAULT_TAG_FORMAT.to_string(),
        }
    }
}

impl SnippetConfig {
    /// Format a version into a tag name
    pub fn tag_name(&self, version: &str) -> String {
        self.tag_format.replace("{version}", version)
    }
}
