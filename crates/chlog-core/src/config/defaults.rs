//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "chlog.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "chlog.yaml";

/// Default changelog file, relative to the working directory
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Default entry header; `{version}` and `{date}` are substituted
pub const DEFAULT_HEADER: &str = "## [{version}] - {date}";

/// Default tag name used by the tag snippet
pub const DEFAULT_TAG_FORMAT: &str = "{version}";

/// Version used when none is supplied
pub const UNRELEASED: &str = "Unreleased";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".chlog.toml",
        ".chlog.yaml",
    ]
}
