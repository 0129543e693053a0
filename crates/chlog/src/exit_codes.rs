//! Exit codes for the CLI
//!
//! Argument errors never reach these; clap exits with 2 before anything runs.

use chlog_core::error::{ChangelogError, ChlogError, ConfigError};

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 3;

/// Changelog file could not be written
pub const WRITE_ERROR: u8 = 4;

/// Map an error to the exit code reported for it
pub fn for_error(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<ChlogError>() {
            return match err {
                ChlogError::Config(_) => CONFIG_ERROR,
                ChlogError::Changelog(_) => WRITE_ERROR,
            };
        }
        if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        }
        if cause.is::<ChangelogError>() {
            return WRITE_ERROR;
        }
    }
    ERROR
}
