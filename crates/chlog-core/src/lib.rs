//! chlog Core - Core library for the changelog helper
//!
//! This crate provides the error taxonomy and configuration handling shared by
//! the changelog renderer and the command-line front end.

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, Config, SnippetConfig};
pub use error::{ChangelogError, ChlogError, ConfigError, Result};
