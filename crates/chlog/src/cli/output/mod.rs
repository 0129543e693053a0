//! Console status lines
//!
//! Everything here is suppressed by `--quiet` except [`error`].

use std::fmt::Display;
use std::path::Path;

use console::style;

/// Report that an entry for `version` was appended to `path`
pub fn entry_written(version: &str, path: &Path) {
    println!(
        "{} Changelog entry {} written to {}",
        style("✓").green().bold(),
        style(version).green().bold(),
        style(path.display()).cyan()
    );
}

/// Warn that the entry for `version` carries no items
pub fn empty_entry(version: &str) {
    println!(
        "{} No items supplied, the {} entry will only contain its header",
        style("!").yellow().bold(),
        style(version).green().bold()
    );
}

/// Introduce the printed tag snippet
pub fn snippet_intro(tag: &str) {
    println!(
        "{} Run the following to tag and push {}:",
        style("→").blue(),
        style(tag).yellow()
    );
}

/// Report a fatal error on stderr
pub fn error(message: impl Display) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}
