//! chlog Changelog - Changelog entry rendering for the changelog helper
//!
//! This crate turns a version, a date and categorized change items into a
//! markdown block, appends it to a changelog file, and builds the optional
//! tag snippet.

pub mod formatter;
pub mod renderer;
pub mod snippet;
pub mod types;
pub mod writer;

pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use renderer::ChangelogRenderer;
pub use snippet::tag_snippet;
pub use types::{ChangeKind, ChangelogEntry};
pub use writer::append_to_file;
