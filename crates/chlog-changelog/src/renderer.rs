//! Changelog rendering

use chlog_core::config::ChangelogConfig;
use tracing::{info, instrument};

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::types::ChangelogEntry;

/// Changelog renderer.
///
/// Built once per invocation from the loaded configuration and passed to
/// whatever needs to render; holds no global state.
pub struct ChangelogRenderer {
    formatter: Box<dyn ChangelogFormatter>,
    config: ChangelogConfig,
}

impl ChangelogRenderer {
    /// Create a new renderer with the markdown formatter
    pub fn new(config: ChangelogConfig) -> Self {
        Self {
            formatter: Box::new(MarkdownFormatter::new()),
            config,
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Render an entry to text
    #[instrument(skip(self, entry), fields(version = %entry.version))]
    pub fn render(&self, entry: &ChangelogEntry) -> String {
        info!(
            version = %entry.version,
            date = %entry.date_string(),
            sections = entry.sections().count(),
            "rendering changelog entry"
        );
        self.formatter.format(entry, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeKind;
    use chrono::{Local, NaiveDate};

    struct PlainFormatter;

    impl ChangelogFormatter for PlainFormatter {
        fn format(&self, entry: &ChangelogEntry, _config: &ChangelogConfig) -> String {
            entry
                .sections()
                .flat_map(|(kind, items)| items.iter().map(move |i| format!("{kind}: {i}\n")))
                .collect()
        }
    }

    #[test]
    fn test_render_markdown() {
        let renderer = ChangelogRenderer::new(ChangelogConfig::default());
        let entry = ChangelogEntry::new("2.0.0")
            .with_date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
            .with_items(ChangeKind::Removed, ["legacy flag"]);

        let output = renderer.render(&entry);

        assert!(output.starts_with("## [2.0.0] - 2025-01-31\n"));
        assert!(output.contains("### Removed\n\n- legacy flag\n"));
    }

    #[test]
    fn test_render_uses_current_date_by_default() {
        let renderer = ChangelogRenderer::new(ChangelogConfig::default());
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

        let output = renderer.render(&ChangelogEntry::new("0.1.0"));

        assert!(output.contains(&today));
    }

    #[test]
    fn test_render_with_custom_formatter() {
        let renderer =
            ChangelogRenderer::new(ChangelogConfig::default()).with_formatter(PlainFormatter);
        let entry = ChangelogEntry::new("1.0.0")
            .with_items(ChangeKind::Fixed, ["b"])
            .with_items(ChangeKind::Added, ["a"]);

        assert_eq!(renderer.render(&entry), "added: a\nfixed: b\n");
    }
}
