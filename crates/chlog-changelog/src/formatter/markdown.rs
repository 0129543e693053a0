//! Markdown changelog formatter

use chlog_core::config::ChangelogConfig;
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::ChangelogEntry;

/// Markdown changelog formatter, in the "Keep a Changelog" layout
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn header(entry: &ChangelogEntry, template: &str) -> String {
        template
            .replace("{version}", &entry.version)
            .replace("{date}", &entry.date_string())
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, entry, config), fields(version = %entry.version))]
    fn format(&self, entry: &ChangelogEntry, config: &ChangelogConfig) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(entry, &config.header));
        output.push_str("\n\n");

        for (kind, items) in entry.sections() {
            output.push_str(&format!("### {}\n\n", kind.title()));

            for item in items {
                output.push_str(&format!("- {}\n", item));
            }

            output.push('\n');
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangeKind;
    use chrono::NaiveDate;

    fn entry() -> ChangelogEntry {
        ChangelogEntry::new("1.2.0").with_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn test_format_basic() {
        let entry = entry()
            .with_items(ChangeKind::Added, ["support X"])
            .with_items(ChangeKind::Fixed, ["bug Y"]);

        let output = MarkdownFormatter::new().format(&entry, &ChangelogConfig::default());

        assert_eq!(
            output,
            "## [1.2.0] - 2024-03-01\n\n### Added\n\n- support X\n\n### Fixed\n\n- bug Y\n\n"
        );
    }

    #[test]
    fn test_format_one_bullet_per_item_in_order() {
        let entry = entry().with_items(ChangeKind::Changed, ["one", "two", "three"]);

        let output = MarkdownFormatter::new().format(&entry, &ChangelogConfig::default());

        assert_eq!(output.matches("\n- ").count(), 3);
        let one = output.find("- one").unwrap();
        let two = output.find("- two").unwrap();
        let three = output.find("- three").unwrap();
        assert!(one < two && two < three);
    }

    #[test]
    fn test_format_fixed_section_order() {
        let entry = entry()
            .with_items(ChangeKind::Removed, ["old api"])
            .with_items(ChangeKind::Fixed, ["crash"])
            .with_items(ChangeKind::Changed, ["defaults"])
            .with_items(ChangeKind::Added, ["flag"]);

        let output = MarkdownFormatter::new().format(&entry, &ChangelogConfig::default());

        let positions: Vec<usize> = ChangeKind::ALL
            .iter()
            .map(|kind| output.find(&format!("### {}", kind.title())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_format_omits_empty_sections() {
        let entry = entry()
            .with_items(ChangeKind::Added, ["feature"])
            .with_items(ChangeKind::Removed, Vec::<String>::new());

        let output = MarkdownFormatter::new().format(&entry, &ChangelogConfig::default());

        assert!(output.contains("### Added"));
        assert!(!output.contains("### Changed"));
        assert!(!output.contains("### Removed"));
    }

    #[test]
    fn test_format_header_only() {
        let output = MarkdownFormatter::new().format(&entry(), &ChangelogConfig::default());
        assert_eq!(output, "## [1.2.0] - 2024-03-01\n\n");
    }

    #[test]
    fn test_format_custom_header() {
        let config = ChangelogConfig {
            header: "# Release {version} ({date})".to_string(),
            ..ChangelogConfig::default()
        };

        let output = MarkdownFormatter::new().format(&entry(), &config);

        assert!(output.starts_with("# Release 1.2.0 (2024-03-01)\n"));
    }
}
