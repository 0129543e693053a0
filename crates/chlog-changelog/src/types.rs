//! Changelog types

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Local, NaiveDate};

/// Kind of change recorded in a changelog entry.
///
/// Variant order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeKind {
    /// New functionality
    Added,
    /// Changes to existing functionality
    Changed,
    /// Bug fixes
    Fixed,
    /// Removed functionality
    Removed,
}

impl ChangeKind {
    /// All kinds, in output order
    pub const ALL: [ChangeKind; 4] = [Self::Added, Self::Changed, Self::Fixed, Self::Removed];

    /// Section heading for this kind
    pub fn title(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
            Self::Removed => "Removed",
        }
    }

    /// Lowercase name, as used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Changed => "changed",
            Self::Fixed => "fixed",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A changelog entry for a version
#[derive(Debug, Clone)]
pub struct ChangelogEntry {
    /// Version string, not validated
    pub version: String,
    /// Release date
    pub date: NaiveDate,
    /// Items per kind, iterated in `ChangeKind` order
    pub sections: BTreeMap<ChangeKind, Vec<String>>,
}

impl ChangelogEntry {
    /// Create a new entry dated today.
    ///
    /// The date is read from the local clock on every call.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: Local::now().date_naive(),
            sections: BTreeMap::new(),
        }
    }

    /// Set the date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Append items under a kind, keeping their order
    pub fn add_items<I, S>(&mut self, kind: ChangeKind, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections
            .entry(kind)
            .or_default()
            .extend(items.into_iter().map(Into::into));
    }

    /// Builder form of [`add_items`](Self::add_items)
    pub fn with_items<I, S>(mut self, kind: ChangeKind, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_items(kind, items);
        self
    }

    /// Non-empty sections in output order
    pub fn sections(&self) -> impl Iterator<Item = (ChangeKind, &[String])> {
        self.sections
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(kind, items)| (*kind, items.as_slice()))
    }

    /// ISO-8601 calendar date
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Check if entry has any items
    pub fn is_empty(&self) -> bool {
        self.sections().next().is_none()
    }
}
