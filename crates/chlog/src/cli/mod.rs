//! CLI definition and command handling

pub mod output;

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use chrono::NaiveDate;
use clap::Parser;
use tracing::{debug, info, warn};

use chlog_changelog::{append_to_file, tag_snippet, ChangeKind, ChangelogEntry, ChangelogRenderer};
use chlog_core::config::{load_config, load_config_or_default, Config, UNRELEASED};

/// chlog - Append release entries to a changelog
#[derive(Debug, Parser)]
#[command(name = "chlog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The new semantic version number such as 0.1.2
    #[arg(long, value_name = "VERSION")]
    pub semver: Option<String>,

    /// Items *added* in this release, e.g. --added 'first item' 'second item'
    #[arg(long, value_name = "ITEM", num_args = 0..)]
    pub added: Vec<String>,

    /// Items *changed* in this release, e.g. --changed 'first item' 'second item'
    #[arg(long, value_name = "ITEM", num_args = 0..)]
    pub changed: Vec<String>,

    /// Items *fixed* in this release, e.g. --fixed 'first item' 'second item'
    #[arg(long, value_name = "ITEM", num_args = 0..)]
    pub fixed: Vec<String>,

    /// Items *removed* in this release, e.g. --removed 'first item' 'second item'
    #[arg(long, value_name = "ITEM", num_args = 0..)]
    pub removed: Vec<String>,

    /// Release date in YYYY-MM-DD form (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Changelog file to append to (default: from config, else ./CHANGELOG.md)
    #[arg(long, value_name = "PATH")]
    pub changelog_file: Option<PathBuf>,

    /// Print a git tag and push command for this release
    #[arg(long, requires = "semver")]
    pub github_snippet: bool,

    /// Print the entry without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Configuration file (default: discovered from the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Log format
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,
}

/// Format of log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)
                .map_err(|e| anyhow!("failed to change directory to {}: {e}", dir.display()))?;
        }

        let cwd = std::env::current_dir()?;
        let config = self.load_config(&cwd)?;

        let entry = self.entry();
        if entry.is_empty() {
            warn!(version = %entry.version, "no changelog items supplied");
            if !self.quiet {
                output::empty_entry(&entry.version);
            }
        }

        let renderer = ChangelogRenderer::new(config.changelog.clone());
        let rendered = renderer.render(&entry);
        let path = self.changelog_path(&cwd, &config);

        if self.dry_run {
            info!(path = %path.display(), "dry run, changelog not written");
            print!("{rendered}");
        } else {
            info!(
                path = %path.display(),
                "writing the following changelog entry:\n{}",
                rendered.trim_end()
            );
            append_to_file(&path, &rendered)?;

            if !self.quiet {
                output::entry_written(&entry.version, &path);
            }
        }

        if self.github_snippet {
            let tag = config.snippet.tag_name(&entry.version);
            info!(tag = %tag, "printing tag snippet, it is not executed");
            if !self.quiet {
                output::snippet_intro(&tag);
            }
            println!("{}", tag_snippet(&tag, &rendered));
        }

        Ok(())
    }

    fn load_config(&self, cwd: &Path) -> anyhow::Result<Config> {
        if let Some(path) = &self.config {
            return Ok(load_config(path)?);
        }

        let (config, path) = load_config_or_default(cwd)?;
        match path {
            Some(path) => debug!(path = %path.display(), "using config file"),
            None => debug!("using default configuration"),
        }
        Ok(config)
    }

    /// Build the entry from the supplied flags
    fn entry(&self) -> ChangelogEntry {
        let version = self.semver.as_deref().unwrap_or(UNRELEASED);
        let mut entry = ChangelogEntry::new(version);
        if let Some(date) = self.date {
            entry = entry.with_date(date);
        }

        for kind in ChangeKind::ALL {
            let items = self.items(kind);
            debug!(%kind, count = items.len(), "collected changelog items");
            entry.add_items(kind, items.iter().cloned());
        }
        entry
    }

    fn items(&self, kind: ChangeKind) -> &[String] {
        match kind {
            ChangeKind::Added => &self.added,
            ChangeKind::Changed => &self.changed,
            ChangeKind::Fixed => &self.fixed,
            ChangeKind::Removed => &self.removed,
        }
    }

    fn changelog_path(&self, cwd: &Path, config: &Config) -> PathBuf {
        let file = self
            .changelog_file
            .as_ref()
            .unwrap_or(&config.changelog.file);
        cwd.join(file)
    }
}
