//! folio-ssg - a static site generator for a personal academic portfolio
//!
//! The generator holds its page data as literal record tables and emits one
//! HTML document per record by substituting record fields into fixed
//! header, footer, and page skeletons. Regeneration fully overwrites the
//! emitted files, so a run is idempotent and a partial failure is repaired
//! by simply running again.

pub mod config;
pub mod data;
pub mod record;
pub mod render;

use std::collections::HashSet;
use std::path::PathBuf;

use eyre::{Result, WrapErr};
use tracing::info;

use crate::config::AppConfig;
use crate::record::{PageGroup, RecordError};

/// Page counts per group for one generation run.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    pub groups: Vec<GroupStats>,
}

#[derive(Debug, Clone)]
pub struct GroupStats {
    pub name: &'static str,
    pub pages: usize,
}

impl BuildStats {
    pub fn total_pages(&self) -> usize {
        self.groups.iter().map(|group| group.pages).sum()
    }
}

/// Main site builder struct
pub struct Site {
    pub output_dir: PathBuf,
    pub config: AppConfig,
    groups: Vec<PageGroup>,
}

impl Site {
    /// Create a new Site writing to the given output directory, populated
    /// with the built-in record tables.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            config: AppConfig::default(),
            groups: data::GROUPS.to_vec(),
        }
    }

    /// Set the full app configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the record groups. Used by tests and one-off builds.
    pub fn with_groups(mut self, groups: Vec<PageGroup>) -> Self {
        self.groups = groups;
        self
    }

    /// Validate every record without writing anything.
    ///
    /// Catches the authoring defects the record types cannot rule out:
    /// empty fields and output file names claimed by more than one record.
    pub fn check(&self) -> Result<(), RecordError> {
        let mut seen = HashSet::new();
        for group in &self.groups {
            for record in group.records {
                record.validate()?;
                if !seen.insert(record.file) {
                    return Err(RecordError::DuplicateFile { file: record.file });
                }
            }
        }
        Ok(())
    }

    /// Generate all pages.
    ///
    /// Records are processed strictly in table order. Validation runs first,
    /// so a malformed record aborts the run before the first write; a write
    /// failure partway through leaves earlier files in place.
    pub fn build(&self) -> Result<BuildStats> {
        self.check()?;

        std::fs::create_dir_all(&self.output_dir).wrap_err_with(|| {
            format!(
                "failed to create output directory {}",
                self.output_dir.display()
            )
        })?;

        // The header is shared verbatim by every page.
        let header = render::header(&self.config.site);

        let mut stats = BuildStats::default();
        for group in &self.groups {
            let footer = render::footer(&self.config.site, group);

            for record in group.records {
                let html = render::page(record, group, &header, &footer);
                let path = self.output_dir.join(record.file);
                std::fs::write(&path, html)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                info!("Generated: {}", path.display());
            }

            stats.groups.push(GroupStats {
                name: group.name,
                pages: group.records.len(),
            });
        }

        Ok(stats)
    }
}

/// Initialize tracing with the specified verbosity level.
///
/// 0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
