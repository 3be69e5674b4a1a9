//! Error types for the navigation migration

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    /// The guard: the list literal to migrate is not in the file
    #[error("{list} not found")]
    OuterBlockNotFound { list: String },

    #[error("target entry '{name}' not found")]
    TargetNotFound { name: String },

    #[error("target entry '{name}' matched {count} times, expected exactly one")]
    AmbiguousTarget { name: String, count: usize },

    #[error("migration incomplete, refusing to write: {} skipped", .skipped.join(", "))]
    IncompleteMigration { skipped: Vec<String> },

    #[error(
        "unsupported file {}: expected a .{} file",
        .path.display(),
        .expected.join(" / .")
    )]
    UnsupportedFile {
        path: PathBuf,
        expected: Vec<String>,
    },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MigrationError {
    /// Whether the run ended before anything was touched because there was
    /// nothing to migrate
    pub fn is_nothing_to_migrate(&self) -> bool {
        matches!(self, MigrationError::OuterBlockNotFound { .. })
    }
}
