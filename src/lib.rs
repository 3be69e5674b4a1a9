//! navsplice: moves nested navigation lists between entries of a UI source file
//!
//! This library locates a navigation list literal in a TSX component, splices
//! the children of selected entries into another entry and removes the list
//! and the markup that rendered it. All edits are regex-based text rewrites.

pub mod config;
pub mod error;
pub mod report;
pub mod rewrite;

/// Report output options
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One line per step
    #[default]
    Text,
    Json,
}

// Re-export commonly used types
pub use config::MigrationConfig;
pub use error::MigrationError;
pub use rewrite::{MigrateOptions, MigrationReport, Rewriter, migrate_file};
