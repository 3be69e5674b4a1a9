//! File I/O operations and validation
//!
//! This module handles source file validation and the read-rewrite-write cycle.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::MigrationConfig;
use crate::error::MigrationError;

use super::models::{MigrateOptions, MigrationReport};
use super::pipeline::Rewriter;

/// Validates that the path is an existing regular file of an accepted type
pub(crate) fn validate_source_file(
    file_path: &Path,
    config: &MigrationConfig,
) -> Result<(), MigrationError> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    // A missing path surfaces as the underlying NotFound error
    let metadata = fs::metadata(file_path)?;

    if !metadata.is_file() || !config.accepts_extension(extension) {
        return Err(MigrationError::UnsupportedFile {
            path: file_path.to_path_buf(),
            expected: config.extensions.clone(),
        });
    }

    Ok(())
}

pub fn read_source(file_path: &Path) -> Result<String, MigrationError> {
    Ok(fs::read_to_string(file_path)?)
}

pub fn write_source(file_path: &Path, text: &str) -> Result<(), MigrationError> {
    Ok(fs::write(file_path, text)?)
}

/// Run the migration over one file and write it back in place
///
/// The file is only written when the rewrite succeeded, `dry_run` is off and,
/// with `strict`, every step applied.
pub fn migrate_file(
    file_path: &Path,
    config: &MigrationConfig,
    options: &MigrateOptions,
) -> Result<MigrationReport, MigrationError> {
    validate_source_file(file_path, config)?;

    let source = read_source(file_path)?;
    let rewriter = Rewriter::new(config.clone())?;
    let rewrite = rewriter.rewrite(&source)?;

    if options.strict {
        let skipped = rewrite.skipped_steps();
        if !skipped.is_empty() {
            return Err(MigrationError::IncompleteMigration {
                skipped: skipped.iter().map(|step| step.to_string()).collect(),
            });
        }
    }

    let written = !options.dry_run;
    if written {
        write_source(file_path, &rewrite.text)?;
        info!(path = %file_path.display(), bytes = rewrite.text.len(), "wrote migrated file");
    }

    Ok(MigrationReport {
        file_path: file_path.display().to_string(),
        steps: rewrite.steps,
        written,
        dry_run: options.dry_run,
        bytes_before: source.len(),
        bytes_after: rewrite.text.len(),
    })
}
