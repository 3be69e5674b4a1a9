use navsplice::{
    MigrateOptions, MigrationConfig, MigrationError, ReportFormat, migrate_file,
    report::{SUCCESS_MESSAGE, render_report},
    rewrite::Step,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/EnhancedNavigation.tsx");

fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test source");
    path
}

fn fixture_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_source(&dir, "EnhancedNavigation.tsx", FIXTURE);
    (dir, path)
}

#[cfg(test)]
mod write_tests {
    use super::*;

    #[test]
    fn test_migration_rewrites_file_in_place() {
        let (_dir, path) = fixture_file();

        let report = migrate_file(&path, &MigrationConfig::default(), &MigrateOptions::default())
            .expect("migration succeeds");

        assert!(report.written);
        assert!(report.is_complete());
        assert_eq!(report.bytes_before, FIXTURE.len());

        let migrated = fs::read_to_string(&path).unwrap();
        assert_eq!(migrated.len(), report.bytes_after);
        assert!(!migrated.contains("aiNavigation"));
        assert!(migrated.contains("badge: 'AI'"));

        let text = render_report(&report, ReportFormat::Text).unwrap();
        assert!(text.contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_second_migration_leaves_file_alone() {
        let (_dir, path) = fixture_file();
        let config = MigrationConfig::default();

        migrate_file(&path, &config, &MigrateOptions::default()).unwrap();
        let after_first = fs::read_to_string(&path).unwrap();

        let error = migrate_file(&path, &config, &MigrateOptions::default()).unwrap_err();
        assert!(error.is_nothing_to_migrate());
        assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    }

    #[test]
    fn test_partial_migration_is_written_and_reported() {
        let source = FIXTURE.replace(
            "               /* AI-Enhanced Features */",
            "            {/* AI-Enhanced Features */}",
        );
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "Nav.tsx", &source);

        let report =
            migrate_file(&path, &MigrationConfig::default(), &MigrateOptions::default()).unwrap();

        assert!(report.written);
        assert_eq!(report.skipped_steps(), vec![Step::RemoveObsoleteBlock]);
        let text = render_report(&report, ReportFormat::Text).unwrap();
        assert!(!text.contains(SUCCESS_MESSAGE));
        assert!(text.contains("skipped: remove obsolete block"));
    }

    #[test]
    fn test_missing_source_entry_is_not_reported_as_success() {
        let source = FIXTURE.replace("name: 'AI-Powered Activities'", "name: 'AI Activities'");
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "Nav.tsx", &source);

        let report =
            migrate_file(&path, &MigrationConfig::default(), &MigrateOptions::default()).unwrap();

        assert!(report.written);
        assert!(!report.is_complete());
        assert_eq!(report.skipped_steps(), vec![Step::ExtractChildren]);
        let text = render_report(&report, ReportFormat::Text).unwrap();
        assert!(!text.contains(SUCCESS_MESSAGE));
        assert!(text.contains("partial (1 of 2) - not found: AI-Powered Activities"));
    }
}

#[cfg(test)]
mod no_write_tests {
    use super::*;

    #[test]
    fn test_guard_does_not_write() {
        let dir = TempDir::new().unwrap();
        let source = "export const Nav = () => null;\n";
        let path = write_source(&dir, "Nav.tsx", source);

        let result = migrate_file(&path, &MigrationConfig::default(), &MigrateOptions::default());

        assert!(matches!(
            result,
            Err(MigrationError::OuterBlockNotFound { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), source);
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let (_dir, path) = fixture_file();
        let options = MigrateOptions {
            dry_run: true,
            ..MigrateOptions::default()
        };

        let report = migrate_file(&path, &MigrationConfig::default(), &options).unwrap();

        assert!(!report.written);
        assert!(report.dry_run);
        assert!(report.is_complete());
        assert_eq!(fs::read_to_string(&path).unwrap(), FIXTURE);
    }

    #[test]
    fn test_strict_refuses_partial_migration() {
        let source = FIXTURE.replace("\n    const aiNavigation", "\n  const aiNavigation");
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "Nav.tsx", &source);
        let options = MigrateOptions {
            strict: true,
            ..MigrateOptions::default()
        };

        let result = migrate_file(&path, &MigrationConfig::default(), &options);

        match result {
            Err(MigrationError::IncompleteMigration { skipped }) => {
                assert_eq!(skipped, vec!["remove declaration".to_string()]);
            }
            other => panic!("expected IncompleteMigration, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), source);
    }

    #[test]
    fn test_strict_refuses_missing_source_entry() {
        let source = FIXTURE.replace("name: 'AI-Powered Activities'", "name: 'AI Activities'");
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "Nav.tsx", &source);
        let options = MigrateOptions {
            strict: true,
            ..MigrateOptions::default()
        };

        let result = migrate_file(&path, &MigrationConfig::default(), &options);

        match result {
            Err(MigrationError::IncompleteMigration { skipped }) => {
                assert_eq!(skipped, vec!["extract children".to_string()]);
            }
            other => panic!("expected IncompleteMigration, got {other:?}"),
        }
        // The children of the unmatched entry are still in the file
        let untouched = fs::read_to_string(&path).unwrap();
        assert_eq!(untouched, source);
        assert!(untouched.contains("name: 'Shadow Dialogue'"));
    }

    #[test]
    fn test_ambiguous_target_does_not_write() {
        let source = FIXTURE.replace("name: 'Chapters'", "name: 'Toolkit'").replace(
            "description: 'Explore the alchemical journey'",
            "description: 'AI-powered tools and exercises'",
        );
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "Nav.tsx", &source);

        let result = migrate_file(&path, &MigrationConfig::default(), &MigrateOptions::default());

        assert!(matches!(
            result,
            Err(MigrationError::AmbiguousTarget { count: 2, .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), source);
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "report.docx", FIXTURE);

        let result = migrate_file(&path, &MigrationConfig::default(), &MigrateOptions::default());

        assert!(matches!(result, Err(MigrationError::UnsupportedFile { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), FIXTURE);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Missing.tsx");

        let result = migrate_file(&path, &MigrationConfig::default(), &MigrateOptions::default());

        match result {
            Err(MigrationError::Io(error)) => {
                assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected a NotFound I/O error, got {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_config_from_file_drives_migration() {
        let source = FIXTURE.replace("aiNavigation", "labsNavigation");
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "Nav.tsx", &source);
        let config_path = write_source(
            &dir,
            "migration.toml",
            "outer_list = \"labsNavigation\"\n\n[obsolete]\nend = \"{labsNavigation.map((item) => renderNavigationItem(item))}\\n                </nav>\\n              </div>\"\n\n[target]\nbadge = \"LAB\"\n",
        );

        let config = MigrationConfig::load(Some(config_path.as_path())).unwrap();
        let report = migrate_file(&path, &config, &MigrateOptions::default()).unwrap();

        assert!(report.is_complete());
        let migrated = fs::read_to_string(&path).unwrap();
        assert!(migrated.contains("badge: 'LAB'"));
        assert!(!migrated.contains("labsNavigation"));
    }
}
