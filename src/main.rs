use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use navsplice::{
    MigrateOptions, MigrationConfig, ReportFormat, migrate_file, report::render_report,
};

#[derive(Parser)]
#[command(name = "navsplice")]
#[command(about = "Move nested navigation lists into a single entry of a UI source file")]
#[command(version)]
struct Cli {
    /// Source file to rewrite (defaults to the configured file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Configuration file (defaults to <config dir>/navsplice/migration.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run every step and report, without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Refuse to write unless every step applied
    #[arg(long)]
    strict: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,

    /// More log output on stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.init_config {
        match MigrationConfig::init_default()? {
            Some(path) => println!("Default configuration written to {}", path.display()),
            None => println!("No configuration directory available on this system"),
        }
        return Ok(());
    }

    let config = MigrationConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let file = cli.file.clone().unwrap_or_else(|| config.file.clone());

    let options = MigrateOptions {
        dry_run: cli.dry_run,
        strict: cli.strict,
    };

    match migrate_file(&file, &config, &options) {
        Ok(report) => {
            print!("{}", render_report(&report, cli.format)?);
            Ok(())
        }
        // Nothing to migrate: report and leave the file alone
        Err(error) if error.is_nothing_to_migrate() => {
            println!("{error}");
            Ok(())
        }
        Err(error) => {
            Err(error).with_context(|| format!("Failed to migrate {}", file.display()))
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("navsplice={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
