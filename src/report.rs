use anyhow::Result;
use std::fmt::Write;

use crate::{ReportFormat, rewrite::*};

pub const SUCCESS_MESSAGE: &str = "Navigation updated successfully!";

pub fn render_report(report: &MigrationReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => render_text(report),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_text(report: &MigrationReport) -> Result<String> {
    let mut output = String::new();

    for step in &report.steps {
        let status = match &step.outcome {
            StepOutcome::Applied { matches } => format!("applied ({matches})"),
            StepOutcome::Partial { matches, expected } => {
                format!("partial ({matches} of {expected})")
            }
            StepOutcome::NotApplicable => "skipped (no match)".to_string(),
            StepOutcome::Ambiguous { matches } => format!("skipped ({matches} matches)"),
        };
        write!(output, "  {:<24}{status}", step.step.label())?;
        if let Some(detail) = &step.detail {
            write!(output, " - {detail}")?;
        }
        output.push('\n');
    }

    writeln!(
        output,
        "{}: {} -> {} bytes",
        report.file_path, report.bytes_before, report.bytes_after
    )?;

    let skipped = report.skipped_steps();
    let verb = if report.written {
        "updated"
    } else {
        "checked (dry run, not written)"
    };

    if skipped.is_empty() {
        if report.written {
            writeln!(output, "{SUCCESS_MESSAGE}")?;
        } else {
            writeln!(output, "Navigation {verb}")?;
        }
    } else {
        let names: Vec<_> = skipped.iter().map(|step| step.label()).collect();
        writeln!(
            output,
            "Navigation {verb} with {} step(s) skipped: {}",
            skipped.len(),
            names.join(", ")
        )?;
    }

    Ok(output)
}
