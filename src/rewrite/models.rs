//! Core data structures for describing a migration run
//!
//! The document text itself is a plain `String`; these types record what
//! each step did to it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The transformation steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    LocateOuterBlock,
    ExtractChildren,
    CombineFragments,
    SpliceTarget,
    RemoveObsoleteBlock,
    RemoveDeclaration,
}

impl Step {
    pub fn label(self) -> &'static str {
        match self {
            Step::LocateOuterBlock => "locate outer block",
            Step::ExtractChildren => "extract children",
            Step::CombineFragments => "combine fragments",
            Step::SpliceTarget => "splice target",
            Step::RemoveObsoleteBlock => "remove obsolete block",
            Step::RemoveDeclaration => "remove declaration",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Applied { matches: usize },
    /// Some of the expected spans matched; the rest are lost with the step
    Partial { matches: usize, expected: usize },
    /// Nothing matched, the buffer is unchanged
    NotApplicable,
    /// Several spans matched where one was expected, the buffer is unchanged
    Ambiguous { matches: usize },
}

impl StepOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, StepOutcome::Applied { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub step: Step,
    pub outcome: StepOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StepReport {
    pub fn new(step: Step, outcome: StepOutcome) -> Self {
        Self {
            step,
            outcome,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Result of running the steps over a buffer, before anything is written
#[derive(Debug, Clone)]
pub struct Rewrite {
    pub text: String,
    /// The extracted children joined with the configured separator
    pub combined_children: String,
    pub steps: Vec<StepReport>,
}

impl Rewrite {
    pub fn skipped_steps(&self) -> Vec<Step> {
        skipped_steps(&self.steps)
    }
}

/// Steps whose outcome is anything but fully applied, in order
pub fn skipped_steps(steps: &[StepReport]) -> Vec<Step> {
    steps
        .iter()
        .filter(|report| !report.outcome.is_applied())
        .map(|report| report.step)
        .collect()
}

/// Summary of a migration over one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationReport {
    pub file_path: String,
    pub steps: Vec<StepReport>,
    pub written: bool,
    pub dry_run: bool,
    pub bytes_before: usize,
    pub bytes_after: usize,
}

impl MigrationReport {
    /// True when every step applied
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|report| report.outcome.is_applied())
    }

    pub fn skipped_steps(&self) -> Vec<Step> {
        skipped_steps(&self.steps)
    }
}

/// Options for `migrate_file`
#[derive(Debug, Clone, Default)]
pub struct MigrateOptions {
    /// Run every step but leave the file alone
    pub dry_run: bool,
    /// Refuse to write unless every step applied
    pub strict: bool,
}
