//! Step orchestration
//!
//! `Rewriter::rewrite` runs every step over an in-memory buffer, in order:
//! 1. Locates the outer list declaration (the only hard guard)
//! 2. Extracts the children of each configured source entry
//! 3. Joins the extracted fragments
//! 4. Splices them into the single target entry
//! 5. Removes the rendering block tied to the outer list
//! 6. Removes the outer list declaration
//!
//! Nothing here touches the filesystem.

use tracing::{debug, warn};

use crate::config::MigrationConfig;
use crate::error::MigrationError;

use super::models::{Rewrite, Step, StepOutcome, StepReport};
use super::patterns::CompiledPatterns;
use super::steps::{
    combine_fragments, extract_children, locate_outer_block, remove_unique, splice_target,
};

#[derive(Debug, Clone)]
pub struct Rewriter {
    config: MigrationConfig,
    patterns: CompiledPatterns,
}

impl Rewriter {
    pub fn new(config: MigrationConfig) -> Result<Self, MigrationError> {
        let patterns = CompiledPatterns::compile(&config)?;
        Ok(Self { config, patterns })
    }

    pub fn rewrite(&self, source: &str) -> Result<Rewrite, MigrationError> {
        let mut steps = Vec::with_capacity(6);

        let Some(outer_block) = locate_outer_block(source, &self.patterns.outer_block) else {
            return Err(MigrationError::OuterBlockNotFound {
                list: self.config.outer_list.clone(),
            });
        };
        debug!(list = %self.config.outer_list, bytes = outer_block.len(), "located outer block");
        steps.push(StepReport::new(
            Step::LocateOuterBlock,
            StepOutcome::Applied { matches: 1 },
        ));

        let (fragments, missing) = extract_children(outer_block, &self.patterns.sources);
        let extract_outcome = match (fragments.len(), missing.len()) {
            (0, _) => StepOutcome::NotApplicable,
            (matches, 0) => StepOutcome::Applied { matches },
            (matches, _) => StepOutcome::Partial {
                matches,
                expected: self.patterns.sources.len(),
            },
        };
        let mut extract = StepReport::new(Step::ExtractChildren, extract_outcome);
        if !missing.is_empty() {
            debug!(?missing, "source entries without children");
            extract = extract.with_detail(format!("not found: {}", missing.join(", ")));
        }
        steps.push(extract);

        let combined_children = combine_fragments(&fragments, &self.config.separator);
        steps.push(StepReport::new(
            Step::CombineFragments,
            outcome_for(fragments.len()),
        ));

        let text = splice_target(
            source,
            &self.patterns.target,
            &combined_children,
            &self.config.target,
        )
        .map_err(|count| match count {
            0 => MigrationError::TargetNotFound {
                name: self.config.target.name.clone(),
            },
            count => MigrationError::AmbiguousTarget {
                name: self.config.target.name.clone(),
                count,
            },
        })?;
        debug!(entry = %self.config.target.name, "spliced children into target entry");
        steps.push(
            StepReport::new(Step::SpliceTarget, StepOutcome::Applied { matches: 1 })
                .with_detail(format!("into '{}'", self.config.target.name)),
        );

        let (text, outcome) = remove_unique(&text, &self.patterns.obsolete_block);
        steps.push(StepReport::new(Step::RemoveObsoleteBlock, outcome));

        let (text, outcome) = remove_unique(&text, &self.patterns.declaration);
        steps.push(StepReport::new(Step::RemoveDeclaration, outcome));

        for report in &steps {
            if !report.outcome.is_applied() {
                warn!(step = %report.step, outcome = ?report.outcome, "step did not apply");
            }
        }

        Ok(Rewrite {
            text,
            combined_children,
            steps,
        })
    }
}

fn outcome_for(matches: usize) -> StepOutcome {
    if matches == 0 {
        StepOutcome::NotApplicable
    } else {
        StepOutcome::Applied { matches }
    }
}
