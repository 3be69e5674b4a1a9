//! Regex construction from a `MigrationConfig`
//!
//! Configured names are always escaped, so labels such as `AI-Powered Activities`
//! or the `{aiNavigation.map(...)}` bound are matched literally.

use regex::{Regex, escape};

use crate::config::MigrationConfig;

#[derive(Debug, Clone)]
pub(crate) struct CompiledPatterns {
    /// `const <list>: <type>[] = [ ... ];`, group 1 is the list body
    pub outer_block: Regex,
    /// One per configured source, in order; group 1 is the children body
    pub sources: Vec<(String, Regex)>,
    /// A single `{ ... }` entry carrying both the target name and description
    pub target: Regex,
    pub obsolete_block: Regex,
    /// Same declaration as `outer_block`, anchored on its own line
    pub declaration: Regex,
}

impl CompiledPatterns {
    pub(crate) fn compile(config: &MigrationConfig) -> Result<Self, regex::Error> {
        let declaration_head = format!(
            r"const {}: {}\[\] = \[",
            escape(&config.outer_list),
            escape(&config.item_type)
        );

        let outer_block = Regex::new(&format!(r"{declaration_head}(?s:(.*?))\];"))?;

        let sources = config
            .sources
            .iter()
            .map(|label| {
                let pattern = format!(r"(?s)name: '{}'.*?children: \[(.*?)\]", escape(label));
                Regex::new(&pattern).map(|regex| (label.clone(), regex))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let target = Regex::new(&format!(
            r"\{{[^}}]*name: '{}'[^}}]*description: '{}'[^}}]*\}}",
            escape(&config.target.name),
            escape(&config.target.description)
        ))?;

        let obsolete_block = Regex::new(&format!(
            r"{}(?s:.*?){}",
            escape(&config.obsolete.start),
            escape(&config.obsolete.end)
        ))?;

        let declaration = Regex::new(&format!(
            r"\n{}{declaration_head}(?s:.*?)\];",
            escape(&config.declaration_indent)
        ))?;

        Ok(Self {
            outer_block,
            sources,
            target,
            obsolete_block,
            declaration,
        })
    }
}
