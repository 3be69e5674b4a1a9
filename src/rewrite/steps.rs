//! The individual transformation steps
//!
//! Each step works on plain text and reports what it did; none of them
//! understands the structure of the code it edits.

use regex::Regex;

use crate::config::TargetConfig;

use super::models::StepOutcome;

/// Body of the outer list literal, or `None` when the declaration is absent
pub(crate) fn locate_outer_block<'a>(text: &'a str, pattern: &Regex) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|body| body.as_str())
}

/// Children bodies of the configured sources that are present, in source
/// order, plus the labels that were not found
pub(crate) fn extract_children<'a>(
    outer_block: &'a str,
    sources: &[(String, Regex)],
) -> (Vec<&'a str>, Vec<String>) {
    let mut fragments = Vec::new();
    let mut missing = Vec::new();

    for (label, pattern) in sources {
        match pattern.captures(outer_block).and_then(|c| c.get(1)) {
            Some(children) => fragments.push(children.as_str()),
            None => missing.push(label.clone()),
        }
    }

    (fragments, missing)
}

pub(crate) fn combine_fragments(fragments: &[&str], separator: &str) -> String {
    fragments.join(separator)
}

/// Drop the trailing close of an object entry: whitespace, then braces, then
/// commas, then whitespace again
pub(crate) fn strip_entry_close(entry: &str) -> &str {
    entry
        .trim_end()
        .trim_end_matches('}')
        .trim_end_matches(',')
        .trim_end()
}

/// The target entry re-emitted with the badge fields and the combined children
pub(crate) fn build_spliced_entry(entry: &str, children: &str, target: &TargetConfig) -> String {
    let indent = &target.field_indent;
    format!(
        "{head},\n{indent}isNew: {is_new},\n{indent}badge: '{badge}',\n{indent}children: [\n{children}\n{indent}]\n{close}}}",
        head = strip_entry_close(entry),
        is_new = target.is_new,
        badge = target.badge,
        close = target.close_indent,
    )
}

/// Rewrite the single span matched by `pattern`
///
/// Returns the number of matches when it is not exactly one; the text is then
/// left alone.
pub(crate) fn splice_target(
    text: &str,
    pattern: &Regex,
    children: &str,
    target: &TargetConfig,
) -> Result<String, usize> {
    let matches: Vec<_> = pattern.find_iter(text).collect();
    let [entry] = matches.as_slice() else {
        return Err(matches.len());
    };

    let mut result = String::with_capacity(text.len() + children.len() + 128);
    result.push_str(&text[..entry.start()]);
    result.push_str(&build_spliced_entry(entry.as_str(), children, target));
    result.push_str(&text[entry.end()..]);
    Ok(result)
}

/// Delete the span matched by `pattern` when there is exactly one
pub(crate) fn remove_unique(text: &str, pattern: &Regex) -> (String, StepOutcome) {
    let spans: Vec<_> = pattern.find_iter(text).map(|m| m.range()).collect();

    match spans.as_slice() {
        [] => (text.to_string(), StepOutcome::NotApplicable),
        [span] => {
            let mut result = String::with_capacity(text.len() - span.len());
            result.push_str(&text[..span.start]);
            result.push_str(&text[span.end..]);
            (result, StepOutcome::Applied { matches: 1 })
        }
        _ => (
            text.to_string(),
            StepOutcome::Ambiguous {
                matches: spans.len(),
            },
        ),
    }
}
