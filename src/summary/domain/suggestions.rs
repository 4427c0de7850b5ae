//! Parsing of generated task suggestions.

use std::collections::HashSet;

/// Extracts task titles from generator output, one per line.
///
/// List markers (`-`, `*`, `•`, `1.`, `2)`) are stripped, including stacked
/// ones such as `- 1.`, and markdown bold is unwrapped. Blank lines,
/// duplicates and titles already present in `existing` are dropped, all
/// compared case-insensitively. At most `limit` titles are returned.
#[must_use]
pub fn parse_suggestions<'a>(
    raw: &str,
    existing: impl IntoIterator<Item = &'a str>,
    limit: usize,
) -> Vec<String> {
    let mut seen: HashSet<String> = existing.into_iter().map(str::to_lowercase).collect();
    raw.lines()
        .map(clean_title)
        .filter(|title| !title.is_empty())
        .filter(|title| seen.insert(title.to_lowercase()))
        .take(limit)
        .collect()
}

fn clean_title(line: &str) -> String {
    let mut rest = line.trim();
    while let Some(next) = strip_marker(rest) {
        rest = next.trim();
    }
    rest.replace("**", "").trim().to_owned()
}

fn strip_marker(text: &str) -> Option<&str> {
    if let Some(inner) = text.strip_prefix("**").and_then(|s| s.strip_suffix("**")) {
        return Some(inner);
    }
    if let Some(rest) = text.strip_prefix(['-', '*', '•']) {
        return Some(rest);
    }
    let digits = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(text.len(), |(index, _)| index);
    text.get(digits..)
        .filter(|_| digits > 0)
        .and_then(|rest| rest.strip_prefix(['.', ')']))
}
