//! Small helpers for assembling result text.

/// Join non-empty sentences with a single space.
///
/// Conditional clauses pass `""` when absent, which drops them without
/// leaving a double space behind.
pub(crate) fn join_sentences(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Bullet list under a heading, followed by a closing paragraph.
pub(crate) fn plan(heading: &str, items: &[&str], closing: &str) -> String {
    format!("{heading}\n\n{}\n\n{closing}", bullets(items))
}

pub(crate) fn bullets(items: &[&str]) -> String {
    items
        .iter()
        .map(|b| format!("• {b}"))
        .collect::<Vec<_>>()
        .join("\n")
}
