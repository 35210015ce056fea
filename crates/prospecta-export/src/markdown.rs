//! Best-effort Markdown cleanup for plain-paragraph rendering.
//!
//! Lossy on purpose: heading markers and emphasis asterisks are dropped,
//! everything else is kept verbatim.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+\s*").expect("valid heading regex"));

/// Strip line-leading `#` runs (and the whitespace after them), every `*`,
/// and surrounding whitespace.
///
/// A single pass can expose new markers (`*# x` becomes `# x`), so passes
/// repeat until the text is stable. The result is therefore idempotent.
pub fn normalize(text: &str) -> String {
    let mut current = strip_once(text);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    let without_headings = HEADING_MARKER.replace_all(text, "");
    without_headings.replace('*', "").trim().to_string()
}
