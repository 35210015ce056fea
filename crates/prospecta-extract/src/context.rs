//! Request context assembled from extracted upload text.
//!
//! Each piece is appended followed by a newline, in upload order, so a
//! request with only unreadable or empty files still yields newlines and
//! nothing else.

/// Concatenate extracted texts, each followed by `\n`.
pub fn build_context<I, S>(texts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut context = String::new();
    for text in texts {
        context.push_str(text.as_ref());
        context.push('\n');
    }
    context
}

/// Whether the context carries anything besides whitespace.
pub fn has_usable_text(context: &str) -> bool {
    !context.trim().is_empty()
}
