/// Utility functions for handling Telegram MarkdownV2 formatting
///
/// MarkdownV2 requires escaping of special characters to prevent formatting issues.
/// Escapes markdown special characters for MarkdownV2 parsing mode
///
/// # Example
/// ```
/// use slot_poll_bot::utils::markdown::escape_markdown;
///
/// let text = "Sync (team) 1.0!";
/// assert_eq!(escape_markdown(text), "Sync \\(team\\) 1\\.0\\!");
/// ```
pub fn escape_markdown(text: &str) -> String {
    const SPECIAL: &[char] = &[
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Wraps `text` in an inline code span; only `` ` `` and `\` need escaping inside.
pub fn inline_code(text: &str) -> String {
    let inner = text.replace('\\', "\\\\").replace('`', "\\`");
    format!("`{inner}`")
}
