//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Collapse runs of whitespace into single spaces
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `s` to at most `length` characters on a word boundary, then append
/// `omission`. Strings that already fit are returned unchanged.
///
/// # Examples
/// ```ignore
/// prune("Hello wonderful world", 12, "…") // -> "Hello…"
/// ```
pub fn prune(s: &str, length: usize, omission: &str) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }

    // Keep one extra char so a word ending exactly at `length` survives.
    let head: String = s.chars().take(length + 1).collect();
    let cut = match head.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => &head[..pos],
        _ => {
            let end = head
                .char_indices()
                .nth(length)
                .map(|(i, _)| i)
                .unwrap_or(head.len());
            &head[..end]
        }
    };

    let cut = cut.trim_end_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation());
    format!("{}{}", cut, omission)
}
