// css.rs - Pull image URLs out of a computed background-image value
//
// Handles url(x), url('x'), url("x"), comma-separated layers and
// gradients mixed in. "none" and empty values yield nothing.

pub fn background_urls(value: &str) -> Vec<String> {
    let mut urls = Vec::new();
    let mut rest = value;

    while let Some(start) = rest.find("url(") {
        let after = &rest[start + 4..];
        let Some(end) = close_paren(after) else { break };

        let url = unquote(after[..end].trim());
        if !url.is_empty() {
            urls.push(url.to_string());
        }
        rest = &after[end + 1..];
    }

    urls
}

/// Index of the ')' closing a url(, skipping parens inside quotes.
fn close_paren(s: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, ')') => return Some(i),
            _ => {}
        }
    }
    None
}

fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|s| s.strip_suffix(q)) {
            return inner;
        }
    }
    s
}
