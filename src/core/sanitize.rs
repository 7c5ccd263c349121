// src/core/sanitize.rs

/// Collapse whitespace runs (including newlines from nested markup) to one space.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Concatenate an element's text nodes and normalize whitespace.
pub fn element_text(el: &scraper::ElementRef<'_>) -> String {
    let mut raw = s!();
    for t in el.text() {
        raw.push_str(t);
    }
    normalize_ws(&raw)
}
