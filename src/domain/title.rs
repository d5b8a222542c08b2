//! Article title derivation from fetched content.

/// Title used when the content yields nothing usable.
pub const UNTITLED_ARTICLE: &str = "Untitled Article";

/// Lines at or below this length are skipped as title candidates
/// (navigation crumbs, stray dates, section numbers).
const MIN_TITLE_LINE_LEN: usize = 10;

/// Derived titles are capped at this many characters.
const MAX_TITLE_LEN: usize = 200;

/// Derives a display title from extracted article content.
///
/// Takes the first line longer than 10 characters, truncated to 200
/// characters; falls back to the first 200 characters of the content, and
/// finally to [`UNTITLED_ARTICLE`].
pub fn derive_article_title(content: &str) -> String {
    for line in content.lines() {
        let line = line.trim();
        if line.len() > MIN_TITLE_LINE_LEN {
            return truncate_chars(line, MAX_TITLE_LEN);
        }
    }

    let fallback = truncate_chars(content, MAX_TITLE_LEN);
    let fallback = fallback.trim();
    if fallback.is_empty() {
        UNTITLED_ARTICLE.to_string()
    } else {
        fallback.to_string()
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
