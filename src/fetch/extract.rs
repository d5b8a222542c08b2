//! Minimal HTML-to-text extraction.
//!
//! Drops non-content elements (scripts, styles, navigation chrome), strips
//! the remaining tags, decodes the common entities, and collapses
//! whitespace. Enough for article bodies; anything fancier belongs behind
//! the [`ContentFetcher`](super::ContentFetcher) seam.

/// Elements whose entire content is discarded, not just the tags.
const SKIP_ELEMENTS: &[&str] = &["script", "style", "nav", "header", "footer", "aside"];

/// Extracts readable text from an HTML document.
///
/// Returns an empty string when the document has no text content.
pub fn extract_text(html: &str) -> String {
    let stripped = strip_skip_elements(html);
    let text = strip_tags(&stripped);
    let text = decode_entities(&text);
    collapse_whitespace(&text)
}

fn strip_skip_elements(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    // Byte offsets into `lower` must line up with `html`, so only ASCII
    // case folding is safe here.
    let lower = html.to_ascii_lowercase();
    let mut pos = 0;

    'outer: while pos < html.len() {
        for element in SKIP_ELEMENTS {
            let open = format!("<{element}");
            if lower[pos..].starts_with(&open) {
                let close = format!("</{element}");
                match lower[pos..].find(&close) {
                    Some(rel) => {
                        let after = pos + rel + close.len();
                        // Skip to the '>' terminating the close tag.
                        pos = match lower[after..].find('>') {
                            Some(gt) => after + gt + 1,
                            None => html.len(),
                        };
                    }
                    None => pos = html.len(),
                }
                continue 'outer;
            }
        }

        // Advance one character, preserving it.
        let ch = html[pos..].chars().next().unwrap_or('\0');
        if ch == '\0' {
            break;
        }
        out.push(ch);
        pos += ch.len_utf8();
    }

    out
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                // Tags separate words.
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }

    out
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::extract_text;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        let html = "<html><body><p>GLP-1   agonists</p>\n<p>reduce appetite.</p></body></html>";
        assert_eq!(extract_text(html), "GLP-1 agonists reduce appetite.");
    }

    #[test]
    fn drops_script_and_style_content() {
        let html = "<body><script>var x = 1;</script><style>p{}</style><p>Kept text.</p></body>";
        assert_eq!(extract_text(html), "Kept text.");
    }

    #[test]
    fn drops_navigation_chrome() {
        let html = "<body><nav>Home | About</nav><header>Site</header>\
                    <p>Article body.</p><footer>Copyright</footer></body>";
        assert_eq!(extract_text(html), "Article body.");
    }

    #[test]
    fn decodes_common_entities() {
        let html = "<p>Fischer&nbsp;&amp;&nbsp;co say &quot;yes&quot;</p>";
        assert_eq!(extract_text(html), "Fischer & co say \"yes\"");
    }

    #[test]
    fn empty_document_yields_empty_string() {
        assert_eq!(extract_text("<html><body></body></html>"), "");
        assert_eq!(extract_text(""), "");
    }
}
