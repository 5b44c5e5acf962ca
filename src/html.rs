//! Minimal HTML text helpers for fields that expand into markup before they
//! reach the template.

/// Escape a plain-text value for use in HTML content or attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Expand a multi-paragraph text field into `<p>` blocks.
///
/// Blank lines separate paragraphs; single newlines become `<br>`. The text
/// is escaped, never treated as pre-rendered HTML.
pub(crate) fn paragraphs(text: &str) -> String {
    let mut out = String::new();
    for block in text.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        out.push_str("<p>");
        out.push_str(&escape(block).replace('\n', "<br>"));
        out.push_str("</p>");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_markup() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_passthrough() {
        assert_eq!(escape("Padaria do Zé"), "Padaria do Zé");
    }

    #[test]
    fn paragraphs_blank_line_split() {
        assert_eq!(
            paragraphs("first\n\nsecond"),
            "<p>first</p><p>second</p>"
        );
    }

    #[test]
    fn paragraphs_inner_newline() {
        assert_eq!(paragraphs("line one\nline two"), "<p>line one<br>line two</p>");
    }

    #[test]
    fn paragraphs_skip_empty_blocks() {
        assert_eq!(paragraphs("a\n\n \n\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn paragraphs_escapes() {
        assert_eq!(paragraphs("<script>"), "<p>&lt;script&gt;</p>");
    }
}
