//! HTML escaping for interpolated card text.

/// Escape text for placement inside an element body.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape text for placement inside a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    escape_html(s).replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Bait & Switch"</b>"#),
            "&lt;b&gt;&quot;Bait &amp; Switch&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_attr_handles_single_quotes() {
        assert_eq!(escape_attr("it's"), "it&#x27;s");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("Air Flight 87"), "Air Flight 87");
    }
}
