/// Escapes text for interpolation into an HTML fragment that bypasses the
/// view macro, such as a map popup.
pub fn escape_html(text: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(
            escape_html(r#"<b>Tom & Jerry's "Diner"</b>"#),
            "&lt;b&gt;Tom &amp; Jerry&#39;s &quot;Diner&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Main St 4"), "Main St 4");
    }
}
