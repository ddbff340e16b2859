//! Minimal HTML rendering.
//!
//! Components write markup into a shared `String` buffer. All text taken
//! from the request goes through [`escape`] before it lands in the buffer.

use std::borrow::Cow;

/// A component that renders to HTML.
pub trait Render {
    fn render(&self, out: &mut String);

    fn to_html(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&'  => escaped.push_str("&amp;"),
            '<'  => escaped.push_str("&lt;"),
            '>'  => escaped.push_str("&gt;"),
            '"'  => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c    => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape("apple"), Cow::Borrowed("apple")));
    }

    #[test]
    fn markup_characters_are_replaced() {
        assert_eq!(
            escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
