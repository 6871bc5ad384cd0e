//! HTML escaping
//!
//! Every value interpolated into a server-rendered page passes through
//! [`escape`]. Provider-supplied profile data is untrusted.

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape(r#"<img src="x" onerror='y'>"#),
            "&lt;img src=&quot;x&quot; onerror=&#x27;y&#x27;&gt;"
        );
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape("Ada Lovelace"), "Ada Lovelace");
        assert_eq!(escape("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape(""), "");
    }
}
