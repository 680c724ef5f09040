//! HTML escaping
//!
//! All text content and attribute values derived from field names, keys or
//! values pass through here before insertion. Untrusted record content must
//! never produce unescaped markup.
//!
//! Escaped characters:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

/// Escape HTML special characters in text content.
///
/// # Examples
///
/// ```
/// use vitrine_render::escape::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("A & B"), "A &amp; B");
/// assert_eq!(escape_html(r#"He said "hi""#), "He said &quot;hi&quot;");
/// ```
pub fn escape_html(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Escape a string for use inside a double-quoted HTML attribute.
pub fn escape_attr(s: &str) -> String {
	escape_html(s)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_html() {
		assert_eq!(
			escape_html("<script>alert('XSS')</script>"),
			"&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
		);
		assert_eq!(escape_html("Hello & goodbye"), "Hello &amp; goodbye");
		assert_eq!(escape_html("normal text"), "normal text");
	}

	#[test]
	fn test_ampersand_is_escaped_first() {
		// Escaping must not double-process entities it just produced
		assert_eq!(escape_html("&lt;"), "&amp;lt;");
	}

	#[test]
	fn test_escape_attr_quotes() {
		assert_eq!(
			escape_attr(r#"value with "quotes""#),
			"value with &quot;quotes&quot;"
		);
	}
}
