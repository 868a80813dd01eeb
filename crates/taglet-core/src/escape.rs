//! HTML escaping helpers
//!
//! Rendering never escapes on its own. These helpers are for callers that
//! embed untrusted text, and for [`EscapePolicy::AttributeValues`].
//!
//! [`EscapePolicy::AttributeValues`]: crate::options::EscapePolicy::AttributeValues

use std::borrow::Cow;

/// Escape HTML special characters
///
/// Borrows the input when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use taglet_core::escape::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
	if !text.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(text);
	}
	let mut escaped = String::with_capacity(text.len() + 8);
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(ch),
		}
	}
	Cow::Owned(escaped)
}

/// Escape attribute value for use in HTML
///
/// Same as [`escape`], and also encodes line breaks and tabs so the value
/// survives attribute normalization.
///
/// # Examples
///
/// ```
/// use taglet_core::escape::escape_attr;
///
/// assert_eq!(escape_attr("value"), "value");
/// assert_eq!(escape_attr("value with \"quotes\""),
///            "value with &quot;quotes&quot;");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// assert_eq!(escape_attr("tab\there"), "tab&#9;here");
/// ```
pub fn escape_attr(text: &str) -> Cow<'_, str> {
	if !text.contains(['&', '<', '>', '"', '\'', '\n', '\r', '\t']) {
		return Cow::Borrowed(text);
	}
	let mut escaped = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			'\n' => escaped.push_str("&#10;"),
			'\r' => escaped.push_str("&#13;"),
			'\t' => escaped.push_str("&#9;"),
			_ => escaped.push(ch),
		}
	}
	Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("plain", "plain")]
	#[case("a & b", "a &amp; b")]
	#[case("<div>", "&lt;div&gt;")]
	#[case("say \"hi\"", "say &quot;hi&quot;")]
	#[case("it's", "it&#x27;s")]
	#[case("", "")]
	fn test_escape(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape(input), expected);
	}

	#[rstest]
	fn test_escape_borrows_clean_input() {
		assert!(matches!(escape("nothing to do"), Cow::Borrowed(_)));
		assert!(matches!(escape_attr("nothing to do"), Cow::Borrowed(_)));
	}

	#[rstest]
	#[case("a\r\nb", "a&#13;&#10;b")]
	#[case("x=\"1\" onload='y'", "x=&quot;1&quot; onload=&#x27;y&#x27;")]
	fn test_escape_attr(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_attr(input), expected);
	}

	#[rstest]
	fn test_escape_leaves_newlines_alone() {
		assert_eq!(escape("a\nb"), "a\nb");
	}
}
