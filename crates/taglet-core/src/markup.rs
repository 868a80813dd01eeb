//! Markup strings
//!
//! [`Markup`] marks a string as ready to embed in an HTML document. Every
//! render operation returns one, and element content is stored as one.
//! Converting a `&str` or `String` into `Markup` trusts the text as-is; use
//! [`Markup::escape`] for text that comes from untrusted input.
//!
//! # Examples
//!
//! ```
//! use taglet_core::Markup;
//!
//! let mut page = Markup::raw("<h1>Title</h1>");
//! page += Markup::escape("Tom & Jerry");
//! assert_eq!(page.as_str(), "<h1>Title</h1>Tom &amp; Jerry");
//! ```

use crate::escape::escape;
use std::fmt;
use std::ops::{Add, AddAssign};

/// A string of HTML that is ready to be embedded as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Markup(String);

impl Markup {
	/// Creates empty markup.
	pub fn new() -> Self {
		Self(String::new())
	}

	/// Wraps already-safe HTML without modification.
	pub fn raw(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// Escapes untrusted text so it renders literally.
	///
	/// ```
	/// use taglet_core::Markup;
	///
	/// assert_eq!(Markup::escape("<b>").as_str(), "&lt;b&gt;");
	/// ```
	pub fn escape(text: &str) -> Self {
		Self(escape(text).into_owned())
	}

	/// Concatenates markup fragments in order.
	pub fn concat<I>(parts: I) -> Self
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let mut out = String::new();
		for part in parts {
			out.push_str(part.as_ref());
		}
		Self(out)
	}

	/// Returns this markup repeated `n` times.
	pub fn repeat(&self, n: usize) -> Self {
		Self(self.0.repeat(n))
	}

	/// Appends another fragment.
	pub fn push(&mut self, other: impl AsRef<str>) {
		self.0.push_str(other.as_ref());
	}

	/// Returns the markup as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the markup and returns the underlying string.
	pub fn into_string(self) -> String {
		self.0
	}

	/// Returns `true` if the markup is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the length in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Markup {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<String> for Markup {
	fn from(html: String) -> Self {
		Self(html)
	}
}

impl From<&str> for Markup {
	fn from(html: &str) -> Self {
		Self(html.to_string())
	}
}

impl From<&String> for Markup {
	fn from(html: &String) -> Self {
		Self(html.clone())
	}
}

impl From<Markup> for String {
	fn from(markup: Markup) -> Self {
		markup.0
	}
}

impl PartialEq<str> for Markup {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for Markup {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl PartialEq<String> for Markup {
	fn eq(&self, other: &String) -> bool {
		&self.0 == other
	}
}

impl<T: AsRef<str>> Add<T> for Markup {
	type Output = Markup;

	fn add(mut self, rhs: T) -> Self::Output {
		self.push(rhs);
		self
	}
}

impl<T: AsRef<str>> AddAssign<T> for Markup {
	fn add_assign(&mut self, rhs: T) {
		self.push(rhs);
	}
}

impl FromIterator<Markup> for Markup {
	fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
		Self::concat(iter)
	}
}

impl Extend<Markup> for Markup {
	fn extend<I: IntoIterator<Item = Markup>>(&mut self, iter: I) {
		for part in iter {
			self.push(part);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_raw_is_untouched() {
		let markup = Markup::raw("<p>a & b</p>");
		assert_eq!(markup, "<p>a & b</p>");
	}

	#[rstest]
	fn test_escape_untrusted_text() {
		let markup = Markup::escape("<script>alert('x')</script>");
		assert_eq!(
			markup,
			"&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
		);
	}

	#[rstest]
	fn test_add_and_add_assign() {
		let mut markup = Markup::raw("<b>") + "bold" + Markup::raw("</b>");
		markup += "<br>";
		assert_eq!(markup, "<b>bold</b><br>");
	}

	#[rstest]
	fn test_collect_concatenates_in_order() {
		let items = ["one", "two", "three"]
			.into_iter()
			.map(Markup::raw)
			.collect::<Markup>();
		assert_eq!(items, "onetwothree");
	}

	#[rstest]
	#[case(0, "")]
	#[case(1, "<br>")]
	#[case(3, "<br><br><br>")]
	fn test_repeat(#[case] n: usize, #[case] expected: &str) {
		assert_eq!(Markup::raw("<br>").repeat(n), expected);
	}

	#[rstest]
	fn test_display_matches_as_str() {
		let markup = Markup::raw("<i></i>");
		assert_eq!(markup.to_string(), markup.as_str());
		assert_eq!(markup.len(), 7);
		assert!(!markup.is_empty());
		assert!(Markup::new().is_empty());
	}
}
