//! HTML attribute map
//!
//! Serializes to the ` key="value" ...` fragment of an opening tag. The
//! `class` attribute has an append operation that joins class tokens with
//! a space instead of overwriting them.

use crate::escape::escape_attr;
use crate::options::{EscapePolicy, KeyOrder, RenderOptions};
use crate::props::Props;
use indexmap::IndexMap;
use std::fmt;

const CLASS: &str = "class";

/// Attribute name/value pairs of a single element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
	attributes: IndexMap<String, String>,
}

impl AttributeMap {
	/// Creates an empty attribute map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets one attribute, replacing any previous value (including `class`).
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.attributes.insert(name.into(), value.into());
	}

	/// Sets every attribute of `props`. `class` is overwritten, not joined.
	pub fn merge(&mut self, props: &Props) {
		for (name, value) in props {
			self.attributes.insert(name.clone(), value.clone());
		}
	}

	/// Appends class tokens to the `class` attribute.
	///
	/// Tokens are joined with single spaces and appended after any existing
	/// classes. Appending nothing leaves the map untouched: an element with
	/// no class does not gain an empty `class=""`.
	///
	/// # Examples
	///
	/// ```
	/// use taglet_core::AttributeMap;
	///
	/// let mut attrs = AttributeMap::new();
	/// attrs.append_class(["btn"]);
	/// attrs.append_class(["btn-primary", "wide"]);
	/// assert_eq!(attrs.get("class"), Some("btn btn-primary wide"));
	/// ```
	pub fn append_class<I, S>(&mut self, tokens: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let joined = tokens
			.into_iter()
			.map(|token| token.as_ref().to_owned())
			.collect::<Vec<_>>()
			.join(" ");
		if joined.is_empty() {
			return;
		}

		match self.attributes.get_mut(CLASS) {
			Some(existing) if !existing.is_empty() => {
				existing.push(' ');
				existing.push_str(&joined);
			}
			Some(existing) => *existing = joined,
			None => {
				self.attributes.insert(CLASS.to_string(), joined);
			}
		}
	}

	/// Removes an attribute, keeping the order of the rest.
	pub fn remove(&mut self, name: &str) -> Option<String> {
		self.attributes.shift_remove(name)
	}

	/// Returns the value of an attribute.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	/// Returns `true` if the attribute is set.
	pub fn contains(&self, name: &str) -> bool {
		self.attributes.contains_key(name)
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.attributes.len()
	}

	/// Returns `true` if no attribute is set.
	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
	}

	/// Iterates over attributes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attributes
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Returns the attribute fragment: empty, or ` k1="v1" k2="v2"`.
	pub fn fragment(&self, options: &RenderOptions) -> String {
		let mut out = String::new();
		self.write_fragment(&mut out, options);
		out
	}

	pub(crate) fn write_fragment(&self, out: &mut String, options: &RenderOptions) {
		let mut pairs: Vec<_> = self.iter().collect();
		if options.order == KeyOrder::Sorted {
			pairs.sort_by(|a, b| a.0.cmp(b.0));
		}

		for (name, value) in pairs {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			match options.escape {
				EscapePolicy::Trusted => out.push_str(value),
				EscapePolicy::AttributeValues => out.push_str(&escape_attr(value)),
			}
			out.push('"');
		}
	}
}

impl fmt::Display for AttributeMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.fragment(&RenderOptions::default()))
	}
}

impl From<Props> for AttributeMap {
	fn from(attributes: Props) -> Self {
		Self { attributes }
	}
}
