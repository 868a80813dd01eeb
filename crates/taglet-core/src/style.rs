//! Inline style map
//!
//! Serializes to the ` style="prop:value;..."` fragment of an opening tag.

use crate::escape::escape_attr;
use crate::options::{EscapePolicy, KeyOrder, RenderOptions};
use crate::props::Props;
use indexmap::IndexMap;
use std::fmt;

/// CSS property/value pairs of a single element.
///
/// Properties keep the position of their first insertion; setting an
/// existing property replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
	properties: IndexMap<String, String>,
}

impl StyleMap {
	/// Creates an empty style map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets one property, replacing any previous value.
	pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
		self.properties.insert(property.into(), value.into());
	}

	/// Sets every property of `props`.
	pub fn merge(&mut self, props: &Props) {
		for (property, value) in props {
			self.properties.insert(property.clone(), value.clone());
		}
	}

	/// Removes a property, keeping the order of the rest.
	pub fn remove(&mut self, property: &str) -> Option<String> {
		self.properties.shift_remove(property)
	}

	/// Returns the value of a property.
	pub fn get(&self, property: &str) -> Option<&str> {
		self.properties.get(property).map(String::as_str)
	}

	/// Returns the number of properties.
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	/// Returns `true` if no property is set.
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	/// Iterates over properties in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.properties
			.iter()
			.map(|(property, value)| (property.as_str(), value.as_str()))
	}

	/// Returns the style fragment: empty, or ` style="k1:v1;k2:v2;"`.
	///
	/// # Examples
	///
	/// ```
	/// use taglet_core::{RenderOptions, StyleMap};
	///
	/// let mut style = StyleMap::new();
	/// style.set("color", "red");
	/// style.set("margin", "0");
	/// assert_eq!(
	///     style.fragment(&RenderOptions::default()),
	///     r#" style="color:red;margin:0;""#
	/// );
	/// ```
	pub fn fragment(&self, options: &RenderOptions) -> String {
		let mut out = String::new();
		self.write_fragment(&mut out, options);
		out
	}

	pub(crate) fn write_fragment(&self, out: &mut String, options: &RenderOptions) {
		if self.properties.is_empty() {
			return;
		}

		let mut pairs: Vec<_> = self.iter().collect();
		if options.order == KeyOrder::Sorted {
			pairs.sort_by(|a, b| a.0.cmp(b.0));
		}

		out.push_str(" style=\"");
		for (property, value) in pairs {
			out.push_str(property);
			out.push(':');
			match options.escape {
				EscapePolicy::Trusted => out.push_str(value),
				EscapePolicy::AttributeValues => out.push_str(&escape_attr(value)),
			}
			out.push(';');
		}
		out.push('"');
	}
}

impl fmt::Display for StyleMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.fragment(&RenderOptions::default()))
	}
}

impl From<Props> for StyleMap {
	fn from(properties: Props) -> Self {
		Self { properties }
	}
}
