//! Render options.

use serde::{Deserialize, Serialize};

/// Order in which style properties and attributes are serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
	/// Keys appear in the order they were first set.
	#[default]
	Insertion,
	/// Keys are sorted byte-wise.
	Sorted,
}

/// How style and attribute values are treated during rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapePolicy {
	/// Values are written verbatim; callers supply pre-escaped input.
	#[default]
	Trusted,
	/// Style and attribute values are attribute-escaped. Content is untouched.
	AttributeValues,
}

/// Options for rendering an [`Element`](crate::Element).
///
/// The defaults reproduce plain rendering: insertion order, no escaping,
/// no validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Serialization order for style properties and attributes.
	pub order: KeyOrder,
	/// Escaping applied to style and attribute values.
	pub escape: EscapePolicy,
	/// Whether [`Element::try_render`](crate::Element::try_render) validates
	/// the element before rendering.
	pub strict: bool,
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the key order.
	pub fn order(mut self, order: KeyOrder) -> Self {
		self.order = order;
		self
	}

	/// Sets the escape policy.
	pub fn escape(mut self, escape: EscapePolicy) -> Self {
		self.escape = escape;
		self
	}

	/// Enables or disables validation in `try_render`.
	pub fn strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults_are_permissive() {
		let options = RenderOptions::new();
		assert_eq!(options.order, KeyOrder::Insertion);
		assert_eq!(options.escape, EscapePolicy::Trusted);
		assert!(!options.strict);
	}

	#[rstest]
	fn test_builder_methods() {
		let options = RenderOptions::new()
			.order(KeyOrder::Sorted)
			.escape(EscapePolicy::AttributeValues)
			.strict(true);
		assert_eq!(options.order, KeyOrder::Sorted);
		assert_eq!(options.escape, EscapePolicy::AttributeValues);
		assert!(options.strict);
	}

	#[rstest]
	fn test_deserialize_snake_case() {
		let options: RenderOptions = serde_json::from_str(
			r#"{"order": "sorted", "escape": "attribute_values", "strict": true}"#,
		)
		.unwrap();
		assert_eq!(
			options,
			RenderOptions::new()
				.order(KeyOrder::Sorted)
				.escape(EscapePolicy::AttributeValues)
				.strict(true)
		);
	}

	#[rstest]
	fn test_deserialize_missing_fields_use_defaults() {
		let options: RenderOptions = serde_json::from_str(r#"{"order": "sorted"}"#).unwrap();
		assert_eq!(options.order, KeyOrder::Sorted);
		assert_eq!(options.escape, EscapePolicy::Trusted);
		assert!(!options.strict);
	}
}
