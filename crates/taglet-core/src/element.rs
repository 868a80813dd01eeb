//! HTML Element Builder
//!
//! [`Element`] holds a tag name, inner markup, a style map and an attribute
//! map. Every mutator takes the builder by value and returns it, so an
//! element is built in a single chained expression and rendered once.
//!
//! ## Output format
//!
//! ```text
//! <TAG STYLE_FRAGMENT ATTR_FRAGMENT>CONTENT</TAG>
//! ```
//!
//! Each fragment is empty when its map is empty and otherwise carries its
//! own leading space. Nothing is escaped unless the render options ask for
//! it; callers are responsible for passing safe content.
//!
//! ## Examples
//!
//! ```
//! use taglet_core::Element;
//!
//! let html = Element::new("button")
//!     .class("btn")
//!     .class("btn-primary")
//!     .id("submit")
//!     .style("color", "white")
//!     .content("Submit")
//!     .render();
//!
//! assert_eq!(
//!     html.as_str(),
//!     r#"<button style="color:white;" class="btn btn-primary" id="submit">Submit</button>"#
//! );
//! ```

use crate::attributes::AttributeMap;
use crate::error::{ElementError, ElementResult};
use crate::markup::Markup;
use crate::options::RenderOptions;
use crate::props::{Extras, Props};
use crate::style::StyleMap;
use crate::validate::{is_valid_attribute_name, is_valid_style_property, is_valid_tag_name};
use std::fmt;

/// Builder value for one HTML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
	tag: String,
	content: Markup,
	style: StyleMap,
	attributes: AttributeMap,
}

impl Element {
	/// Creates an element with no tag, no content and empty maps.
	pub fn base() -> Self {
		Self::default()
	}

	/// Creates an element with the given tag.
	pub fn new(tag: impl Into<String>) -> Self {
		Self::base().tag(tag)
	}

	/// Sets the tag name.
	pub fn tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = tag.into();
		self
	}

	/// Sets the inner markup, replacing any previous content.
	///
	/// Content is embedded verbatim. Wrap untrusted text with
	/// [`Markup::escape`] first.
	pub fn content(mut self, content: impl Into<Markup>) -> Self {
		self.content = content.into();
		self
	}

	/// Sets one style property. The last write for a property wins.
	///
	/// # Examples
	///
	/// ```
	/// use taglet_core::Element;
	///
	/// let html = Element::new("p")
	///     .style("color", "red")
	///     .style("color", "blue")
	///     .render();
	/// assert_eq!(html.as_str(), r#"<p style="color:blue;"></p>"#);
	/// ```
	pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.style.set(property, value);
		self
	}

	/// Appends a class token (or a space-separated list of tokens) to the
	/// `class` attribute, keeping classes set earlier.
	pub fn class(self, class: impl AsRef<str>) -> Self {
		self.classes([class])
	}

	/// Appends several class tokens, joined with spaces.
	///
	/// # Examples
	///
	/// ```
	/// use taglet_core::Element;
	///
	/// let html = Element::new("div")
	///     .classes(["card", "shadow"])
	///     .class("wide")
	///     .render();
	/// assert_eq!(html.as_str(), r#"<div class="card shadow wide"></div>"#);
	/// ```
	pub fn classes<I, S>(mut self, classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.attributes.append_class(classes);
		self
	}

	/// Sets the `id` attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.attributes.set("id", id);
		self
	}

	/// Sets a custom attribute, replacing any previous value.
	///
	/// # Examples
	///
	/// ```
	/// use taglet_core::Element;
	///
	/// let html = Element::new("a").attr("href", "/docs").content("Docs").render();
	/// assert_eq!(html.as_str(), r#"<a href="/docs">Docs</a>"#);
	/// ```
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.set(name, value);
		self
	}

	/// Merges an optional style map and an optional attribute map.
	///
	/// Absent maps are ignored. Attributes are overwritten, so a `class`
	/// entry here replaces classes added with [`class`](Self::class).
	pub fn style_and_attrs(mut self, style: Option<&Props>, attrs: Option<&Props>) -> Self {
		if let Some(style) = style {
			self.style.merge(style);
		}
		if let Some(attrs) = attrs {
			self.attributes.merge(attrs);
		}
		self
	}

	/// Applies the trailing optional configuration of a tag helper.
	pub fn extras(self, extras: impl Into<Extras>) -> Self {
		let extras = extras.into();
		self.style_and_attrs(extras.style.as_ref(), extras.attrs.as_ref())
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the inner markup.
	pub fn inner(&self) -> &Markup {
		&self.content
	}

	/// Returns the style map.
	pub fn styles(&self) -> &StyleMap {
		&self.style
	}

	/// Returns the attribute map.
	pub fn attributes(&self) -> &AttributeMap {
		&self.attributes
	}

	/// Renders with default options: insertion order, no escaping.
	pub fn render(&self) -> Markup {
		self.render_with(&RenderOptions::default())
	}

	/// Renders honoring the key order and escape policy of `options`.
	///
	/// Never fails; an element without a tag renders as `<></>`.
	pub fn render_with(&self, options: &RenderOptions) -> Markup {
		if self.tag.is_empty() {
			tracing::warn!("rendering element without a tag name");
		}
		tracing::trace!(tag = %self.tag, "rendering element");

		let mut out = String::with_capacity(self.tag.len() * 2 + self.content.len() + 5);
		out.push('<');
		out.push_str(&self.tag);
		self.style.write_fragment(&mut out, options);
		self.attributes.write_fragment(&mut out, options);
		out.push('>');
		out.push_str(self.content.as_str());
		out.push_str("</");
		out.push_str(&self.tag);
		out.push('>');
		Markup::from(out)
	}

	/// Renders, validating the element first when `options.strict` is set.
	///
	/// # Errors
	///
	/// Returns the first [`ElementError`] found by [`validate`](Self::validate)
	/// in strict mode.
	pub fn try_render(&self, options: &RenderOptions) -> ElementResult<Markup> {
		if options.strict {
			self.validate()?;
		}
		Ok(self.render_with(options))
	}

	/// Checks that the tag, attribute names and style properties cannot
	/// break the opening tag.
	///
	/// # Errors
	///
	/// - [`ElementError::EmptyTag`] if no tag is set
	/// - [`ElementError::InvalidTagName`] for a malformed tag
	/// - [`ElementError::InvalidStyleProperty`] for the first bad property
	/// - [`ElementError::InvalidAttributeName`] for the first bad attribute
	pub fn validate(&self) -> ElementResult<()> {
		if self.tag.is_empty() {
			return Err(ElementError::EmptyTag);
		}
		if !is_valid_tag_name(&self.tag) {
			return Err(ElementError::InvalidTagName(self.tag.clone()));
		}
		if let Some((property, _)) = self
			.style
			.iter()
			.find(|(property, _)| !is_valid_style_property(property))
		{
			return Err(ElementError::InvalidStyleProperty(property.to_string()));
		}
		if let Some((name, _)) = self
			.attributes
			.iter()
			.find(|(name, _)| !is_valid_attribute_name(name))
		{
			return Err(ElementError::InvalidAttributeName(name.to_string()));
		}
		Ok(())
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.render().as_str())
	}
}

impl From<Element> for Markup {
	fn from(element: Element) -> Self {
		element.render()
	}
}
