//! Helper functions for common HTML elements
//!
//! Each tag comes in two forms:
//!
//! - `<tag>_el()` returns an [`Element`] builder with the tag set
//! - `<tag>(content, extras)` sets the content, applies the optional
//!   style/attribute maps and renders in one call
//!
//! # Examples
//!
//! ```
//! use taglet_core::{h1, li, props, ul, ul_el};
//!
//! let items = li("one", ()) + li("two", ());
//! assert_eq!(ul(items.clone(), ()).as_str(), "<ul><li>one</li><li>two</li></ul>");
//!
//! let list = ul_el().class("menu").content(items).render();
//! assert_eq!(list.as_str(), r#"<ul class="menu"><li>one</li><li>two</li></ul>"#);
//!
//! let title = h1("Welcome", props! { "margin" => "0" });
//! assert_eq!(title.as_str(), r#"<h1 style="margin:0;">Welcome</h1>"#);
//! ```

use crate::element::Element;
use crate::markup::Markup;
use crate::props::Extras;

const BR: &str = "<br>";

/// Macro for defining a tag's builder constructor and one-shot helper
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $builder:ident, $tag:literal) => {
		#[doc = concat!("Create a `<", $tag, ">` element builder")]
		pub fn $builder() -> Element {
			Element::new($tag)
		}

		$(#[$meta])*
		pub fn $name(content: impl Into<Markup>, extras: impl Into<Extras>) -> Markup {
			$builder().content(content).extras(extras).render()
		}
	};
}

// ============================================================================
// Document and Sectioning Elements
// ============================================================================

define_element!(
	/// Render a `<body>` element
	body, body_el, "body"
);

define_element!(
	/// Render a `<div>` element
	///
	/// # Examples
	///
	/// ```
	/// use taglet_core::{div, props};
	///
	/// let html = div("hi", (props! { "color" => "red" }, props! { "id" => "main" }));
	/// assert_eq!(html.as_str(), r#"<div style="color:red;" id="main">hi</div>"#);
	/// ```
	div, div_el, "div"
);

define_element!(
	/// Render a `<span>` element
	span, span_el, "span"
);

define_element!(
	/// Render a `<p>` element (paragraph)
	p, p_el, "p"
);

// ============================================================================
// Form and Interactive Elements
// ============================================================================

define_element!(
	/// Render a `<button>` element
	///
	/// # Examples
	///
	/// ```
	/// use taglet_core::{Extras, button, props};
	///
	/// let html = button("Save", Extras::new().attrs(props! { "type" => "submit" }));
	/// assert_eq!(html.as_str(), r#"<button type="submit">Save</button>"#);
	/// ```
	button, button_el, "button"
);

define_element!(
	/// Render a `<form>` element
	form, form_el, "form"
);

define_element!(
	/// Render an `<a>` element (anchor)
	a, a_el, "a"
);

// ============================================================================
// List Elements
// ============================================================================

define_element!(
	/// Render a `<ul>` element (unordered list)
	ul, ul_el, "ul"
);

define_element!(
	/// Render a `<li>` element (list item)
	li, li_el, "li"
);

// ============================================================================
// Inline Text Semantics Elements
// ============================================================================

define_element!(
	/// Render a `<b>` element
	b, b_el, "b"
);

/// Create an `<i>` element builder
pub fn i_el() -> Element {
	Element::new("i")
}

/// Render an empty `<i>` element
///
/// Takes no content since `<i>` is mostly used as an icon carrier. Use
/// [`i_el`] to render italic text.
///
/// # Examples
///
/// ```
/// use taglet_core::{Extras, i, i_el, props};
///
/// let icon = i(Extras::new().attrs(props! { "class" => "fa fa-check" }));
/// assert_eq!(icon.as_str(), r#"<i class="fa fa-check"></i>"#);
///
/// assert_eq!(i_el().content("note").render().as_str(), "<i>note</i>");
/// ```
pub fn i(extras: impl Into<Extras>) -> Markup {
	i_el().extras(extras).render()
}

/// Render a single line break: `<br>`
pub fn br() -> Markup {
	Markup::raw(BR)
}

/// Render `count` consecutive line breaks
///
/// ```
/// use taglet_core::br_n;
///
/// assert_eq!(br_n(3).as_str(), "<br><br><br>");
/// assert!(br_n(0).is_empty());
/// ```
pub fn br_n(count: usize) -> Markup {
	Markup::raw(BR.repeat(count))
}

// ============================================================================
// Heading Elements
// ============================================================================

define_element!(
	/// Render a `<h1>` element (heading level 1)
	h1, h1_el, "h1"
);

define_element!(
	/// Render a `<h2>` element (heading level 2)
	h2, h2_el, "h2"
);

define_element!(
	/// Render a `<h3>` element (heading level 3)
	h3, h3_el, "h3"
);

define_element!(
	/// Render a `<h4>` element (heading level 4)
	h4, h4_el, "h4"
);

define_element!(
	/// Render a `<h5>` element (heading level 5)
	h5, h5_el, "h5"
);

define_element!(
	/// Render a `<h6>` element (heading level 6)
	h6, h6_el, "h6"
);
