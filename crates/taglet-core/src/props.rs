//! Bulk style and attribute maps
//!
//! [`Props`] is the map type accepted by bulk operations, and [`Extras`] is
//! the trailing optional configuration taken by every tag helper: an
//! optional style map followed by an optional attribute map.
//!
//! # Examples
//!
//! ```
//! use taglet_core::{Extras, div, props};
//!
//! let html = div(
//!     "hi",
//!     (props! { "color" => "red" }, props! { "id" => "main" }),
//! );
//! assert_eq!(html.as_str(), r#"<div style="color:red;" id="main">hi</div>"#);
//!
//! // No extras
//! assert_eq!(div("hi", ()).as_str(), "<div>hi</div>");
//!
//! // Attributes only
//! let html = div("hi", Extras::new().attrs(props! { "id" => "main" }));
//! assert_eq!(html.as_str(), r#"<div id="main">hi</div>"#);
//! ```

use indexmap::IndexMap;

/// Insertion-ordered string map used for bulk style and attribute updates.
pub type Props = IndexMap<String, String>;

/// Builds a [`Props`] map from `key => value` pairs.
///
/// Keys and values may be anything implementing `ToString`.
///
/// ```
/// use taglet_core::props;
///
/// let style = props! { "color" => "red", "margin" => 0 };
/// assert_eq!(style["margin"], "0");
/// ```
#[macro_export]
macro_rules! props {
	() => {
		$crate::Props::new()
	};
	($($key:expr => $value:expr),+ $(,)?) => {{
		let mut props = $crate::Props::new();
		$(
			props.insert(
				::std::string::ToString::to_string(&$key),
				::std::string::ToString::to_string(&$value),
			);
		)+
		props
	}};
}

/// Optional style and attribute maps applied by tag helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extras {
	/// Style properties merged into the element.
	pub style: Option<Props>,
	/// Attributes merged into the element.
	pub attrs: Option<Props>,
}

impl Extras {
	/// Creates empty extras.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the style map.
	pub fn style(mut self, style: Props) -> Self {
		self.style = Some(style);
		self
	}

	/// Sets the attribute map.
	pub fn attrs(mut self, attrs: Props) -> Self {
		self.attrs = Some(attrs);
		self
	}

	/// Returns `true` if neither map is present.
	pub fn is_empty(&self) -> bool {
		self.style.is_none() && self.attrs.is_none()
	}
}

impl From<()> for Extras {
	fn from(_: ()) -> Self {
		Self::default()
	}
}

/// A lone map is a style map.
impl From<Props> for Extras {
	fn from(style: Props) -> Self {
		Self {
			style: Some(style),
			attrs: None,
		}
	}
}

impl From<(Props, Props)> for Extras {
	fn from((style, attrs): (Props, Props)) -> Self {
		Self {
			style: Some(style),
			attrs: Some(attrs),
		}
	}
}

impl From<(Option<Props>, Option<Props>)> for Extras {
	fn from((style, attrs): (Option<Props>, Option<Props>)) -> Self {
		Self { style, attrs }
	}
}
