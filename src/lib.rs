//! # Taglet
//!
//! A fluent builder for server-rendered HTML fragments.
//!
//! Taglet builds markup as strings: an [`Element`] collects a tag, inner
//! markup, inline styles and attributes through chained calls, and renders
//! once into `<tag style="..." key="value">content</tag>`.
//!
//! ## Core Principles
//!
//! - **Deterministic output**: Styles and attributes render in insertion
//!   order (or sorted, on request), so output is reproducible and testable
//! - **Permissive by default**: Plain rendering never fails and never
//!   escapes; strictness and escaping are opt-in through [`RenderOptions`]
//! - **Value builders**: Every mutator takes and returns the builder, and
//!   elements are `Clone` so a half-built element can act as a prototype
//!
//! ## Feature Flags
//!
//! - `conf` (default) - Layered render settings from defaults, a TOML file
//!   and `TAGLET_*` environment variables (see [`conf`])
//!
//! ## Quick Example
//!
//! ```rust
//! use taglet::prelude::*;
//!
//! let nav = ul_el()
//!     .class("nav")
//!     .content(li(a("Home", Extras::new().attrs(props! { "href" => "/" })), ()))
//!     .render();
//!
//! let page = body(h1("Taglet", ()) + nav + br_n(2), ());
//! assert_eq!(
//!     page.as_str(),
//!     r#"<body><h1>Taglet</h1><ul class="nav"><li><a href="/">Home</a></li></ul><br><br></body>"#
//! );
//! ```

#[cfg(feature = "conf")]
pub mod conf;
pub mod html;

// Re-export core types
pub use taglet_core::{
	AttributeMap, Element, ElementError, ElementResult, EscapePolicy, Extras, KeyOrder, Markup,
	Props, RenderOptions, StyleMap, escape, props,
};

#[cfg(feature = "conf")]
pub use taglet_conf::{RenderSettings, SettingsBuilder, SettingsError};

pub mod prelude {
	pub use crate::{Element, Extras, Markup, Props, RenderOptions, props};

	// Tag helpers
	pub use taglet_core::tags::*;

	#[cfg(feature = "conf")]
	pub use crate::RenderSettings;
}
