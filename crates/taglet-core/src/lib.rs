//! # Taglet Core
//!
//! Fluent builder for HTML fragments rendered to strings.
//!
//! ## Features
//!
//! - **Fluent API**: Chain method calls on [`Element`] and render once
//! - **Deterministic output**: Style properties and attributes keep insertion
//!   order, or are sorted on request
//! - **Class accumulation**: Repeated [`Element::class`] calls join tokens
//! - **Tag helpers**: `div`, `span`, `p`, `h1`..`h6` and friends in [`tags`]
//! - **Opt-in strictness**: Validation and value escaping through
//!   [`RenderOptions`]; plain [`Element::render`] accepts anything
//!
//! ## Examples
//!
//! ```
//! use taglet_core::{Element, br, div, p, props};
//!
//! let body = p("Hello", ()) + br() + p("World", ());
//! let card = Element::new("section")
//!     .class("card")
//!     .style("padding", "1em")
//!     .content(body)
//!     .render();
//!
//! assert_eq!(
//!     card.as_str(),
//!     r#"<section style="padding:1em;" class="card"><p>Hello</p><br><p>World</p></section>"#
//! );
//!
//! let banner = div("hi", (props! { "color" => "red" }, props! { "id" => "main" }));
//! assert_eq!(banner.as_str(), r#"<div style="color:red;" id="main">hi</div>"#);
//! ```

pub mod attributes;
pub mod element;
pub mod error;
pub mod escape;
pub mod markup;
pub mod options;
pub mod props;
pub mod style;
pub mod tags;

mod validate;

// Re-exports for convenience
pub use attributes::AttributeMap;
pub use element::Element;
pub use error::{ElementError, ElementResult};
pub use markup::Markup;
pub use options::{EscapePolicy, KeyOrder, RenderOptions};
pub use props::{Extras, Props};
pub use style::StyleMap;
pub use tags::*;
