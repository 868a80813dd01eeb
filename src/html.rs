//! Element builder and tag helpers module.
//!
//! This module provides access to the element builder, the style and
//! attribute maps, and the per-tag helper functions.
//!
//! # Examples
//!
//! ```rust
//! use taglet::html::{Element, div, props};
//!
//! let html = div("hi", (props! { "color" => "red" }, props! { "id" => "main" }));
//! assert_eq!(html.as_str(), r#"<div style="color:red;" id="main">hi</div>"#);
//!
//! let html = Element::new("span").class("badge").content("3").render();
//! assert_eq!(html.as_str(), r#"<span class="badge">3</span>"#);
//! ```

pub use taglet_core::*;
