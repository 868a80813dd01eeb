//! Render settings module.
//!
//! This module provides access to the layered settings system that turns
//! defaults, a TOML file and `TAGLET_*` environment variables into
//! [`RenderOptions`](crate::RenderOptions).
//!
//! # Examples
//!
//! ```rust,no_run
//! use taglet::conf::RenderSettings;
//!
//! let settings = RenderSettings::from_file_and_env("taglet.toml").unwrap();
//! let options = settings.options();
//! ```

pub use taglet_conf::*;
