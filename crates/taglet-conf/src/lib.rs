//! # Taglet Conf
//!
//! Layered render settings for Taglet.
//!
//! Settings are merged from sources in priority order:
//!
//! | Source | Priority |
//! |--------|----------|
//! | [`EnvSource`](sources::EnvSource) (`TAGLET_*`) | 100 |
//! | [`TomlFileSource`](sources::TomlFileSource) (`[render]` table) | 50 |
//! | [`DefaultSource`](sources::DefaultSource) | 0 |
//!
//! ## Examples
//!
//! ```
//! use taglet_conf::RenderSettings;
//! use taglet_core::Element;
//!
//! let settings = RenderSettings::from_env().unwrap();
//! let html = Element::new("p").content("hi").render_with(&settings.options());
//! assert_eq!(html.as_str(), "<p>hi</p>");
//! ```

pub mod builder;
pub mod settings;
pub mod sources;
pub mod testing;

pub use builder::{SettingsBuilder, SettingsError};
pub use settings::RenderSettings;
pub use sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};
