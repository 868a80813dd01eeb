//! Render settings loaded from configuration.

use crate::builder::{SettingsBuilder, SettingsError};
use crate::sources::{DefaultSource, EnvSource, TomlFileSource};
use serde::{Deserialize, Serialize};
use std::path::Path;
use taglet_core::{EscapePolicy, KeyOrder, RenderOptions};

/// Render settings as read from configuration.
///
/// ```toml
/// [render]
/// order = "sorted"            # or "insertion"
/// escape = "attribute_values" # or "trusted"
/// strict = true
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Serialization order of style properties and attributes.
	pub order: KeyOrder,
	/// Escaping of style and attribute values.
	pub escape: EscapePolicy,
	/// Validate elements in `try_render`.
	pub strict: bool,
}

impl RenderSettings {
	/// Loads defaults overridden by `TAGLET_*` environment variables.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Invalid`] if a variable holds an unknown value.
	pub fn from_env() -> Result<Self, SettingsError> {
		SettingsBuilder::new()
			.add_source(Self::defaults())
			.add_source(EnvSource::new())
			.build()
	}

	/// Loads defaults, then the TOML file at `path`, then `TAGLET_*`
	/// environment variables. A missing file is skipped.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Source`] if the file cannot be read or parsed
	/// and [`SettingsError::Invalid`] for unknown values.
	pub fn from_file_and_env(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		SettingsBuilder::new()
			.add_source(Self::defaults())
			.add_source(TomlFileSource::new(path.as_ref()))
			.add_source(EnvSource::new())
			.build()
	}

	/// Default values as a configuration source.
	pub fn defaults() -> DefaultSource {
		let defaults = Self::default();
		DefaultSource::new()
			.with_value("order", serde_json::json!(defaults.order))
			.with_value("escape", serde_json::json!(defaults.escape))
			.with_value("strict", serde_json::json!(defaults.strict))
	}

	/// Converts the settings into render options.
	pub fn options(&self) -> RenderOptions {
		RenderOptions::new()
			.order(self.order)
			.escape(self.escape)
			.strict(self.strict)
	}
}

impl From<RenderSettings> for RenderOptions {
	fn from(settings: RenderSettings) -> Self {
		settings.options()
	}
}
