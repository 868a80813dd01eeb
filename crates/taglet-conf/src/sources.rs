//! Configuration sources for layered render settings
//!
//! Provides sources that are merged together in priority order
//! (environment variables > config files > defaults).

use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Prefix of environment variables read by [`EnvSource::new`].
pub const ENV_PREFIX: &str = "TAGLET_";

/// Table holding render settings in a TOML file.
const RENDER_TABLE: &str = "render";

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid source: {0}")]
	InvalidSource(String),
}

/// Environment variable configuration source
///
/// Reads variables starting with the prefix, strips it and lower-cases the
/// rest: `TAGLET_ORDER=sorted` becomes `order = "sorted"`.
pub struct EnvSource {
	prefix: String,
}

impl EnvSource {
	/// Create a source reading `TAGLET_*` variables
	///
	/// # Examples
	///
	/// ```
	/// use taglet_conf::sources::EnvSource;
	///
	/// let source = EnvSource::new();
	/// ```
	pub fn new() -> Self {
		Self {
			prefix: ENV_PREFIX.to_string(),
		}
	}

	/// Set a different prefix filter for environment variables
	///
	/// # Examples
	///
	/// ```
	/// use taglet_conf::sources::EnvSource;
	///
	/// let source = EnvSource::new().with_prefix("MYAPP_HTML_");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

/// Parses the boolean spellings accepted in environment variables.
fn parse_flag(value: &str) -> Option<bool> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Some(true),
		"false" | "0" | "no" | "off" => Some(false),
		_ => None,
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let mut config = IndexMap::new();

		// Only prefixed variables must be valid UTF-8.
		for (key, value) in std::env::vars_os() {
			let Some(clean_key) = key.to_str().and_then(|key| key.strip_prefix(&self.prefix)) else {
				continue;
			};
			let lower_key = clean_key.to_lowercase();
			let value = value.into_string().map_err(|_| {
				SourceError::Parse(format!(
					"environment variable {}{} is not valid UTF-8",
					self.prefix, clean_key
				))
			})?;

			let parsed_value = match lower_key.as_str() {
				"strict" => match parse_flag(&value) {
					Some(flag) => Value::Bool(flag),
					None => Value::String(value),
				},
				"order" | "escape" => Value::String(value.trim().to_lowercase()),
				_ => Value::String(value),
			};

			config.insert(lower_key, parsed_value);
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

/// TOML file configuration source
///
/// Reads the `[render]` table when present, otherwise the top-level keys.
/// A missing file yields no values.
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	///
	/// # Examples
	///
	/// ```
	/// use taglet_conf::sources::TomlFileSource;
	///
	/// let source = TomlFileSource::new("taglet.toml");
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)?;
		let json_value = serde_json::to_value(&toml_value)?;

		let root = json_value
			.as_object()
			.ok_or_else(|| SourceError::Parse("Expected table at root".to_string()))?;

		let table = match root.get(RENDER_TABLE) {
			Some(render) => render.as_object().ok_or_else(|| {
				SourceError::Parse(format!("Expected [{RENDER_TABLE}] to be a table"))
			})?,
			None => root,
		};

		Ok(table.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Default values configuration source
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Create an empty default values source
	///
	/// # Examples
	///
	/// ```
	/// use taglet_conf::sources::DefaultSource;
	/// use serde_json::Value;
	///
	/// let source = DefaultSource::new()
	///     .with_value("strict", Value::Bool(true));
	/// ```
	pub fn new() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	/// Add a default value for a configuration key
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0 // Lowest priority
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}
