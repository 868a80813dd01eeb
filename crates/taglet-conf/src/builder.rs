//! Settings builder merging configuration sources by priority.

use crate::settings::RenderSettings;
use crate::sources::{ConfigSource, SourceError};
use indexmap::IndexMap;
use serde_json::Value;

/// Error type for building settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to load {description}: {source}")]
	Source {
		description: String,
		#[source]
		source: SourceError,
	},

	#[error("Invalid render settings: {0}")]
	Invalid(#[from] serde_json::Error),
}

/// Builds [`RenderSettings`] from layered sources.
///
/// Sources are loaded from lowest to highest priority; a key from a higher
/// priority source replaces the same key from a lower one. Sources with the
/// same priority apply in the order they were added.
///
/// # Examples
///
/// ```
/// use taglet_conf::builder::SettingsBuilder;
/// use taglet_conf::sources::DefaultSource;
/// use taglet_core::KeyOrder;
/// use serde_json::Value;
///
/// let settings = SettingsBuilder::new()
///     .add_source(DefaultSource::new().with_value("order", Value::String("sorted".into())))
///     .build()
///     .unwrap();
/// assert_eq!(settings.order, KeyOrder::Sorted);
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Creates a builder with no sources.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a configuration source.
	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Loads and merges every source into a flat key/value map.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Source`] naming the first source that fails.
	pub fn merged(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		let mut ordered: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| s.as_ref()).collect();
		ordered.sort_by_key(|source| source.priority());

		let mut merged = IndexMap::new();
		for source in ordered {
			let values = source.load().map_err(|source_err| SettingsError::Source {
				description: source.description(),
				source: source_err,
			})?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"loaded configuration source"
			);
			merged.extend(values);
		}
		Ok(merged)
	}

	/// Loads every source and deserializes the result.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Source`] when a source fails to load and
	/// [`SettingsError::Invalid`] when a value has the wrong shape (for
	/// example an unknown `order`).
	pub fn build(&self) -> Result<RenderSettings, SettingsError> {
		let merged = self.merged()?;
		let object = merged.into_iter().collect::<serde_json::Map<_, _>>();
		Ok(serde_json::from_value(Value::Object(object))?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sources::DefaultSource;
	use rstest::rstest;
	use taglet_core::{EscapePolicy, KeyOrder};

	struct FailingSource;

	impl ConfigSource for FailingSource {
		fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
			Err(SourceError::InvalidSource("unreachable backend".to_string()))
		}

		fn priority(&self) -> u8 {
			10
		}

		fn description(&self) -> String {
			"failing source".to_string()
		}
	}

	struct FixedSource {
		priority: u8,
		order: &'static str,
	}

	impl ConfigSource for FixedSource {
		fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
			let mut values = IndexMap::new();
			values.insert("order".to_string(), Value::String(self.order.to_string()));
			Ok(values)
		}

		fn priority(&self) -> u8 {
			self.priority
		}

		fn description(&self) -> String {
			format!("fixed ({})", self.order)
		}
	}

	#[rstest]
	fn test_empty_builder_yields_defaults() {
		assert_eq!(SettingsBuilder::new().build().unwrap(), RenderSettings::default());
	}

	#[rstest]
	fn test_higher_priority_wins_regardless_of_add_order() {
		let settings = SettingsBuilder::new()
			.add_source(FixedSource {
				priority: 90,
				order: "sorted",
			})
			.add_source(FixedSource {
				priority: 10,
				order: "insertion",
			})
			.build()
			.unwrap();
		assert_eq!(settings.order, KeyOrder::Sorted);
	}

	#[rstest]
	fn test_keys_from_different_sources_combine() {
		let settings = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value("strict", Value::Bool(true)))
			.add_source(FixedSource {
				priority: 50,
				order: "sorted",
			})
			.build()
			.unwrap();
		assert_eq!(settings.order, KeyOrder::Sorted);
		assert_eq!(settings.escape, EscapePolicy::Trusted);
		assert!(settings.strict);
	}

	#[rstest]
	fn test_source_error_names_source() {
		let err = SettingsBuilder::new()
			.add_source(FailingSource)
			.build()
			.unwrap_err();
		assert!(matches!(err, SettingsError::Source { .. }));
		assert_eq!(
			err.to_string(),
			"Failed to load failing source: Invalid source: unreachable backend"
		);
	}

	#[rstest]
	fn test_invalid_value_is_reported() {
		let err = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value("order", Value::String("random".into())))
			.build()
			.unwrap_err();
		assert!(matches!(err, SettingsError::Invalid(_)));
	}

	#[rstest]
	fn test_unknown_keys_are_ignored() {
		let settings = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value("theme", Value::String("dark".into())))
			.build()
			.unwrap();
		assert_eq!(settings, RenderSettings::default());
	}
}
