//! Testing utilities for settings
//!
//! Provides an isolated environment for tests that touch environment
//! variables or config files.

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment helper
///
/// Records the original value of every variable it changes and restores
/// them on drop. Tests using it should be `#[serial]`.
pub struct TestEnv {
	temp_dir: TempDir,
	original_env: HashMap<String, Option<OsString>>,
}

impl TestEnv {
	/// Create a new test environment
	///
	/// # Examples
	///
	/// ```
	/// use taglet_conf::testing::TestEnv;
	///
	/// let mut test_env = TestEnv::new().unwrap();
	/// test_env.set_var("TAGLET_DOCTEST_KEY", "value");
	/// assert_eq!(std::env::var("TAGLET_DOCTEST_KEY").unwrap(), "value");
	/// ```
	pub fn new() -> std::io::Result<Self> {
		Ok(Self {
			temp_dir: TempDir::new()?,
			original_env: HashMap::new(),
		})
	}

	/// Get the temporary directory path
	pub fn path(&self) -> &Path {
		self.temp_dir.path()
	}

	fn remember(&mut self, key: &str) {
		if !self.original_env.contains_key(key) {
			self.original_env.insert(key.to_string(), env::var_os(key));
		}
	}

	/// Set an environment variable for this test
	pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		self.remember(&key);

		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// TestEnv is designed for use in tests with #[serial] to ensure exclusive access.
		unsafe {
			env::set_var(&key, value.into());
		}
	}

	/// Set an environment variable that need not be valid UTF-8
	pub fn set_var_os(&mut self, key: impl Into<String>, value: impl AsRef<OsStr>) {
		let key = key.into();
		self.remember(&key);

		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// TestEnv is designed for use in tests with #[serial] to ensure exclusive access.
		unsafe {
			env::set_var(&key, value);
		}
	}

	/// Remove an environment variable for this test
	pub fn remove_var(&mut self, key: impl Into<String>) {
		let key = key.into();
		self.remember(&key);

		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// TestEnv is designed for use in tests with #[serial] to ensure exclusive access.
		unsafe {
			env::remove_var(&key);
		}
	}

	/// Create a config file in the temporary directory
	///
	/// # Examples
	///
	/// ```
	/// use taglet_conf::testing::TestEnv;
	///
	/// let test_env = TestEnv::new().unwrap();
	/// let config = test_env.create_config_file("taglet.toml", "[render]\nstrict = true").unwrap();
	/// assert!(config.exists());
	/// ```
	pub fn create_config_file(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
		let path = self.temp_dir.path().join(name);
		std::fs::write(&path, content)?;
		Ok(path)
	}
}

impl Drop for TestEnv {
	fn drop(&mut self) {
		for (key, original) in self.original_env.drain() {
			// SAFETY: Restoring environment variables is unsafe in multi-threaded programs.
			// TestEnv is designed for use in tests with #[serial] to ensure exclusive access.
			unsafe {
				match original {
					Some(value) => env::set_var(&key, value),
					None => env::remove_var(&key),
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;

	#[rstest]
	#[serial(taglet_env)]
	fn test_restores_on_drop() {
		// SAFETY: Serialized with other environment tests.
		unsafe {
			env::set_var("TAGLET_TESTENV_KEEP", "before");
			env::remove_var("TAGLET_TESTENV_NEW");
		}

		{
			let mut test_env = TestEnv::new().unwrap();
			test_env.set_var("TAGLET_TESTENV_KEEP", "during");
			test_env.set_var("TAGLET_TESTENV_NEW", "during");
			assert_eq!(env::var("TAGLET_TESTENV_KEEP").unwrap(), "during");
		}

		assert_eq!(env::var("TAGLET_TESTENV_KEEP").unwrap(), "before");
		assert!(env::var("TAGLET_TESTENV_NEW").is_err());

		// SAFETY: Serialized with other environment tests.
		unsafe {
			env::remove_var("TAGLET_TESTENV_KEEP");
		}
	}

	#[rstest]
	#[serial(taglet_env)]
	fn test_remove_var_restores() {
		// SAFETY: Serialized with other environment tests.
		unsafe {
			env::set_var("TAGLET_TESTENV_GONE", "value");
		}

		{
			let mut test_env = TestEnv::new().unwrap();
			test_env.remove_var("TAGLET_TESTENV_GONE");
			assert!(env::var("TAGLET_TESTENV_GONE").is_err());
		}

		assert_eq!(env::var("TAGLET_TESTENV_GONE").unwrap(), "value");

		// SAFETY: Serialized with other environment tests.
		unsafe {
			env::remove_var("TAGLET_TESTENV_GONE");
		}
	}

	#[rstest]
	fn test_create_config_file() {
		let test_env = TestEnv::new().unwrap();
		let path = test_env.create_config_file("a.toml", "x = 1").unwrap();
		assert_eq!(std::fs::read_to_string(path).unwrap(), "x = 1");
	}
}
