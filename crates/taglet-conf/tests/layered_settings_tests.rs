//! Integration tests for layered render settings
//!
//! Precedence: environment variables > TOML file > defaults.

use rstest::rstest;
use serial_test::serial;
use taglet_conf::testing::TestEnv;
use taglet_conf::{RenderSettings, SettingsError};
use taglet_core::{Element, ElementError, EscapePolicy, KeyOrder};

const ENV_KEYS: [&str; 3] = ["TAGLET_ORDER", "TAGLET_ESCAPE", "TAGLET_STRICT"];

fn clean_env() -> TestEnv {
	let mut env = TestEnv::new().unwrap();
	for key in ENV_KEYS {
		env.remove_var(key);
	}
	env
}

#[rstest]
#[serial(taglet_env)]
fn test_defaults_without_file_or_env() {
	let env = clean_env();
	let settings = RenderSettings::from_file_and_env(env.path().join("missing.toml")).unwrap();
	assert_eq!(settings, RenderSettings::default());
}

#[rstest]
#[serial(taglet_env)]
fn test_file_overrides_defaults() {
	let env = clean_env();
	let path = env
		.create_config_file(
			"taglet.toml",
			"[render]\norder = \"sorted\"\nescape = \"attribute_values\"\n",
		)
		.unwrap();

	let settings = RenderSettings::from_file_and_env(path).unwrap();
	assert_eq!(settings.order, KeyOrder::Sorted);
	assert_eq!(settings.escape, EscapePolicy::AttributeValues);
	assert!(!settings.strict);
}

#[rstest]
#[serial(taglet_env)]
fn test_env_overrides_file() {
	let mut env = clean_env();
	let path = env
		.create_config_file("taglet.toml", "[render]\norder = \"sorted\"\nstrict = false\n")
		.unwrap();
	env.set_var("TAGLET_ORDER", "insertion");
	env.set_var("TAGLET_STRICT", "on");

	let settings = RenderSettings::from_file_and_env(path).unwrap();
	assert_eq!(settings.order, KeyOrder::Insertion);
	assert!(settings.strict);
}

#[rstest]
#[serial(taglet_env)]
fn test_from_env_only() {
	let mut env = clean_env();
	env.set_var("TAGLET_ESCAPE", "ATTRIBUTE_VALUES");

	let settings = RenderSettings::from_env().unwrap();
	assert_eq!(settings.escape, EscapePolicy::AttributeValues);
	assert_eq!(settings.order, KeyOrder::Insertion);
}

#[rstest]
#[serial(taglet_env)]
fn test_invalid_env_value_is_rejected() {
	let mut env = clean_env();
	env.set_var("TAGLET_ORDER", "random");

	let err = RenderSettings::from_env().unwrap_err();
	assert!(matches!(err, SettingsError::Invalid(_)));
}

#[rstest]
#[serial(taglet_env)]
fn test_unreadable_file_is_reported() {
	let env = clean_env();
	let path = env.create_config_file("broken.toml", "[render\n").unwrap();

	let err = RenderSettings::from_file_and_env(&path).unwrap_err();
	assert!(matches!(err, SettingsError::Source { .. }));
	assert!(err.to_string().contains("broken.toml"));
}

#[rstest]
#[serial(taglet_env)]
fn test_settings_drive_rendering() {
	let env = clean_env();
	let path = env
		.create_config_file(
			"taglet.toml",
			"[render]\norder = \"sorted\"\nescape = \"attribute_values\"\nstrict = true\n",
		)
		.unwrap();
	let options = RenderSettings::from_file_and_env(path).unwrap().options();

	let html = Element::new("a")
		.attr("title", "Tom & Jerry")
		.attr("href", "/cartoons")
		.content("Watch")
		.try_render(&options)
		.unwrap();
	assert_eq!(
		html.as_str(),
		r#"<a href="/cartoons" title="Tom &amp; Jerry">Watch</a>"#
	);

	let err = Element::base().try_render(&options).unwrap_err();
	assert_eq!(err, ElementError::EmptyTag);
}

#[cfg(unix)]
#[rstest]
#[serial(taglet_env)]
fn test_non_utf8_unrelated_variable_does_not_break_loading() {
	use std::ffi::OsStr;
	use std::os::unix::ffi::OsStrExt;

	let mut env = clean_env();
	env.set_var_os("UNRELATED_BLOB", OsStr::from_bytes(b"f\xffo"));
	env.set_var("TAGLET_STRICT", "true");

	let settings = RenderSettings::from_env().unwrap();
	assert!(settings.strict);
	assert_eq!(settings.order, KeyOrder::Insertion);
}
