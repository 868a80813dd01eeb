//! Name checks used by strict rendering.
//!
//! These only reject names that would break out of the opening tag. They do
//! not check names against the HTML vocabulary.

/// Characters that end an attribute name in the HTML tokenizer.
fn breaks_attribute_name(ch: char) -> bool {
	ch.is_ascii_whitespace()
		|| ch.is_control()
		|| matches!(ch, '"' | '\'' | '>' | '/' | '=' | '<')
}

/// Tag names must start with an ASCII letter and continue with ASCII
/// alphanumerics or `-` (custom elements).
pub(crate) fn is_valid_tag_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {}
		_ => return false,
	}
	chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
}

pub(crate) fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty() && !name.chars().any(breaks_attribute_name)
}

/// Style properties must also not terminate the declaration they sit in.
pub(crate) fn is_valid_style_property(name: &str) -> bool {
	is_valid_attribute_name(name) && !name.contains([':', ';'])
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("div", true)]
	#[case("h1", true)]
	#[case("my-widget", true)]
	#[case("", false)]
	#[case("1div", false)]
	#[case("di v", false)]
	#[case("div>", false)]
	#[case("-x", false)]
	fn test_tag_names(#[case] name: &str, #[case] valid: bool) {
		assert_eq!(is_valid_tag_name(name), valid);
	}

	#[rstest]
	#[case("id", true)]
	#[case("data-user-id", true)]
	#[case("aria-label", true)]
	#[case("@click", true)]
	#[case("", false)]
	#[case("on click", false)]
	#[case("a=b", false)]
	#[case("x\"", false)]
	#[case("x'", false)]
	#[case("a/b", false)]
	#[case("tab\there", false)]
	fn test_attribute_names(#[case] name: &str, #[case] valid: bool) {
		assert_eq!(is_valid_attribute_name(name), valid);
	}

	#[rstest]
	#[case("color", true)]
	#[case("--brand-color", true)]
	#[case("color:red", false)]
	#[case("color;", false)]
	#[case("", false)]
	fn test_style_properties(#[case] name: &str, #[case] valid: bool) {
		assert_eq!(is_valid_style_property(name), valid);
	}
}
