//! Error types for strict rendering.

/// Errors reported by [`Element::validate`](crate::Element::validate) and
/// [`Element::try_render`](crate::Element::try_render).
///
/// Plain rendering never produces these; it accepts any input.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
	#[error("Element has no tag name")]
	EmptyTag,

	#[error("Invalid tag name: '{0}'")]
	InvalidTagName(String),

	#[error("Invalid attribute name: '{0}'")]
	InvalidAttributeName(String),

	#[error("Invalid style property: '{0}'")]
	InvalidStyleProperty(String),
}

/// Result type for strict rendering operations.
pub type ElementResult<T> = Result<T, ElementError>;
