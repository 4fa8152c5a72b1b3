use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// ASCII word characters, hyphen and dot before the `@`, dot-separated labels
/// after it, and a two to four character top-level label.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$";

/// Reasons a manually entered address is not added to the list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailRejection {
	#[error("'{0}' is not a valid email address")]
	Malformed(String),
	#[error("'{0}' is already a recipient")]
	AlreadySelected(String),
	#[error("'{0}' is already in the address list")]
	AlreadyListed(String),
}

fn email_shape() -> &'static Regex {
	static SHAPE: OnceLock<Regex> = OnceLock::new();
	SHAPE.get_or_init(|| {
		Regex::new(EMAIL_PATTERN)
			.unwrap_or_else(|error| panic!("invalid email pattern: {error}"))
	})
}

/// Structural email check; no DNS or mailbox validation.
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
	email_shape().is_match(text)
}
