use serde::{Deserialize, Serialize};

/// A single address in the picker and the pool it currently belongs to.
///
/// The `email` string is the identity of a user: it is unique within a
/// [`RecipientPicker`](super::RecipientPicker) and compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub email: String,
	#[serde(default, alias = "is_selected", alias = "isselected")]
	pub is_selected: bool,
}

impl User {
	/// Create a user with an explicit pool membership.
	#[must_use]
	pub fn new(email: impl Into<String>, is_selected: bool) -> Self {
		Self {
			email: email.into(),
			is_selected,
		}
	}

	/// Create a user that starts in the available pool.
	#[must_use]
	pub fn available(email: impl Into<String>) -> Self {
		Self::new(email, false)
	}

	/// Create a user that starts in the selected pool.
	#[must_use]
	pub fn selected(email: impl Into<String>) -> Self {
		Self::new(email, true)
	}

	/// Return the text after the first `@`, if any.
	#[must_use]
	pub fn domain(&self) -> Option<&str> {
		self.email.split_once('@').map(|(_, domain)| domain)
	}

	/// Case-insensitive substring match against an already lowercased needle.
	pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
		needle.is_empty() || self.email.to_lowercase().contains(needle)
	}

	/// Copy of this record with a different pool membership.
	pub(crate) fn with_selected(&self, is_selected: bool) -> Self {
		Self {
			email: self.email.clone(),
			is_selected,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn domain_is_text_after_first_at() {
		assert_eq!(User::available("tim@sse.com").domain(), Some("sse.com"));
		assert_eq!(User::available("odd@one@two").domain(), Some("one@two"));
		assert_eq!(User::available("no-domain").domain(), None);
	}

	#[test]
	fn matching_ignores_case() {
		let user = User::available("Tim.Duncan@SSE.com");
		assert!(user.matches_lowercase("tim"));
		assert!(user.matches_lowercase("sse.c"));
		assert!(user.matches_lowercase(""));
		assert!(!user.matches_lowercase("boris"));
	}

	#[test]
	fn deserializes_camel_case_records() {
		let users: Vec<User> = serde_json::from_str(
			r#"[{"email":"tim.duncan@sse.com","isSelected":true},{"email":"john@hello.com"}]"#,
		)
		.expect("parse users");

		assert_eq!(
			users,
			vec![
				User::selected("tim.duncan@sse.com"),
				User::available("john@hello.com")
			]
		);
	}
}
