use serde::Serialize;

use super::User;

/// Result of an interactive picker session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOutcome {
	/// `false` when the user dismissed the picker.
	pub accepted: bool,
	/// Search text at the time the picker closed.
	pub query: String,
	/// Selected pool at the time the picker closed.
	pub recipients: Vec<User>,
}

impl PickerOutcome {
	#[must_use]
	pub fn accepted(query: impl Into<String>, recipients: Vec<User>) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			recipients,
		}
	}

	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			recipients: Vec::new(),
		}
	}
}
