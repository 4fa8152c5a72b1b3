use std::path::PathBuf;

use rcpt::User;
use serde::Deserialize;

use super::super::resolved::RecipientSource;
use super::super::util::absolutize;
use crate::cli::CliArgs;

/// Where the initial address list comes from, as written in configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RecipientsSection {
	pub(super) users_file: Option<PathBuf>,
	pub(super) users: Option<Vec<User>>,
}

impl RecipientsSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.users.clone() {
			self.users_file = Some(path);
		}
	}

	/// A file wins over an inline list; neither starts an empty picker.
	pub(super) fn resolve(self) -> RecipientSource {
		match (self.users_file, self.users) {
			(Some(path), _) => RecipientSource::File(absolutize(path)),
			(None, Some(users)) => RecipientSource::Inline(users),
			(None, None) => RecipientSource::Empty,
		}
	}
}
