use std::path::PathBuf;

use log::LevelFilter;
use rcpt::{UiLabels, User};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::{ConfigError, ConfigKey};
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where the picker's initial address list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientSource {
	/// A JSON array of `{email, isSelected}` records.
	File(PathBuf),
	Inline(Vec<User>),
	Empty,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub recipients: RecipientSource,
	pub theme: Option<String>,
	pub initial_query: String,
	pub labels: UiLabels,
	/// Lowercased level name; checked by validation.
	pub log_level: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Level for the log panel.
	pub fn log_level(&self) -> LevelFilter {
		rcpt::logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
