use std::fmt;

use thiserror::Error;

use super::SettingSource;

/// Configuration values that validation can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigKey {
	Theme,
	AvailableTitle,
	SelectedTitle,
	LogLevel,
}

impl ConfigKey {
	#[cfg(test)]
	pub(crate) const ALL: [ConfigKey; 4] = [
		ConfigKey::Theme,
		ConfigKey::AvailableTitle,
		ConfigKey::SelectedTitle,
		ConfigKey::LogLevel,
	];

	/// Dotted path inside the configuration file.
	pub(crate) const fn path(self) -> &'static str {
		match self {
			ConfigKey::Theme => "ui.theme",
			ConfigKey::AvailableTitle => "ui.available_title",
			ConfigKey::SelectedTitle => "ui.selected_title",
			ConfigKey::LogLevel => "logging.level",
		}
	}

	pub(crate) const fn env_var(self) -> &'static str {
		match self {
			ConfigKey::Theme => "RCPT__UI__THEME",
			ConfigKey::AvailableTitle => "RCPT__UI__AVAILABLE_TITLE",
			ConfigKey::SelectedTitle => "RCPT__UI__SELECTED_TITLE",
			ConfigKey::LogLevel => "RCPT__LOGGING__LEVEL",
		}
	}

	pub(crate) const fn cli_flag(self) -> &'static str {
		match self {
			ConfigKey::Theme => "--theme",
			ConfigKey::AvailableTitle => "--available-title",
			ConfigKey::SelectedTitle => "--selected-title",
			ConfigKey::LogLevel => "--log-level",
		}
	}
}

impl fmt::Display for ConfigKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.path())
	}
}

/// A rejected configuration value and where it came from.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: ConfigKey,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: ConfigKey,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}
