use std::fmt;

use super::ConfigKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origin of every value that validation can reject.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	detected: Vec<(ConfigKey, SettingSource)>,
}

impl ConfigSources {
	/// Record where `key` was set; later records win.
	pub(crate) fn record(&mut self, key: ConfigKey, source: SettingSource) {
		self.detected.retain(|(existing, _)| *existing != key);
		self.detected.push((key, source));
	}

	#[cfg(test)]
	#[must_use]
	pub(crate) fn with(mut self, key: ConfigKey, source: SettingSource) -> Self {
		self.record(key, source);
		self
	}

	/// Where `key` came from, assuming the configuration file when unknown.
	pub(crate) fn source_for(&self, key: ConfigKey) -> SettingSource {
		self.detected
			.iter()
			.find(|(existing, _)| *existing == key)
			.map(|(_, source)| source.clone())
			.unwrap_or(SettingSource::ConfigKey(key.path()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_keys_fall_back_to_config_file() {
		let sources = ConfigSources::default();
		assert_eq!(
			sources.source_for(ConfigKey::LogLevel),
			SettingSource::ConfigKey("logging.level")
		);
	}

	#[test]
	fn recorded_sources_replace_earlier_ones() {
		let mut sources = ConfigSources::default();
		sources.record(ConfigKey::Theme, SettingSource::Environment("RCPT__UI__THEME"));
		sources.record(ConfigKey::Theme, SettingSource::CliFlag("--theme"));
		assert_eq!(
			sources.source_for(ConfigKey::Theme),
			SettingSource::CliFlag("--theme")
		);
		assert_eq!(
			sources.source_for(ConfigKey::SelectedTitle),
			SettingSource::ConfigKey("ui.selected_title")
		);
	}
}
