use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigKey, ConfigSources, ResolvedConfig, SettingSource};

mod logging;
mod recipients;
mod ui;

use logging::LoggingSection;
use recipients::RecipientsSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	recipients: RecipientsSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.recipients.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let mut sources = ConfigSources::default();
		for (key, cli_present, value_present) in [
			(ConfigKey::Theme, cli.theme.is_some(), self.ui.theme.is_some()),
			(
				ConfigKey::AvailableTitle,
				cli.available_title.is_some(),
				self.ui.available_title.is_some(),
			),
			(
				ConfigKey::SelectedTitle,
				cli.selected_title.is_some(),
				self.ui.selected_title.is_some(),
			),
			(
				ConfigKey::LogLevel,
				cli.log_level.is_some(),
				self.logging.level.is_some(),
			),
		] {
			if let Some(source) = detect_source(key, cli_present, value_present) {
				sources.record(key, source);
			}
		}

		let recipients = self.recipients.resolve();
		let ui = self.ui.finalize();
		let log_level = self.logging.finalize();

		let config = ResolvedConfig {
			recipients,
			theme: ui.theme,
			initial_query: ui.initial_query,
			labels: ui.labels,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	key: ConfigKey,
	cli_present: bool,
	value_present: bool,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(key.cli_flag()));
	}

	if env::var_os(key.env_var()).is_some() {
		return Some(SettingSource::Environment(key.env_var()));
	}

	Some(SettingSource::ConfigKey(key.path()))
}
