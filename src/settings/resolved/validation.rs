use rcpt::Pool;
use rcpt::logging::parse_level;
use rcpt::tui::theme;

use super::{ConfigError, ConfigKey, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::invalid(
			ConfigKey::Theme,
			name.clone(),
			sources.source_for(ConfigKey::Theme),
			format!("unknown theme; expected one of {}", theme::names().join(", ")),
		));
	}

	if parse_level(&config.log_level).is_none() {
		return Err(ConfigError::invalid(
			ConfigKey::LogLevel,
			config.log_level.clone(),
			sources.source_for(ConfigKey::LogLevel),
			"expected one of off, error, warn, info, debug, trace",
		));
	}

	let available = &config.labels.pane(Pool::Available).title;
	if available.trim().is_empty() {
		return Err(ConfigError::invalid(
			ConfigKey::AvailableTitle,
			available.clone(),
			sources.source_for(ConfigKey::AvailableTitle),
			"must not be blank",
		));
	}

	let selected = &config.labels.pane(Pool::Selected).title;
	if selected.trim().is_empty() {
		return Err(ConfigError::invalid(
			ConfigKey::SelectedTitle,
			selected.clone(),
			sources.source_for(ConfigKey::SelectedTitle),
			"must not be blank",
		));
	}

	Ok(())
}
