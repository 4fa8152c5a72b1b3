use rcpt::{Pool, UiLabels};
use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) input_title: Option<String>,
	pub(super) available_title: Option<String>,
	pub(super) selected_title: Option<String>,
	pub(super) add_email_label: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) labels: UiLabels,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.input_title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.available_title.clone() {
			self.available_title = Some(title);
		}
		if let Some(title) = cli.selected_title.clone() {
			self.selected_title = Some(title);
		}
		if let Some(label) = cli.add_email_label.clone() {
			self.add_email_label = Some(label);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(title) = self.input_title {
			labels.input_title = title;
		}
		if let Some(title) = self.available_title {
			labels.pane_mut(Pool::Available).title = title;
		}
		if let Some(title) = self.selected_title {
			labels.pane_mut(Pool::Selected).title = title;
		}
		if let Some(label) = self.add_email_label {
			labels.add_email_label = label;
		}

		UiResolution {
			labels,
			initial_query: self.initial_query.unwrap_or_default(),
			theme: self.theme,
		}
	}
}
