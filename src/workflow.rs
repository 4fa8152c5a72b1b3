use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rcpt::{PickerOutcome, PickerUi, UiLabels, User};

use crate::settings::{RecipientSource, ResolvedConfig};

/// Coordinates building and running the interactive picker.
pub(crate) struct PickerWorkflow {
	picker_ui: PickerUi,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let picker_ui = PickerUiFactory::build(config)?;
		Ok(Self { picker_ui })
	}

	pub(crate) fn run(self) -> Result<PickerOutcome> {
		self.picker_ui.run()
	}
}

/// Helper for translating resolved configuration into a configured `PickerUi`.
struct PickerUiFactory {
	picker_ui: PickerUi,
}

impl PickerUiFactory {
	fn build(config: ResolvedConfig) -> Result<PickerUi> {
		let ResolvedConfig {
			recipients,
			theme,
			initial_query,
			labels,
			log_level: _,
		} = config;

		let users = load_users(&recipients)?;
		log::info!("loaded {} addresses", users.len());

		let builder = Self::new(users)
			.with_labels(labels)
			.with_initial_query(initial_query)
			.with_theme(theme);

		Ok(builder.finish())
	}

	fn new(users: Vec<User>) -> Self {
		Self {
			picker_ui: PickerUi::new(users),
		}
	}

	fn with_labels(mut self, labels: UiLabels) -> Self {
		self.picker_ui = self.picker_ui.with_labels(labels);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		if !query.is_empty() {
			self.picker_ui = self.picker_ui.with_initial_query(query);
		}
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.picker_ui = self.picker_ui.with_theme_name(&theme);
		}
		self
	}

	fn finish(self) -> PickerUi {
		self.picker_ui
	}
}

/// Read the initial address list from its configured source.
pub(crate) fn load_users(source: &RecipientSource) -> Result<Vec<User>> {
	match source {
		RecipientSource::File(path) => read_users_file(path),
		RecipientSource::Inline(users) => Ok(users.clone()),
		RecipientSource::Empty => Ok(Vec::new()),
	}
}

fn read_users_file(path: &Path) -> Result<Vec<User>> {
	let contents = fs::read_to_string(path)
		.with_context(|| format!("failed to read address list {}", path.display()))?;
	serde_json::from_str(&contents)
		.with_context(|| format!("failed to parse address list {}", path.display()))
}
