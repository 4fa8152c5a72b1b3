use anyhow::Result;

use super::{App, UiLabels};
use crate::picker::{PickerOutcome, RecipientPicker, User};
use crate::tui::Theme;

/// A small builder for configuring the interactive picker.
///
/// Labels, the starting query and the theme are applied to a fresh [`App`]
/// right before the event loop starts.
pub struct PickerUi {
	picker: RecipientPicker,
	input_title: Option<String>,
	labels: Option<UiLabels>,
	initial_query: Option<String>,
	theme: Option<Theme>,
}

impl PickerUi {
	/// Create a picker UI over the provided address list.
	pub fn new(users: impl IntoIterator<Item = User>) -> Self {
		Self::with_picker(RecipientPicker::new(users))
	}

	pub fn with_picker(picker: RecipientPicker) -> Self {
		Self {
			picker,
			input_title: None,
			labels: None,
			initial_query: None,
			theme: None,
		}
	}

	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.input_title = Some(title.into());
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	/// Use the named theme; unknown names keep the default.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = crate::tui::theme::by_name(name) {
			self.theme = Some(theme);
		} else {
			log::warn!("unknown theme {name:?}; keeping the default");
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Build the configured [`App`] without starting the terminal.
	pub fn into_app<'a>(self) -> App<'a> {
		let mut app = App::new(self.picker);
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(title) = self.input_title {
			app.ui.input_title = title;
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(query) = self.initial_query {
			app.set_query(query);
		}
		app
	}

	/// Run the interactive picker with the configured options.
	pub fn run(self) -> Result<PickerOutcome> {
		self.into_app().run()
	}
}
