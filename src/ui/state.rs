use ratatui::widgets::TableState;
use tui_logger::TuiWidgetState;

use super::config::UiLabels;
use crate::picker::{PaneRow, PerPool, Pool, RecipientPicker};
use crate::tui::input::SearchInput;
pub use crate::tui::theme::Theme;

/// Terminal application state around a [`RecipientPicker`].
pub struct App<'a> {
	pub picker: RecipientPicker,
	pub search_input: SearchInput<'a>,
	/// Pane receiving cursor keys and toggles.
	pub focus: Pool,
	pub(crate) cursors: PerPool<TableState>,
	pub(crate) ui: UiLabels,
	pub theme: Theme,
	pub(crate) show_logs: bool,
	pub(crate) log_state: TuiWidgetState,
}

impl<'a> App<'a> {
	pub fn new(picker: RecipientPicker) -> Self {
		let search_input = SearchInput::new(picker.query().to_string());
		let mut app = Self {
			picker,
			search_input,
			focus: Pool::Available,
			cursors: PerPool::default(),
			ui: UiLabels::default(),
			theme: Theme::default(),
			show_logs: false,
			log_state: TuiWidgetState::new(),
		};
		app.ensure_cursors();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	#[must_use]
	pub fn labels(&self) -> &UiLabels {
		&self.ui
	}

	/// Replace the search text, keeping input and picker in sync.
	pub fn set_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		self.search_input.set_text(query.clone());
		self.apply_query(query);
	}

	pub(crate) fn apply_query(&mut self, query: String) {
		self.picker.set_query(query);
		self.ensure_cursor(Pool::Available);
	}

	/// Row index under the cursor of `pool`.
	#[must_use]
	pub fn cursor(&self, pool: Pool) -> Option<usize> {
		self.cursors.get(pool).selected()
	}

	/// The row under the focused pane's cursor.
	#[must_use]
	pub fn current_row(&self) -> Option<PaneRow<'_>> {
		let index = self.cursor(self.focus)?;
		self.picker.rows(self.focus).into_iter().nth(index)
	}

	pub(crate) fn ensure_cursors(&mut self) {
		for pool in Pool::ALL {
			self.ensure_cursor(pool);
		}
	}

	/// Clamp the cursor of `pool` to its current rows.
	pub(crate) fn ensure_cursor(&mut self, pool: Pool) {
		let len = self.picker.rows(pool).len();
		let state = self.cursors.get_mut(pool);
		if len == 0 {
			state.select(None);
			return;
		}
		let index = state.selected().unwrap_or(0).min(len - 1);
		state.select(Some(index));
	}

	pub(crate) fn select_row(&mut self, pool: Pool, index: usize) {
		self.cursors.get_mut(pool).select(Some(index));
		self.ensure_cursor(pool);
	}
}
