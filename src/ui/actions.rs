use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::picker::{PaneRow, PickerOutcome, Pool};

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<PickerOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			match key.code {
				KeyCode::Char('s') => {
					return Ok(Some(PickerOutcome::accepted(
						self.search_input.text(),
						self.picker.recipients(),
					)));
				}
				KeyCode::Char('c') => return Ok(Some(self.cancelled())),
				KeyCode::Char('a') => {
					let state = self.picker.toggle_select_all(self.focus);
					log::debug!("select-all on {} pane is now {state:?}", self.focus);
					return Ok(None);
				}
				KeyCode::Char('n') => {
					self.add_query_as_email();
					return Ok(None);
				}
				KeyCode::Char('l') => {
					self.show_logs = !self.show_logs;
					return Ok(None);
				}
				_ => {}
			}
		}

		match key.code {
			KeyCode::Esc => return Ok(Some(self.cancelled())),
			KeyCode::Tab | KeyCode::BackTab => self.switch_focus(),
			KeyCode::Up => self.move_cursor_up(),
			KeyCode::Down => self.move_cursor_down(),
			KeyCode::Char(' ') => self.toggle_current(),
			KeyCode::Right => self.expand_current(true),
			KeyCode::Left => self.expand_current(false),
			KeyCode::Enter => self.move_checked(),
			_ if self.focus == Pool::Available => {
				if self.search_input.input(key) {
					let query = self.search_input.text().to_string();
					self.apply_query(query);
				}
			}
			_ => {}
		}
		Ok(None)
	}

	fn cancelled(&self) -> PickerOutcome {
		PickerOutcome::cancelled(self.search_input.text())
	}

	fn switch_focus(&mut self) {
		self.focus = self.focus.other();
		self.ensure_cursor(self.focus);
	}

	fn move_cursor_up(&mut self) {
		if let Some(selected) = self.cursor(self.focus)
			&& selected > 0
		{
			self.select_row(self.focus, selected - 1);
		}
	}

	fn move_cursor_down(&mut self) {
		if let Some(selected) = self.cursor(self.focus) {
			let len = self.picker.rows(self.focus).len();
			if selected + 1 < len {
				self.select_row(self.focus, selected + 1);
			}
		}
	}

	fn toggle_current(&mut self) {
		let pool = self.focus;
		let target = match self.current_row() {
			Some(PaneRow::Group { domain, .. }) => Target::Group(domain.to_string()),
			Some(PaneRow::Member { user, .. }) => Target::Member(user.email.clone()),
			None => return,
		};
		match target {
			Target::Group(domain) => {
				self.picker.toggle_group_check(pool, &domain);
			}
			Target::Member(email) => {
				self.picker.toggle_check(pool, &email);
			}
		}
	}

	/// Expand or collapse the group under the cursor.
	///
	/// Collapsing from a nested member moves the cursor back to its header.
	fn expand_current(&mut self, expanded: bool) {
		let pool = self.focus;
		let Some(domain) = self
			.current_row()
			.and_then(|row| row.group_domain())
			.map(str::to_string)
		else {
			return;
		};
		self.picker.set_expanded(pool, &domain, expanded);
		if !expanded {
			let header = self
				.picker
				.rows(pool)
				.iter()
				.position(|row| matches!(row, PaneRow::Group { domain: d, .. } if *d == domain));
			if let Some(index) = header {
				self.select_row(pool, index);
			}
		}
		self.ensure_cursor(pool);
	}

	fn move_checked(&mut self) {
		let moved = match self.focus {
			Pool::Available => self.picker.add_recipients(),
			Pool::Selected => self.picker.remove_recipients(),
		};
		if moved > 0 {
			self.ensure_cursors();
		}
	}

	fn add_query_as_email(&mut self) {
		let text = self.search_input.text().to_string();
		match self.picker.add_email(&text) {
			Ok(_) => self.ensure_cursor(Pool::Available),
			Err(rejection) => log::debug!("not adding {text:?}: {rejection}"),
		}
	}
}

enum Target {
	Group(String),
	Member(String),
}
