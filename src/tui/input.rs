//! Single-line search input backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Text field holding the search query for the available pool.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			textarea: build_textarea(initial.into()),
		}
	}

	/// Current text of the input.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the text and move the cursor to its end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let placeholder = self.textarea.placeholder_text().to_string();
		self.textarea = build_textarea(text.into());
		self.set_placeholder(placeholder);
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
		self.textarea.set_placeholder_text(placeholder);
	}

	/// Feed a key press to the input, returning whether the text changed.
	///
	/// Keys that would start a second line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if newline {
			return false;
		}

		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub(crate) fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new(String::new())
	}
}

fn build_textarea<'a>(text: String) -> TextArea<'a> {
	let mut textarea = TextArea::new(vec![text]);
	textarea.set_cursor_line_style(Style::default());
	textarea.move_cursor(tui_textarea::CursorMove::End);
	textarea
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = SearchInput::default();
		assert!(input.input(key(KeyCode::Char('t'))));
		assert!(input.input(key(KeyCode::Char('i'))));
		assert_eq!(input.text(), "ti");

		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "t");
	}

	#[test]
	fn enter_never_adds_a_line() {
		let mut input = SearchInput::new("tim");
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "tim");
	}

	#[test]
	fn initial_text_places_cursor_at_end() {
		let mut input = SearchInput::new("ti");
		input.input(key(KeyCode::Char('m')));
		assert_eq!(input.text(), "tim");
	}

	#[test]
	fn cursor_moves_do_not_report_changes() {
		let mut input = SearchInput::new("tim");
		assert!(!input.input(key(KeyCode::Left)));
		input.set_text("");
		assert_eq!(input.text(), "");
	}
}
