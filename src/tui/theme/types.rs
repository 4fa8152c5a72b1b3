use ratatui::style::{Color, Style};

/// Colours applied to the picker's panes, rows and prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Pane column headings and the rule below them.
	pub header: Style,
	/// Row under the cursor of the focused pane.
	pub row_highlight: Style,
	/// Prompt prefix and the focused pane border.
	pub prompt: Style,
	/// Empty-pane messages, counts and unfocused borders.
	pub empty: Style,
	/// Search matches and the add-address hint.
	pub highlight: Style,
	/// Domain labels of group headers.
	pub group: Style,
}

impl Theme {
	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn focused_border_style(&self) -> Style {
		Style::new().fg(self.prompt.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.empty.fg.unwrap_or(Color::Reset))
	}
}

/// A theme bundled with the binary, selectable by name or alias.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			aliases: &[],
			theme,
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	/// Whether `key`, already normalised, names this theme.
	pub(super) fn answers_to(&self, key: &str) -> bool {
		std::iter::once(self.name)
			.chain(self.aliases.iter().copied())
			.any(|candidate| super::lookup::normalize_name(candidate) == key)
	}
}
