use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::Theme;
use crate::tui::input::SearchInput;

/// Everything needed to draw the search prompt line.
pub struct InputContext<'a, 'b> {
	pub search_input: &'a SearchInput<'b>,
	pub title: &'a str,
	pub focused: bool,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the prompt title followed by the text input.
pub fn render_input(frame: &mut Frame, ctx: InputContext<'_, '_>) {
	let prefix = format!("{} > ", ctx.title);
	let prefix_width = u16::try_from(prefix.width()).unwrap_or(u16::MAX);
	let [prefix_area, input_area] =
		Layout::horizontal([Constraint::Length(prefix_width), Constraint::Fill(1)])
			.areas(ctx.area);

	let prompt_style = if ctx.focused {
		ctx.theme.prompt
	} else {
		ctx.theme.empty
	};
	let prompt = Paragraph::new(Line::from(Span::styled(prefix, prompt_style)));
	frame.render_widget(prompt, prefix_area);
	frame.render_widget(ctx.search_input.widget(), input_area);
}
