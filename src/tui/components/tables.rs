use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState,
};

use crate::tui::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;
const CHECKBOX_COLUMN_WIDTH: u16 = 3;

/// Fully materialized pane configuration.
pub struct PaneSpec<'a> {
	/// Select-all glyph shown above the checkbox column.
	pub select_all: &'static str,
	/// Column header next to the select-all glyph.
	pub heading: String,
	/// Title rendered on the pane border.
	pub title: Option<String>,
	pub rows: Vec<Row<'a>>,
	/// Message shown instead of rows when the pane is empty.
	pub empty_message: &'a str,
	pub focused: bool,
}

/// Render one bordered pane with its select-all header and rows.
pub fn render_pane(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: PaneSpec<'_>,
	theme: &Theme,
) {
	let border_style = if spec.focused {
		theme.focused_border_style()
	} else {
		theme.border_style()
	};
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style);
	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header_style = Style::default().fg(theme.header_fg());
	let header = Row::new([Cell::from(spec.select_all), Cell::from(spec.heading)])
		.style(header_style)
		.height(1)
		.bottom_margin(1);

	let is_empty = spec.rows.is_empty();
	let widths = [Constraint::Length(CHECKBOX_COLUMN_WIDTH), Constraint::Fill(1)];
	let highlight_spacing = if spec.focused {
		HighlightSpacing::WhenSelected
	} else {
		HighlightSpacing::Never
	};
	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(highlight_spacing)
		.row_highlight_style(if spec.focused {
			theme.row_highlight
		} else {
			Style::default()
		})
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);

	render_header_separator(frame, inner, theme, 1);

	if is_empty && inner.height > TABLE_HEADER_ROWS {
		let message_area = Rect {
			x: inner.x,
			y: inner.y + TABLE_HEADER_ROWS,
			width: inner.width,
			height: inner.height - TABLE_HEADER_ROWS,
		};
		let empty = Paragraph::new(Span::styled(spec.empty_message, theme.empty))
			.alignment(Alignment::Center);
		frame.render_widget(empty, message_area);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let sep_y = area.y + header_height;
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: sep_y,
		width: area.width,
		height: 1,
	};
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle = "─".repeat(width - 2);
	let middle_span = Span::styled(middle, Style::default().fg(theme.header_fg()));
	let spans = vec![Span::raw(" "), middle_span, Span::raw(" ")];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}
