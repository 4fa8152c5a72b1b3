use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::App;
use crate::picker::Pool;
use crate::tui::components::checkbox::tri_state;
use crate::tui::components::rows::build_pane_rows;
use crate::tui::components::{InputContext, PaneSpec, render_input, render_pane};

const LOG_PANEL_HEIGHT: u16 = 8;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let log_height = if self.show_logs { LOG_PANEL_HEIGHT } else { 0 };
		let [input_area, panes_area, status_area, log_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
			Constraint::Length(log_height),
		])
		.areas(area);

		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				title: &self.ui.input_title,
				focused: self.focus == Pool::Available,
				area: input_area,
				theme: &self.theme,
			},
		);

		let [available_area, selected_area] =
			Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
				.areas(panes_area);
		self.render_pool(frame, available_area, Pool::Available);
		self.render_pool(frame, selected_area, Pool::Selected);

		frame.render_widget(Paragraph::new(self.status_line()), status_area);

		if self.show_logs {
			self.render_logs(frame, log_area);
		}
	}

	fn render_pool(&mut self, frame: &mut Frame, area: Rect, pool: Pool) {
		let needle = match pool {
			Pool::Available => Some(self.picker.needle()).filter(|needle| !needle.is_empty()),
			Pool::Selected => None,
		};
		let labels = self.ui.pane(pool);
		let rows = self.picker.rows(pool);
		let spec = PaneSpec {
			select_all: tri_state(self.picker.select_all_state(pool)),
			heading: self.ui.heading.clone(),
			title: Some(format!(
				" {} ({}) ",
				labels.title,
				self.picker.pool(pool).len()
			)),
			rows: build_pane_rows(&rows, needle, &self.theme),
			empty_message: &labels.empty,
			focused: self.focus == pool,
		};
		render_pane(frame, area, self.cursors.get_mut(pool), spec, &self.theme);
	}

	fn status_line(&self) -> Line<'static> {
		let checked = self.picker.checked(self.focus).len();
		let mut spans = vec![
			Span::styled(format!("{checked} checked"), self.theme.empty),
			Span::raw("  "),
			Span::styled(
				format!("Enter: {}", self.ui.move_action(self.focus)),
				self.theme.prompt,
			),
		];
		if self.picker.can_add_query_as_email() {
			spans.push(Span::raw("  "));
			spans.push(Span::styled(
				format!(
					"Ctrl+N: {} {}",
					self.ui.add_email_label,
					self.picker.query()
				),
				self.theme.highlight,
			));
		}
		Line::from(spans)
	}

	fn render_logs(&self, frame: &mut Frame, area: Rect) {
		let widget = TuiLoggerWidget::default()
			.block(
				Block::default()
					.title(" Log ")
					.borders(Borders::ALL)
					.border_set(ratatui::symbols::border::ROUNDED)
					.border_style(self.theme.border_style()),
			)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.state(&self.log_state);
		frame.render_widget(widget, area);
	}
}
