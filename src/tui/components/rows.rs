use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

use super::checkbox::{checkbox, chevron};
use crate::picker::PaneRow;
use crate::tui::Theme;

const NESTED_INDENT: &str = "  ";

/// Byte range of the first occurrence of `needle` in `text`, comparing the
/// lowercase form of each character. `needle` must already be lowercase.
#[must_use]
pub fn match_range(text: &str, needle: &str) -> Option<(usize, usize)> {
	if needle.is_empty() {
		return None;
	}
	text.char_indices()
		.find_map(|(start, _)| matched_len(&text[start..], needle).map(|len| (start, start + len)))
}

/// Length in bytes of the prefix of `text` whose lowercase form is `needle`.
fn matched_len(text: &str, needle: &str) -> Option<usize> {
	let mut expected = needle.chars().peekable();
	for (offset, c) in text.char_indices() {
		for lower in c.to_lowercase() {
			if expected.next() != Some(lower) {
				return None;
			}
		}
		if expected.peek().is_none() {
			return Some(offset + c.len_utf8());
		}
	}
	None
}

/// Split `text` into spans with the matched part styled as a highlight.
#[must_use]
pub fn highlight_line<'a>(text: &'a str, needle: Option<&str>, highlight: Style) -> Line<'a> {
	let Some((start, end)) = needle.and_then(|needle| match_range(text, needle)) else {
		return Line::from(text);
	};

	let mut spans = Vec::with_capacity(3);
	if start > 0 {
		spans.push(Span::raw(&text[..start]));
	}
	spans.push(Span::styled(&text[start..end], highlight));
	if end < text.len() {
		spans.push(Span::raw(&text[end..]));
	}
	Line::from(spans)
}

/// Build table rows for one pane.
#[must_use]
pub fn build_pane_rows<'a>(rows: &[PaneRow<'a>], needle: Option<&str>, theme: &Theme) -> Vec<Row<'a>> {
	rows.iter()
		.map(|row| match *row {
			PaneRow::Group {
				domain,
				size,
				checked,
				expanded,
			} => {
				let label = Line::from(vec![
					Span::raw(format!("{} ", chevron(expanded))),
					Span::styled(domain, theme.group),
					Span::raw(format!(" ({size})")),
				]);
				Row::new([Cell::from(checkbox(checked)), Cell::from(label)])
			}
			PaneRow::Member {
				user,
				checked,
				nested,
			} => {
				let mut label = highlight_line(&user.email, needle, theme.highlight);
				if nested {
					label.spans.insert(0, Span::raw(NESTED_INDENT));
				}
				Row::new([Cell::from(checkbox(checked)), Cell::from(label)])
			}
		})
		.collect()
}
