use rcpt::Pool;

use super::super::util::display_path;
use super::{RecipientSource, ResolvedConfig};

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("{}", format_summary(config));
}

fn format_summary(config: &ResolvedConfig) -> String {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(format!(
		"  Recipients: {}",
		match &config.recipients {
			RecipientSource::File(path) => format!("file {}", display_path(path)),
			RecipientSource::Inline(users) => format!("{} inline addresses", users.len()),
			RecipientSource::Empty => "(none)".to_string(),
		}
	));
	lines.push(format!(
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	));
	lines.push(format!("  Prompt title: {}", config.labels.input_title));
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!(
		"  Pane titles: {} / {}",
		config.labels.pane(Pool::Available).title,
		config.labels.pane(Pool::Selected).title
	));
	lines.push(format!(
		"  Add email label: {}",
		config.labels.add_email_label
	));
	lines.push(format!("  Log level: {}", config.log_level));
	lines.join("\n")
}
