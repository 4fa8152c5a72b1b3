use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `rcpt` binary.
#[derive(Parser, Debug)]
#[command(
	name = "rcpt",
	version,
	long_version = long_version(),
	about = "Pick email recipients from a searchable, domain-grouped list",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "RCPT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long = "users",
		value_name = "FILE",
		help = "Read the address list from a JSON array of {email, isSelected} (default: configuration)"
	)]
	pub(crate) users: Option<PathBuf>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the search prompt title (default: Search)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "available-title",
		value_name = "TEXT",
		help = "Title of the available pane (default: Available)"
	)]
	pub(crate) available_title: Option<String>,
	#[arg(
		long = "selected-title",
		value_name = "TEXT",
		help = "Title of the selected pane (default: Selected)"
	)]
	pub(crate) selected_title: Option<String>,
	#[arg(
		long = "add-email-label",
		value_name = "TEXT",
		help = "Label of the add-address hint (default: Add Email)"
	)]
	pub(crate) add_email_label: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Level shown in the log panel: off, error, warn, info, debug, trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
