mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::PickerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for definition in rcpt::tui::theme::definitions() {
			if definition.aliases.is_empty() {
				println!("{}", definition.name);
			} else {
				println!("{} ({})", definition.name, definition.aliases.join(", "));
			}
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	rcpt::logging::initialize(resolved.log_level());

	if cli.print_config {
		resolved.print_summary();
	}

	run_picker(cli.output, resolved)
}

/// Execute the picker workflow and print output in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = PickerWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
