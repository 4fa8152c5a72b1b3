use anyhow::Result;
use rcpt::PickerOutcome;

/// Render the outcome as plain text: one address per line.
pub(crate) fn format_plain(outcome: &PickerOutcome) -> String {
	if !outcome.accepted {
		return format!("Selection cancelled (query: '{}')", outcome.query);
	}
	if outcome.recipients.is_empty() {
		return "No recipients selected".to_string();
	}
	outcome
		.recipients
		.iter()
		.map(|user| user.email.as_str())
		.collect::<Vec<_>>()
		.join("\n")
}

/// Print a plain-text representation of the picker outcome.
pub(crate) fn print_plain(outcome: &PickerOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the picker outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickerOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the picker outcome.
pub(crate) fn print_json(outcome: &PickerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use rcpt::User;
	use serde_json::Value;

	use super::*;

	#[test]
	fn plain_format_lists_one_address_per_line() {
		let outcome = PickerOutcome::accepted(
			"",
			vec![
				User::selected("tim.duncan@sse.com"),
				User::selected("john@hello.com"),
			],
		);
		assert_eq!(format_plain(&outcome), "tim.duncan@sse.com\njohn@hello.com");
	}

	#[test]
	fn plain_format_reports_cancel_and_empty_selection() {
		assert_eq!(
			format_plain(&PickerOutcome::cancelled("tim")),
			"Selection cancelled (query: 'tim')"
		);
		assert_eq!(
			format_plain(&PickerOutcome::accepted("", Vec::new())),
			"No recipients selected"
		);
	}

	#[test]
	fn json_format_uses_camel_case_records() {
		let outcome = PickerOutcome::accepted("sse", vec![User::selected("tim.duncan@sse.com")]);

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["query"], "sse");
		assert_eq!(value["recipients"][0]["email"], "tim.duncan@sse.com");
		assert_eq!(value["recipients"][0]["isSelected"], true);
	}
}
