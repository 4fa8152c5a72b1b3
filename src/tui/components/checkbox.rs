use crate::picker::CheckState;

pub const UNCHECKED: &str = "[ ]";
pub const INDETERMINATE: &str = "[-]";
pub const CHECKED: &str = "[x]";

pub const EXPANDED: &str = "▾";
pub const COLLAPSED: &str = "▸";

/// Glyph for a tri-state checkbox.
#[must_use]
pub fn tri_state(state: CheckState) -> &'static str {
	match state {
		CheckState::Unchecked => UNCHECKED,
		CheckState::Indeterminate => INDETERMINATE,
		CheckState::Checked => CHECKED,
	}
}

/// Glyph for a two-state checkbox.
#[must_use]
pub fn checkbox(checked: bool) -> &'static str {
	if checked { CHECKED } else { UNCHECKED }
}

#[must_use]
pub fn chevron(expanded: bool) -> &'static str {
	if expanded { EXPANDED } else { COLLAPSED }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn glyphs_match_states() {
		assert_eq!(tri_state(CheckState::Unchecked), "[ ]");
		assert_eq!(tri_state(CheckState::Indeterminate), "[-]");
		assert_eq!(tri_state(CheckState::Checked), "[x]");
		assert_eq!(checkbox(true), tri_state(CheckState::Checked));
		assert_eq!(chevron(false), "▸");
	}
}
