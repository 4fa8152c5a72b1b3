//! Colour themes for the picker.
//!
//! Themes are compiled in; [`by_name`] resolves a configured name or alias.

mod builtins;
mod lookup;
mod types;

pub use lookup::{by_name, definitions, find, names};
pub use types::{Theme, ThemeDefinition};

/// The theme used when no name is configured.
#[must_use]
pub fn default_theme() -> Theme {
	builtins::SLATE
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
