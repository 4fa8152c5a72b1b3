use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::{Theme, ThemeDefinition};

/// Lowercase and fold `_` and spaces into `-`, so `Solarized Light`,
/// `solarized_light` and `solarized-light` are one key.
pub(super) fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.map(|c| match c {
			'_' | ' ' => '-',
			other => other.to_ascii_lowercase(),
		})
		.collect()
}

/// Every built-in theme, default first.
#[must_use]
pub fn definitions() -> &'static [ThemeDefinition] {
	BUILT_IN_DEFINITIONS
}

/// Definition answering to `name` or one of its aliases.
#[must_use]
pub fn find(name: &str) -> Option<&'static ThemeDefinition> {
	let key = normalize_name(name);
	if key.is_empty() {
		return None;
	}
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(&key))
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	find(name).map(|definition| definition.theme)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<&'static str> = BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable();
	names
}
