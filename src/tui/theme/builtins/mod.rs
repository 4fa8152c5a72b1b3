use super::types::ThemeDefinition;

mod light;
mod slate;
mod solarized;

pub use slate::SLATE;

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] =
	&[slate::DEFINITION, light::DEFINITION, solarized::DEFINITION];
