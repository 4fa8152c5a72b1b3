//! Log routing for the terminal UI.
//!
//! Records go through the `log` facade into `tui-logger`, which buffers them
//! for the in-UI log panel instead of writing over the alternate screen. The
//! sink moves records into the widget history on its own thread.

use std::str::FromStr;
use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the `tui-logger` sink (once per process) and set the display level.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		// Another logger may already own the facade, e.g. in tests.
		let _ = tui_logger::init_logger(LevelFilter::Trace);
	});
	tui_logger::set_default_level(level);
	log::set_max_level(level);
}

/// Parse a level name such as `info` or `DEBUG`.
#[must_use]
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	LevelFilter::from_str(value.trim()).ok()
}
