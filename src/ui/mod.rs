//! Interactive terminal UI for the recipient picker.
//!
//! The [`builder`] module exposes the public-facing [`PickerUi`] builder. The
//! remaining submodules implement key handling, rendering and the event loop
//! around a [`RecipientPicker`](crate::picker::RecipientPicker).

mod actions;
mod builder;
mod config;
mod render;
mod runtime;
mod state;
#[cfg(test)]
mod tests;

pub use builder::PickerUi;
pub use config::{PaneLabels, UiLabels};
pub use runtime::run;
pub use state::App;
