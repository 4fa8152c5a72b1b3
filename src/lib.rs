//! Core crate exports for building and running the `rcpt` recipient picker.
//!
//! The root module re-exports the picker model and the UI builder so that
//! embedders can drive the picker without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod picker;
pub mod tui;
pub mod ui;

pub use picker::{
	CheckState, EmailRejection, GroupView, PickerOutcome, Pool, RecipientPicker, User,
};
pub use ui::{PaneLabels, PickerUi, UiLabels, run};

pub use crate::tui::input::SearchInput;
pub use crate::tui::theme::{Theme, default_theme};
