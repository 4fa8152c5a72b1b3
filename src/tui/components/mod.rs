//! UI building blocks shared across rendering and state modules.

/// Checkbox and chevron glyphs.
pub mod checkbox;
/// Input prompt rendering.
pub mod prompt;
/// Table row construction and highlighting.
pub mod rows;
/// Bordered pane tables.
pub mod tables;

pub use prompt::{InputContext, render_input};
pub use tables::{PaneSpec, render_pane};
