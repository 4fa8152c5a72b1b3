//! Terminal UI building blocks for rendering the picker.
//!
//! The submodules here expose reusable widgets, the search input, and the
//! built-in themes used by the higher level orchestration in [`crate::ui`].

pub mod components;
pub mod input;
pub mod theme;

pub use input::SearchInput;
pub use theme::{Theme, default_theme};
