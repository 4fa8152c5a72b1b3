//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point: it layers configuration files,
//! environment variables and CLI flags, then returns a validated
//! [`ResolvedConfig`] that is used by the application.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::{RecipientSource, ResolvedConfig};
