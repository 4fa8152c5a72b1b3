//! Selection, filtering and grouping logic of the recipient picker.
//!
//! Nothing in here touches the terminal: the [`RecipientPicker`] state
//! machine can be driven by any front-end that forwards row, group and
//! select-all clicks and redraws from the returned snapshots.

mod checked;
mod email;
mod grouping;
mod outcome;
mod pool;
mod rows;
mod state;
mod user;

pub use checked::CheckedSet;
pub use email::{EmailRejection, is_valid_email};
pub use grouping::{DomainGroup, GroupView, group_by_domain};
pub use outcome::PickerOutcome;
pub use pool::{CheckState, PerPool, Pool};
pub use rows::PaneRow;
pub use state::RecipientPicker;
pub use user::User;
