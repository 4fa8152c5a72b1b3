use std::fmt;

/// One of the two partitions of the address list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
	Available,
	Selected,
}

impl Pool {
	pub const ALL: [Pool; 2] = [Pool::Available, Pool::Selected];

	/// The pool on the opposite side of the picker.
	#[must_use]
	pub const fn other(self) -> Self {
		match self {
			Pool::Available => Pool::Selected,
			Pool::Selected => Pool::Available,
		}
	}

	/// Whether users in this pool have `is_selected` set.
	#[must_use]
	pub const fn is_selected(self) -> bool {
		matches!(self, Pool::Selected)
	}
}

impl fmt::Display for Pool {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Pool::Available => f.write_str("available"),
			Pool::Selected => f.write_str("selected"),
		}
	}
}

/// A pair of values, one per [`Pool`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerPool<T> {
	pub available: T,
	pub selected: T,
}

impl<T> PerPool<T> {
	#[must_use]
	pub fn get(&self, pool: Pool) -> &T {
		match pool {
			Pool::Available => &self.available,
			Pool::Selected => &self.selected,
		}
	}

	pub fn get_mut(&mut self, pool: Pool) -> &mut T {
		match pool {
			Pool::Available => &mut self.available,
			Pool::Selected => &mut self.selected,
		}
	}
}

/// State of a tri-state checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
	Unchecked,
	Indeterminate,
	Checked,
}

impl CheckState {
	/// Derive the state from how many of `total` entries are checked.
	#[must_use]
	pub fn from_counts(checked: usize, total: usize) -> Self {
		match (checked, total) {
			(0, _) => CheckState::Unchecked,
			(checked, total) if checked >= total => CheckState::Checked,
			_ => CheckState::Indeterminate,
		}
	}

	#[must_use]
	pub fn is_checked(self) -> bool {
		matches!(self, CheckState::Checked)
	}
}
