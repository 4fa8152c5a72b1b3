use crate::picker::{PerPool, Pool};

/// Title and empty-state message for one pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneLabels {
	pub title: String,
	pub empty: String,
}

impl PaneLabels {
	#[must_use]
	pub fn new(title: impl Into<String>, empty: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			empty: empty.into(),
		}
	}
}

/// Text used by the UI when rendering the prompt, panes and status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	pub input_title: String,
	pub panes: PerPool<PaneLabels>,
	/// Column heading above the addresses.
	pub heading: String,
	pub add_email_label: String,
	pub add_action: String,
	pub remove_action: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			input_title: "Search".to_string(),
			panes: PerPool {
				available: PaneLabels::new("Available", "No matching addresses"),
				selected: PaneLabels::new("Selected", "No recipients selected"),
			},
			heading: "Email".to_string(),
			add_email_label: "Add Email".to_string(),
			add_action: "Add".to_string(),
			remove_action: "Remove".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn pane(&self, pool: Pool) -> &PaneLabels {
		self.panes.get(pool)
	}

	pub fn pane_mut(&mut self, pool: Pool) -> &mut PaneLabels {
		self.panes.get_mut(pool)
	}

	/// Label of the move that `Enter` performs from `pool`.
	#[must_use]
	pub fn move_action(&self, pool: Pool) -> &str {
		match pool {
			Pool::Available => &self.add_action,
			Pool::Selected => &self.remove_action,
		}
	}
}
