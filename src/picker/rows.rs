use super::{Pool, RecipientPicker, User};

/// One line of a pane as it would be drawn, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneRow<'a> {
	/// Header of a multi-member domain group.
	Group {
		domain: &'a str,
		size: usize,
		checked: bool,
		expanded: bool,
	},
	/// A single address, either inside an expanded group or ungrouped.
	Member {
		user: &'a User,
		checked: bool,
		nested: bool,
	},
}

impl<'a> PaneRow<'a> {
	/// Domain of the group this row heads or belongs to.
	#[must_use]
	pub fn group_domain(&self) -> Option<&'a str> {
		match self {
			PaneRow::Group { domain, .. } => Some(*domain),
			PaneRow::Member {
				user, nested: true, ..
			} => user.domain(),
			PaneRow::Member { .. } => None,
		}
	}
}

impl RecipientPicker {
	/// Flatten a pool into display rows: groups first (members listed only
	/// when expanded), then ungrouped users.
	#[must_use]
	pub fn rows(&self, pool: Pool) -> Vec<PaneRow<'_>> {
		let view = self.groups(pool);
		let checked = self.checked(pool);
		let mut rows = Vec::with_capacity(view.len() + view.groups.len());

		for group in &view.groups {
			let expanded = self.is_expanded(pool, group.domain);
			rows.push(PaneRow::Group {
				domain: group.domain,
				size: group.len(),
				checked: group.emails().all(|email| checked.contains(email)),
				expanded,
			});
			if expanded {
				rows.extend(group.members.iter().map(|&user| PaneRow::Member {
					user,
					checked: checked.contains(&user.email),
					nested: true,
				}));
			}
		}

		rows.extend(view.ungrouped.iter().map(|&user| PaneRow::Member {
			user,
			checked: checked.contains(&user.email),
			nested: false,
		}));

		rows
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn picker() -> RecipientPicker {
		RecipientPicker::new(vec![
			User::available("tim.duncan@sse.com"),
			User::available("john@hello.com"),
			User::available("tony.parker@sse.com"),
		])
	}

	#[test]
	fn collapsed_groups_hide_members() {
		let picker = picker();
		let rows = picker.rows(Pool::Available);

		assert_eq!(rows.len(), 2);
		assert!(matches!(
			rows[0],
			PaneRow::Group {
				domain: "sse.com",
				size: 2,
				checked: false,
				expanded: false
			}
		));
		assert!(matches!(
			rows[1],
			PaneRow::Member { user, nested: false, .. } if user.email == "john@hello.com"
		));
	}

	#[test]
	fn expanded_groups_list_members_after_header() {
		let mut picker = picker();
		picker.toggle_expanded(Pool::Available, "sse.com");
		picker.toggle_check(Pool::Available, "tony.parker@sse.com");
		let rows = picker.rows(Pool::Available);

		assert_eq!(rows.len(), 4);
		assert!(matches!(
			rows[2],
			PaneRow::Member { user, checked: true, nested: true } if user.email == "tony.parker@sse.com"
		));
		assert_eq!(rows[1].group_domain(), Some("sse.com"));
		assert_eq!(rows[3].group_domain(), None);
	}
}
