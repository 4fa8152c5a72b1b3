//! Selection state behind the dual-list picker.
//!
//! [`RecipientPicker`] owns the full address list and every piece of state
//! that decides which pool a user is in and which rows are checked. Views are
//! derived on demand and handed out as borrowed snapshots.

use std::collections::{HashMap, HashSet};

use indexmap::IndexSet;

use super::checked::CheckedSet;
use super::email::{EmailRejection, is_valid_email};
use super::grouping::{GroupView, group_by_domain};
use super::pool::{CheckState, PerPool, Pool};
use super::user::User;

/// Owns the address list, the two pools and their transient view state.
#[derive(Debug, Clone, Default)]
pub struct RecipientPicker {
	users: Vec<User>,
	positions: HashMap<String, usize>,
	/// Emails of the selected pool in the order they joined it.
	selection_order: Vec<String>,
	query: String,
	needle: String,
	checked: PerPool<CheckedSet>,
	expanded: PerPool<HashMap<String, bool>>,
}

impl RecipientPicker {
	/// Build a picker from the initial records.
	///
	/// Later duplicates of an email are dropped so that the email stays a
	/// unique key.
	pub fn new(users: impl IntoIterator<Item = User>) -> Self {
		let mut picker = Self::default();
		for user in users {
			if picker.positions.contains_key(&user.email) {
				log::warn!("ignoring duplicate address {}", user.email);
				continue;
			}
			picker.push(user);
		}
		log::debug!(
			"picker initialised with {} addresses ({} selected)",
			picker.users.len(),
			picker.selection_order.len()
		);
		picker
	}

	/// Append `user` and return the stored entry.
	fn push(&mut self, user: User) -> &User {
		if user.is_selected {
			self.selection_order.push(user.email.clone());
		}
		let index = self.users.len();
		self.positions.insert(user.email.clone(), index);
		self.users.push(user);
		&self.users[index]
	}

	fn lookup(&self, email: &str) -> Option<&User> {
		self.positions
			.get(email)
			.and_then(|&index| self.users.get(index))
	}

	/// The full list in insertion order.
	#[must_use]
	pub fn users(&self) -> &[User] {
		&self.users
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Lowercased query the available pool is filtered by.
	#[must_use]
	pub fn needle(&self) -> &str {
		&self.needle
	}

	/// Replace the search text applied to the available pool.
	///
	/// Checked entries that the new query hides are unchecked.
	pub fn set_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		if query == self.query {
			return;
		}
		self.needle = query.to_lowercase();
		self.query = query;

		let visible: HashSet<&str> = self
			.users
			.iter()
			.filter(|user| !user.is_selected && user.matches_lowercase(&self.needle))
			.map(|user| user.email.as_str())
			.collect();
		self.checked
			.available
			.retain(|email| visible.contains(email));
	}

	/// Users not yet selected whose email contains the query, ignoring case.
	#[must_use]
	pub fn available(&self) -> Vec<&User> {
		self.users
			.iter()
			.filter(|user| !user.is_selected && user.matches_lowercase(&self.needle))
			.collect()
	}

	/// Selected users, oldest selection first.
	#[must_use]
	pub fn selected(&self) -> Vec<&User> {
		self.selection_order
			.iter()
			.filter_map(|email| self.lookup(email))
			.collect()
	}

	/// Visible contents of `pool`.
	#[must_use]
	pub fn pool(&self, pool: Pool) -> Vec<&User> {
		match pool {
			Pool::Available => self.available(),
			Pool::Selected => self.selected(),
		}
	}

	#[must_use]
	pub fn groups(&self, pool: Pool) -> GroupView<'_> {
		group_by_domain(self.pool(pool))
	}

	#[must_use]
	pub fn available_groups(&self) -> GroupView<'_> {
		self.groups(Pool::Available)
	}

	#[must_use]
	pub fn selected_groups(&self) -> GroupView<'_> {
		self.groups(Pool::Selected)
	}

	/// Snapshot of the selected pool as owned records.
	#[must_use]
	pub fn recipients(&self) -> Vec<User> {
		self.selected().into_iter().cloned().collect()
	}

	#[must_use]
	pub fn checked(&self, pool: Pool) -> &CheckedSet {
		self.checked.get(pool)
	}

	#[must_use]
	pub fn is_checked(&self, pool: Pool, email: &str) -> bool {
		self.checked.get(pool).contains(email)
	}

	fn in_pool(&self, pool: Pool, email: &str) -> bool {
		self.lookup(email).is_some_and(|user| match pool {
			Pool::Available => !user.is_selected && user.matches_lowercase(&self.needle),
			Pool::Selected => user.is_selected,
		})
	}

	/// Toggle the checkbox of a single row.
	///
	/// Returns the new checked state; an email outside the pool is ignored.
	pub fn toggle_check(&mut self, pool: Pool, email: &str) -> bool {
		if !self.in_pool(pool, email) {
			return false;
		}
		self.checked.get_mut(pool).toggle(email)
	}

	/// Whether every member of the domain group is checked.
	#[must_use]
	pub fn is_group_checked(&self, pool: Pool, domain: &str) -> bool {
		let view = self.groups(pool);
		let checked = self.checked.get(pool);
		view.group(domain)
			.is_some_and(|group| group.emails().all(|email| checked.contains(email)))
	}

	/// Check or uncheck every member of a domain group at once.
	pub fn set_group_checked(&mut self, pool: Pool, domain: &str, checked: bool) {
		let members: Vec<String> = match self.groups(pool).group(domain) {
			Some(group) => group.emails().map(str::to_string).collect(),
			None => return,
		};
		let set = self.checked.get_mut(pool);
		if checked {
			set.insert_all(members.iter().map(String::as_str));
		} else {
			set.remove_all(members.iter().map(String::as_str));
		}
	}

	/// Flip a group header checkbox, returning the new header state.
	pub fn toggle_group_check(&mut self, pool: Pool, domain: &str) -> bool {
		let checked = !self.is_group_checked(pool, domain);
		self.set_group_checked(pool, domain, checked);
		self.is_group_checked(pool, domain)
	}

	/// Tri-state of the select-all checkbox for `pool`.
	#[must_use]
	pub fn select_all_state(&self, pool: Pool) -> CheckState {
		let members = self.pool(pool);
		let checked = self.checked.get(pool);
		let count = members
			.iter()
			.filter(|user| checked.contains(&user.email))
			.count();
		CheckState::from_counts(count, members.len())
	}

	/// Check every visible row of `pool`, or clear the checked set.
	pub fn set_all_checked(&mut self, pool: Pool, checked: bool) {
		if checked {
			let emails: Vec<String> = self
				.pool(pool)
				.into_iter()
				.map(|user| user.email.clone())
				.collect();
			let set = self.checked.get_mut(pool);
			set.clear();
			set.insert_all(emails.iter().map(String::as_str));
		} else {
			self.checked.get_mut(pool).clear();
		}
	}

	/// Click on the select-all checkbox: anything short of fully checked
	/// becomes fully checked, fully checked becomes empty.
	pub fn toggle_select_all(&mut self, pool: Pool) -> CheckState {
		let checked = !self.select_all_state(pool).is_checked();
		self.set_all_checked(pool, checked);
		self.select_all_state(pool)
	}

	/// Move every checked available user into the selected pool.
	///
	/// Returns the number of users moved.
	pub fn add_recipients(&mut self) -> usize {
		let moved: IndexSet<String> = self
			.available()
			.into_iter()
			.filter(|user| self.checked.available.contains(&user.email))
			.map(|user| user.email.clone())
			.collect();
		self.checked.available.clear();
		if moved.is_empty() {
			return 0;
		}

		self.replace_membership(&moved, true);
		self.selection_order.extend(moved.iter().cloned());
		log::info!("added {} recipient(s)", moved.len());
		moved.len()
	}

	/// Move every checked selected user back to the available pool.
	///
	/// Returns the number of users moved.
	pub fn remove_recipients(&mut self) -> usize {
		let moved: IndexSet<String> = self
			.selected()
			.into_iter()
			.filter(|user| self.checked.selected.contains(&user.email))
			.map(|user| user.email.clone())
			.collect();
		self.checked.selected.clear();
		if moved.is_empty() {
			return 0;
		}

		self.replace_membership(&moved, false);
		self.selection_order.retain(|email| !moved.contains(email));
		log::info!("removed {} recipient(s)", moved.len());
		moved.len()
	}

	fn replace_membership(&mut self, emails: &IndexSet<String>, is_selected: bool) {
		self.users = self
			.users
			.iter()
			.map(|user| {
				if emails.contains(&user.email) {
					user.with_selected(is_selected)
				} else {
					user.clone()
				}
			})
			.collect();
	}

	/// Decide whether `text` could be added as a new address.
	pub fn check_new_email(&self, text: &str) -> Result<(), EmailRejection> {
		if !is_valid_email(text) {
			return Err(EmailRejection::Malformed(text.to_string()));
		}
		match self.lookup(text) {
			Some(user) if user.is_selected => Err(EmailRejection::AlreadySelected(text.to_string())),
			Some(_) => Err(EmailRejection::AlreadyListed(text.to_string())),
			None => Ok(()),
		}
	}

	/// Whether the current search text is a new, well-formed address.
	#[must_use]
	pub fn can_add_query_as_email(&self) -> bool {
		self.check_new_email(&self.query).is_ok()
	}

	/// Append `text` to the list as an available user.
	///
	/// Malformed or already known addresses leave the picker untouched.
	pub fn add_email(&mut self, text: &str) -> Result<&User, EmailRejection> {
		self.check_new_email(text)?;
		let user = self.push(User::available(text));
		log::info!("added new address {}", user.email);
		Ok(user)
	}

	#[must_use]
	pub fn is_expanded(&self, pool: Pool, domain: &str) -> bool {
		self.expanded
			.get(pool)
			.get(domain)
			.copied()
			.unwrap_or(false)
	}

	/// Flip the expansion flag of a domain group, returning the new value.
	pub fn toggle_expanded(&mut self, pool: Pool, domain: &str) -> bool {
		let entry = self
			.expanded
			.get_mut(pool)
			.entry(domain.to_string())
			.or_insert(false);
		*entry = !*entry;
		*entry
	}

	/// Set the expansion flag of a domain group.
	pub fn set_expanded(&mut self, pool: Pool, domain: &str, expanded: bool) {
		self.expanded
			.get_mut(pool)
			.insert(domain.to_string(), expanded);
	}
}
