use indexmap::IndexSet;

/// Emails marked via checkbox and awaiting a move, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedSet {
	emails: IndexSet<String>,
}

impl CheckedSet {
	#[must_use]
	pub fn contains(&self, email: &str) -> bool {
		self.emails.contains(email)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.emails.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.emails.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.emails.iter().map(String::as_str)
	}

	/// Flip membership of `email`, returning whether it is now checked.
	pub(crate) fn toggle(&mut self, email: &str) -> bool {
		if self.emails.shift_remove(email) {
			false
		} else {
			self.emails.insert(email.to_string());
			true
		}
	}

	pub(crate) fn insert_all<'a>(&mut self, emails: impl IntoIterator<Item = &'a str>) {
		for email in emails {
			if !self.emails.contains(email) {
				self.emails.insert(email.to_string());
			}
		}
	}

	pub(crate) fn remove_all<'a>(&mut self, emails: impl IntoIterator<Item = &'a str>) {
		for email in emails {
			self.emails.shift_remove(email);
		}
	}

	pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
		self.emails.retain(|email| keep(email));
	}

	pub(crate) fn clear(&mut self) {
		self.emails.clear();
	}
}
