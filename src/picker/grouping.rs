use indexmap::IndexMap;

use super::User;

/// Users sharing an email domain, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainGroup<'a> {
	pub domain: &'a str,
	pub members: Vec<&'a User>,
}

impl<'a> DomainGroup<'a> {
	#[must_use]
	pub fn len(&self) -> usize {
		self.members.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	pub fn emails(&self) -> impl Iterator<Item = &'a str> + '_ {
		self.members.iter().map(|user| user.email.as_str())
	}
}

/// Derived grouping of one pool: multi-member domains plus everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupView<'a> {
	/// Domains with two or more members, in first-encounter order.
	pub groups: Vec<DomainGroup<'a>>,
	/// Users whose domain has a single member (or no domain), in input order.
	pub ungrouped: Vec<&'a User>,
}

impl<'a> GroupView<'a> {
	#[must_use]
	pub fn group(&self, domain: &str) -> Option<&DomainGroup<'a>> {
		self.groups.iter().find(|group| group.domain == domain)
	}

	/// Total number of users across groups and ungrouped rows.
	#[must_use]
	pub fn len(&self) -> usize {
		self.groups.iter().map(DomainGroup::len).sum::<usize>() + self.ungrouped.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty() && self.ungrouped.is_empty()
	}
}

/// Partition `users` by the text after the first `@`.
pub fn group_by_domain<'a, I>(users: I) -> GroupView<'a>
where
	I: IntoIterator<Item = &'a User>,
{
	let users: Vec<&'a User> = users.into_iter().collect();
	let mut buckets: IndexMap<&'a str, Vec<&'a User>> = IndexMap::new();
	for user in &users {
		if let Some(domain) = user.domain() {
			buckets.entry(domain).or_default().push(user);
		}
	}

	let ungrouped = users
		.iter()
		.copied()
		.filter(|user| {
			user.domain()
				.and_then(|domain| buckets.get(domain))
				.is_none_or(|members| members.len() < 2)
		})
		.collect();

	let groups = buckets
		.into_iter()
		.filter(|(_, members)| members.len() > 1)
		.map(|(domain, members)| DomainGroup { domain, members })
		.collect();

	GroupView { groups, ungrouped }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn users(emails: &[&str]) -> Vec<User> {
		emails.iter().map(|email| User::available(*email)).collect()
	}

	#[test]
	fn groups_need_two_members() {
		let list = users(&[
			"tim.duncan@sse.com",
			"boris.diaw@natgeo.com",
			"tony.parker@sse.com",
			"john@hello.com",
		]);
		let view = group_by_domain(&list);

		assert_eq!(view.groups.len(), 1);
		let sse = view.group("sse.com").expect("sse.com group");
		assert_eq!(
			sse.emails().collect::<Vec<_>>(),
			vec!["tim.duncan@sse.com", "tony.parker@sse.com"]
		);
		assert_eq!(
			view.ungrouped
				.iter()
				.map(|user| user.email.as_str())
				.collect::<Vec<_>>(),
			vec!["boris.diaw@natgeo.com", "john@hello.com"]
		);
	}

	#[test]
	fn group_order_is_first_encounter() {
		let list = users(&["a@two.com", "a@one.com", "b@one.com", "b@two.com"]);
		let view = group_by_domain(&list);
		let domains: Vec<_> = view.groups.iter().map(|group| group.domain).collect();
		assert_eq!(domains, vec!["two.com", "one.com"]);
	}

	#[test]
	fn never_drops_users() {
		let list = users(&[
			"a@x.com",
			"b@x.com",
			"c@y.com",
			"nodomain",
			"other-nodomain",
			"d@z.com",
			"e@z.com",
			"f@z.com",
		]);
		let view = group_by_domain(&list);

		assert_eq!(view.len(), list.len());
		assert!(view.groups.iter().all(|group| group.len() >= 2));
		assert!(view.ungrouped.iter().any(|user| user.email == "nodomain"));
		assert!(view.ungrouped.iter().any(|user| user.email == "c@y.com"));
	}

	#[test]
	fn empty_input_yields_empty_view() {
		let view = group_by_domain(std::iter::empty());
		assert!(view.is_empty());
		assert_eq!(view.len(), 0);
	}
}
