use rustc_hash::FxHashMap as HashMap;

use crate::entry::RosterEntry;
use crate::props::Properties;
use crate::selector::Selector;


/// Frozen, ordered table of every entry declared for one enumeration type.
///
/// Built once by [`RosterBuilder`](crate::RosterBuilder) and then shared
/// read-only for the process lifetime. Entries keep declaration order, which
/// is also strictly increasing ordinal order, so ordinal lookup is a binary
/// search over the table itself.
pub struct Roster<T: RosterEntry + Send + Sync + 'static> {
	label: &'static str,
	entries: Vec<T>,
	by_name: HashMap<&'static str, usize>,
}

impl<T: RosterEntry + Send + Sync + 'static> Roster<T> {
	pub(crate) fn new(label: &'static str, entries: Vec<T>) -> Self {
		let mut by_name = HashMap::with_capacity_and_hasher(entries.len(), Default::default());
		for (slot, entry) in entries.iter().enumerate() {
			by_name.insert(entry.name(), slot);
		}
		Self {
			label,
			entries,
			by_name,
		}
	}

	/// Returns the label the roster was built under.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns every entry in declaration order.
	#[inline]
	pub fn entries(&self) -> &[T] {
		&self.entries
	}

	/// Returns the number of entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the roster holds no entries.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns an iterator over the entries in declaration order.
	pub fn iter(&self) -> core::slice::Iter<'_, T> {
		self.entries.iter()
	}

	/// Looks up an entry by exact, case-sensitive name.
	#[inline]
	pub fn get(&self, name: &str) -> Option<&T> {
		self.by_name.get(name).map(|&slot| &self.entries[slot])
	}

	/// Looks up an entry by ordinal.
	///
	/// Negative and unassigned ordinals miss.
	#[inline]
	pub fn get_ordinal(&self, ordinal: i64) -> Option<&T> {
		self.entries
			.binary_search_by_key(&ordinal, |entry| entry.ordinal())
			.ok()
			.map(|slot| &self.entries[slot])
	}

	/// Looks up the single entry whose properties contain every key and
	/// value in `query`.
	///
	/// An empty query finds nothing, and a query satisfied by more than one
	/// entry finds nothing.
	pub fn get_matching(&self, query: &Properties) -> Option<&T> {
		if query.is_empty() {
			return None;
		}
		let mut found = None;
		for entry in &self.entries {
			if entry.properties().contains_all(query) {
				if found.is_some() {
					return None;
				}
				found = Some(entry);
			}
		}
		found
	}

	/// Looks up an entry through a [`Selector`].
	pub fn lookup(&self, selector: Selector<'_>) -> Option<&T> {
		match selector {
			Selector::Ordinal(ordinal) => self.get_ordinal(ordinal),
			Selector::Name(name) => self.get(name),
			Selector::Props(query) => self.get_matching(query),
		}
	}

	/// Returns the declared name closest to `name` within a Levenshtein
	/// distance of 3, for "did you mean" diagnostics.
	pub fn suggest(&self, name: &str) -> Option<&'static str> {
		self.entries
			.iter()
			.map(|entry| entry.name())
			.min_by_key(|candidate| strsim::levenshtein(name, candidate))
			.filter(|candidate| strsim::levenshtein(name, candidate) <= 3)
	}
}

impl<'a, T: RosterEntry + Send + Sync + 'static> IntoIterator for &'a Roster<T> {
	type Item = &'a T;
	type IntoIter = core::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T: RosterEntry + Send + Sync + 'static> core::fmt::Debug for Roster<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Roster")
			.field("label", &self.label)
			.field("len", &self.entries.len())
			.finish()
	}
}
