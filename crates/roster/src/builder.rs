use crate::entry::{EntryMeta, RosterEntry};
use crate::error::DeclareError;
use crate::roster::Roster;


/// Builder for constructing a [`Roster`].
///
/// One builder declares the complete entry list of one enumeration type, in
/// order. Ordinals come from an internal counter that starts at 0;
/// [`declare_at`](Self::declare_at) may jump the counter forward to leave a
/// gap but can never move it back, so ordinals strictly increase in
/// declaration order.
pub struct RosterBuilder<T: RosterEntry + Send + Sync + 'static> {
	label: &'static str,
	entries: Vec<T>,
	next_ordinal: i64,
}

impl<T: RosterEntry + Send + Sync + 'static> RosterBuilder<T> {
	/// Creates a new builder with the given label for logs and error
	/// messages.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			entries: Vec::new(),
			next_ordinal: 0,
		}
	}

	/// Returns the number of entries declared so far.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no entries have been declared so far.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Declares an entry under the next automatic ordinal.
	///
	/// `construct` receives the assigned [`EntryMeta`] and must embed it in
	/// the entry it returns.
	pub fn declare(
		&mut self,
		name: &'static str,
		construct: impl FnOnce(EntryMeta) -> T,
	) -> Result<(), DeclareError> {
		self.insert(name, self.next_ordinal, construct)
	}

	/// Declares an entry under a manually chosen ordinal.
	///
	/// The ordinal must be non-negative and no less than the counter's
	/// current value. The counter advances to `ordinal + 1`, so later
	/// automatic entries skip over the gap.
	pub fn declare_at(
		&mut self,
		name: &'static str,
		ordinal: i64,
		construct: impl FnOnce(EntryMeta) -> T,
	) -> Result<(), DeclareError> {
		if ordinal < 0 {
			return Err(DeclareError::InvalidOrdinal { name, ordinal });
		}
		if ordinal < self.next_ordinal {
			return Err(DeclareError::DuplicateOrdinal {
				name,
				ordinal,
				next: self.next_ordinal,
			});
		}
		self.insert(name, ordinal, construct)
	}

	fn insert(
		&mut self,
		name: &'static str,
		ordinal: i64,
		construct: impl FnOnce(EntryMeta) -> T,
	) -> Result<(), DeclareError> {
		if self.entries.iter().any(|entry| entry.name() == name) {
			return Err(DeclareError::DuplicateName { name });
		}
		self.entries.push(construct(EntryMeta::new(ordinal, name)));
		self.next_ordinal = ordinal + 1;
		Ok(())
	}

	/// Freezes the declared entries into a [`Roster`].
	///
	/// # Example
	///
	/// ```
	/// use roster::{EntryMeta, RosterBuilder, RosterEntry};
	///
	/// struct Level {
	/// 	meta: EntryMeta,
	/// }
	/// roster::impl_roster_entry!(Level);
	///
	/// # fn main() -> Result<(), roster::DeclareError> {
	/// let mut builder = RosterBuilder::new("Level");
	/// builder.declare("LOW", |meta| Level { meta })?;
	/// builder.declare_at("HIGH", 10, |meta| Level { meta })?;
	/// let roster = builder.finish();
	/// assert_eq!(roster.get("HIGH").map(|level| level.ordinal()), Some(10));
	/// # Ok(())
	/// # }
	/// ```
	pub fn finish(self) -> Roster<T> {
		tracing::debug!(
			roster = self.label,
			entries = self.entries.len(),
			"roster built"
		);
		Roster::new(self.label, self.entries)
	}
}
