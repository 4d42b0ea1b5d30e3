use crate::props::Properties;
use crate::roster::Roster;
use crate::selector::Selector;

/// Identity assigned to an entry when its enumeration is built.
///
/// Holds the ordinal and the declared name. A meta is handed out by
/// [`RosterBuilder`](crate::RosterBuilder) exactly once per entry and can
/// neither be constructed nor cloned elsewhere, so an entry cannot carry a
/// forged or duplicated ordinal.
pub struct EntryMeta {
	ordinal: i64,
	name: &'static str,
}

impl EntryMeta {
	pub(crate) fn new(ordinal: i64, name: &'static str) -> Self {
		Self { ordinal, name }
	}

	/// Returns the position of the entry within its enumeration.
	#[inline]
	pub fn ordinal(&self) -> i64 {
		self.ordinal
	}

	/// Returns the name the entry was declared under.
	#[inline]
	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl core::fmt::Debug for EntryMeta {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("EntryMeta")
			.field("ordinal", &self.ordinal)
			.field("name", &self.name)
			.finish()
	}
}

/// Trait for accessing enumeration metadata from entry types.
pub trait RosterEntry {
	/// Returns the metadata struct for this entry.
	fn meta(&self) -> &EntryMeta;

	/// Returns the ordinal.
	#[inline]
	fn ordinal(&self) -> i64 {
		self.meta().ordinal()
	}

	/// Returns the declared name.
	#[inline]
	fn name(&self) -> &'static str {
		self.meta().name()
	}

	/// Returns the property bag, or the shared empty bag when the entry
	/// carries none.
	fn properties(&self) -> &Properties {
		Properties::empty()
	}
}

/// Trait implemented by concrete enumeration types.
///
/// [`roster`](Self::roster) is the only required method; the `roster!` macro
/// generates it with a per-type `OnceLock`, so the entry list is built on
/// first use and cached for the process lifetime. Hand-rolled types follow
/// the same pattern (see the crate docs).
pub trait Enumerated: RosterEntry + Sized + Send + Sync + 'static {
	/// Returns the cached roster of this type, building it on first call.
	fn roster() -> &'static Roster<Self>;

	/// Returns every declared entry in declaration order.
	#[inline]
	fn values() -> &'static [Self] {
		Self::roster().entries()
	}

	/// Looks up an entry by ordinal, name, or partial property match.
	///
	/// Accepts anything convertible into a [`Selector`]: integers select by
	/// ordinal, strings by exact name, and [`&Properties`](Properties) by
	/// partial match. Returns `None` on a miss and on an ambiguous property
	/// query.
	///
	/// A trait method named `from` would be uncallable as `Type::from(..)`
	/// next to the blanket `impl From<T> for T`, so the trait method is
	/// `find`; the `roster!` macro emits an inherent `from` alias on each
	/// declared type.
	#[inline]
	fn find<'q>(query: impl Into<Selector<'q>>) -> Option<&'static Self> {
		Self::roster().lookup(query.into())
	}

	/// Returns the number of declared entries.
	#[inline]
	fn count() -> usize {
		Self::roster().len()
	}

	/// Returns a restartable iterator over the entries in declaration order.
	#[inline]
	fn iter() -> core::slice::Iter<'static, Self> {
		Self::values().iter()
	}
}

/// Implements [`RosterEntry`] for a type with a `meta: EntryMeta` field.
///
/// Pass a second identifier naming a [`Properties`] field to also wire the
/// property accessor.
#[macro_export]
macro_rules! impl_roster_entry {
	($type:ty) => {
		impl $crate::RosterEntry for $type {
			fn meta(&self) -> &$crate::EntryMeta {
				&self.meta
			}
		}
	};
	($type:ty, $props:ident) => {
		impl $crate::RosterEntry for $type {
			fn meta(&self) -> &$crate::EntryMeta {
				&self.meta
			}

			fn properties(&self) -> &$crate::Properties {
				&self.$props
			}
		}
	};
}
