use core::marker::PhantomData;
use core::ops::Deref;

use crate::entry::Enumerated;

/// Typed handle to one declared entry of an enumeration.
///
/// The `roster!` macro emits one of these as an associated const per entry.
/// A key stores the declaration slot rather than a reference because entries
/// materialize lazily on first roster access; [`get`](Self::get) resolves
/// through the cached roster.
pub struct EntryKey<T: Enumerated> {
	slot: usize,
	_marker: PhantomData<fn() -> T>,
}

impl<T: Enumerated> EntryKey<T> {
	/// Creates a key for a declaration slot. Macro use only.
	#[doc(hidden)]
	pub const fn new(slot: usize) -> Self {
		Self {
			slot,
			_marker: PhantomData,
		}
	}

	/// Resolves the key to its entry, building the roster on first use.
	#[inline]
	pub fn get(self) -> &'static T {
		&T::roster().entries()[self.slot]
	}
}

impl<T: Enumerated> Clone for EntryKey<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: Enumerated> Copy for EntryKey<T> {}

impl<T: Enumerated> Deref for EntryKey<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		self.get()
	}
}

impl<T: Enumerated> core::fmt::Debug for EntryKey<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("EntryKey").field(&self.slot).finish()
	}
}
