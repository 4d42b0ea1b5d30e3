//! Closed enumerations with ordinal identity, derived names, and property
//! lookup.
//!
//! A *roster* is the fixed entry list of one enumeration type. Every entry
//! carries a unique ordinal assigned in declaration order, the name it was
//! declared under, and optionally a bag of typed properties. A type's roster
//! is built lazily on first use, cached for the process lifetime, and then
//! queried by ordinal, by exact name, or by partial property match.
//!
//! Declare a type with the [`roster!`] macro; the entry name is written
//! exactly once and everything else is derived:
//!
//! ```
//! use roster::RosterEntry;
//!
//! roster::roster! {
//! 	/// HTTP-flavored status codes.
//! 	pub Status {
//! 		OK = { code: 200 },
//! 		NOT_FOUND = { code: 404 },
//! 		TEAPOT = 418 { code: 418 },
//! 	}
//! }
//!
//! assert_eq!(Status::OK.ordinal(), 0);
//! assert_eq!(Status::TEAPOT.ordinal(), 418);
//!
//! let not_found = Status::from("NOT_FOUND").unwrap();
//! assert_eq!(not_found.ordinal(), 1);
//! assert!(std::ptr::eq(Status::from(418).unwrap(), Status::TEAPOT.get()));
//! ```
//!
//! Entry types that need payload fields beyond a property bag are written by
//! hand against the same traits: embed an [`EntryMeta`], wire the entry
//! trait with [`impl_roster_entry!`], and drive a [`RosterBuilder`] from
//! [`Enumerated::roster`]. Lookup misses are always `None`; the only hard
//! errors are declaration-time ordinal and name violations, which abort the
//! enumeration being built.

mod builder;
mod entry;
mod error;
mod keys;
mod macros;
mod props;
mod roster;
mod selector;

#[cfg(feature = "catalog")]
pub mod catalog;

#[cfg(feature = "catalog")]
#[doc(hidden)]
pub mod __private {
	pub use inventory;
}

pub use builder::RosterBuilder;
pub use entry::{EntryMeta, Enumerated, RosterEntry};
pub use error::DeclareError;
pub use keys::EntryKey;
pub use props::{Properties, PropertyValue};
pub use roster::Roster;
pub use selector::Selector;

#[cfg(feature = "macros")]
pub use roster_macros::roster;
