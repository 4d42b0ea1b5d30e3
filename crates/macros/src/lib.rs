//! Procedural macros for the `roster` crate.

use proc_macro::TokenStream;

/// Enumeration declaration macro implementation.
mod enumeration;

/// Declares a closed enumeration type and its entries.
///
/// Each entry is a bare identifier, optionally followed by a manual ordinal
/// and/or a property block:
///
/// ```ignore
/// roster::roster! {
///     /// HTTP-flavored status codes.
///     pub Status {
///         OK = { code: 200, phrase: "OK" },
///         CREATED = { code: 201, phrase: "Created" },
///         TEAPOT = 418 { code: 418, phrase: "I'm a teapot" },
///         PROCESSING,
///     }
/// }
/// ```
///
/// Ordinals are assigned in declaration order starting at 0; a manual
/// ordinal jumps the counter forward and later entries continue after it.
/// Negative, backward, and duplicate ordinals are rejected at compile time,
/// as are duplicate entry names.
///
/// The macro generates the entry struct, its `RosterEntry`, `Enumerated`,
/// and `Debug` impls, one `EntryKey` associated const per entry (so
/// `Status::TEAPOT` resolves to the declared entry), and an inherent `from`
/// associated function that forwards to `Enumerated::find`, so lookups read
/// `Status::from(418)`, `Status::from("OK")`, or `Status::from(&query)`.
#[proc_macro]
pub fn roster(input: TokenStream) -> TokenStream {
	enumeration::expand(input)
}
