/// Fatal declaration errors.
///
/// Any of these aborts the enumeration being built. Lookups never produce
/// errors; a miss or an ambiguous match is `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclareError {
	/// A manually chosen ordinal was negative.
	#[error("ordinal {ordinal} for `{name}` cannot be negative")]
	InvalidOrdinal { name: &'static str, ordinal: i64 },
	/// A manually chosen ordinal was already assigned or fell behind the
	/// counter.
	#[error("ordinal {ordinal} for `{name}` is already taken (next free ordinal is {next})")]
	DuplicateOrdinal {
		name: &'static str,
		ordinal: i64,
		next: i64,
	},
	/// The same name was declared twice.
	#[error("`{name}` is declared twice")]
	DuplicateName { name: &'static str },
}
