use crate::props::Properties;

/// A lookup argument: ordinal, exact name, or partial property match.
///
/// [`Enumerated::find`](crate::Enumerated::find) and the inherent `from`
/// alias on `roster!` types accept anything that converts into one of
/// these, so call sites write `Status::from(2)`, `Status::from("OK")`, or
/// `Status::from(&query)` directly.
#[derive(Debug, Clone, Copy)]
pub enum Selector<'q> {
	/// Select by ordinal.
	Ordinal(i64),
	/// Select by exact, case-sensitive name.
	Name(&'q str),
	/// Select by partial property match.
	Props(&'q Properties),
}

impl From<i64> for Selector<'_> {
	fn from(ordinal: i64) -> Self {
		Selector::Ordinal(ordinal)
	}
}

impl From<i32> for Selector<'_> {
	fn from(ordinal: i32) -> Self {
		Selector::Ordinal(i64::from(ordinal))
	}
}

impl From<u32> for Selector<'_> {
	fn from(ordinal: u32) -> Self {
		Selector::Ordinal(i64::from(ordinal))
	}
}

impl From<usize> for Selector<'_> {
	fn from(ordinal: usize) -> Self {
		Selector::Ordinal(ordinal as i64)
	}
}

impl<'q> From<&'q str> for Selector<'q> {
	fn from(name: &'q str) -> Self {
		Selector::Name(name)
	}
}

impl<'q> From<&'q Properties> for Selector<'q> {
	fn from(query: &'q Properties) -> Self {
		Selector::Props(query)
	}
}
