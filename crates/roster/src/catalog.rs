//! Process-wide catalog of declared enumerations.
//!
//! Every `roster!` declaration submits a [`RosterInfo`] record through
//! `inventory`, so a host can see what the crates it links declared without
//! naming the types. Iteration order across types is unspecified; the
//! catalog is diagnostic, not semantic.

/// Descriptor for one declared enumeration type.
pub struct RosterInfo {
	/// The declared type name.
	pub type_name: &'static str,
	/// Returns the number of entries, building the roster on first use.
	pub count: fn() -> usize,
	/// Returns the declared entry names in declaration order.
	pub names: fn() -> Vec<&'static str>,
}

impl RosterInfo {
	/// Creates a descriptor. Macro use only.
	#[doc(hidden)]
	pub const fn new(
		type_name: &'static str,
		count: fn() -> usize,
		names: fn() -> Vec<&'static str>,
	) -> Self {
		Self {
			type_name,
			count,
			names,
		}
	}
}

impl core::fmt::Debug for RosterInfo {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("RosterInfo")
			.field("type_name", &self.type_name)
			.finish()
	}
}

inventory::collect!(RosterInfo);

/// Returns an iterator over every declared enumeration in the process.
pub fn all() -> impl Iterator<Item = &'static RosterInfo> {
	inventory::iter::<RosterInfo>.into_iter()
}

/// Finds a declared enumeration by type name.
pub fn find(type_name: &str) -> Option<&'static RosterInfo> {
	all().find(|info| info.type_name == type_name)
}

/// Logs one debug line per declared enumeration.
pub fn log_summary() {
	for info in all() {
		tracing::debug!(
			roster = info.type_name,
			entries = (info.count)(),
			"declared enumeration"
		);
	}
}
