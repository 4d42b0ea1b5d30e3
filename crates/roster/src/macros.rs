/// Builds a [`Properties`](crate::Properties) bag from `key: value` pairs.
///
/// Keys are written as bare identifiers; values are anything convertible
/// into a [`PropertyValue`](crate::PropertyValue).
///
/// ```
/// let query = roster::props! { code: 404, retryable: false };
/// assert_eq!(query.get("code").and_then(|v| v.as_int()), Some(404));
/// ```
#[macro_export]
macro_rules! props {
	() => {
		$crate::Properties::new()
	};
	($($key:ident: $value:expr),+ $(,)?) => {
		$crate::Properties::new()$(.with(::core::stringify!($key), $value))+
	};
}

/// Submits a catalog record for a declared enumeration. Macro use only.
#[cfg(feature = "catalog")]
#[doc(hidden)]
#[macro_export]
macro_rules! __roster_catalog_submit {
	($type:ty) => {
		$crate::__private::inventory::submit! {
			$crate::catalog::RosterInfo::new(
				::core::stringify!($type),
				|| <$type as $crate::Enumerated>::count(),
				|| <$type as $crate::Enumerated>::values()
					.iter()
					.map(|entry| $crate::RosterEntry::name(entry))
					.collect(),
			)
		}
	};
}

#[cfg(not(feature = "catalog"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __roster_catalog_submit {
	($type:ty) => {};
}
